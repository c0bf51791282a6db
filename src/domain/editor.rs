// Note editor close rules
use super::note::Note;

pub const INCOMPLETE_MESSAGE: &str = "Please, enter both Title and Contents of the Note";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Both fields filled in; the note stays.
    Keep,
    /// Nothing was written; the note should be deleted.
    Discard,
    /// Only one of title/content was written.
    Incomplete,
}

pub fn close_action(note: &Note) -> CloseAction {
    let has_title = !note.title.trim().is_empty();
    let has_content = !note.content.trim().is_empty();
    match (has_title, has_content) {
        (true, true) => CloseAction::Keep,
        (false, false) => CloseAction::Discard,
        _ => CloseAction::Incomplete,
    }
}
