// Editor service - Use cases for viewing and editing a single note
use crate::application::error::ClientResult;
use crate::application::notes_api::NotesApi;
use crate::application::session_store::SessionStore;
use crate::domain::category::Category;
use crate::domain::editor::{close_action, CloseAction};
use crate::domain::note::{Note, NoteChanges, NoteId};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct OpenedNote {
    pub note: Note,
    pub categories: Vec<Category>,
}

/// What happened to the note once the edit was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Saved(Note),
    /// Title and content were both blank, so the note was deleted.
    Discarded(NoteId),
    /// Saved, but only one of title/content is filled in.
    Incomplete(Note),
}

#[derive(Clone)]
pub struct EditorService {
    api: Arc<dyn NotesApi>,
    sessions: Arc<dyn SessionStore>,
}

impl EditorService {
    pub fn new(api: Arc<dyn NotesApi>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { api, sessions }
    }

    pub async fn open(&self, id: NoteId) -> ClientResult<OpenedNote> {
        let session = self.sessions.require()?;
        let (note, categories) = futures::try_join!(
            self.api.get_note(&session.token, id),
            self.api.list_categories(&session.token)
        )?;
        Ok(OpenedNote { note, categories })
    }

    /// Send the changes, then apply the close rules to the saved note.
    pub async fn apply(&self, id: NoteId, changes: &NoteChanges) -> ClientResult<EditOutcome> {
        let session = self.sessions.require()?;

        let note = if changes.is_empty() {
            self.api.get_note(&session.token, id).await?
        } else {
            self.api.update_note(&session.token, id, changes).await?
        };

        match close_action(&note) {
            CloseAction::Keep => Ok(EditOutcome::Saved(note)),
            CloseAction::Incomplete => Ok(EditOutcome::Incomplete(note)),
            CloseAction::Discard => {
                self.api.delete_note(&session.token, id).await?;
                tracing::info!("Discarded empty note {}", id);
                Ok(EditOutcome::Discarded(id))
            }
        }
    }
}
