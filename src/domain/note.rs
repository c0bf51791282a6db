// Note domain model
use super::category::{Category, CategoryId};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Characters of content shown on a dashboard card before truncation.
pub const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(NoteId)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: Option<Category>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Note {
    pub fn new(id: NoteId, title: String, content: String, category: Option<Category>) -> Self {
        Self {
            id,
            title,
            content,
            category,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Content cut to `max_chars` characters, with "..." appended when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            return self.content.clone();
        }
        let mut cut: String = self.content.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    }
}

/// Partial update sent by the editor. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl NoteChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.category_id.is_none()
    }

    /// Apply to a local copy so the editor sees what the server now holds.
    pub fn apply_to(&self, note: &mut Note, categories: &[Category]) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(id) = self.category_id {
            // The server drops the category when the id is not one of ours.
            note.category = categories.iter().find(|c| c.id == id).cloned();
        }
    }
}
