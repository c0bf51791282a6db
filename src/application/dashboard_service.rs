// Dashboard service - Use cases behind the notes overview
use crate::application::error::{ClientError, ClientResult};
use crate::application::notes_api::{CategoryChanges, NotesApi};
use crate::application::session_store::SessionStore;
use crate::domain::category::{default_category, Category, CategoryId, NEW_CATEGORY_COLOR};
use crate::domain::dashboard::Dashboard;
use crate::domain::note::{Note, NoteId};
use crate::domain::profile::greeting_name;
use crate::domain::selection::Selection;
use chrono::{DateTime, TimeZone};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn NotesApi>,
    sessions: Arc<dyn SessionStore>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn NotesApi>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { api, sessions }
    }

    /// Fetch notes and categories together and lay them out for `selection`.
    pub async fn get_dashboard<Tz: TimeZone>(
        &self,
        selection: Selection,
        now: &DateTime<Tz>,
    ) -> ClientResult<Dashboard> {
        let session = self.sessions.require()?;
        let (notes, categories) = self.fetch_snapshot(&session.token).await?;

        tracing::debug!(
            "Loaded {} notes and {} categories for selection {}",
            notes.len(),
            categories.len(),
            selection
        );

        Ok(Dashboard::build(
            &notes,
            &categories,
            selection,
            greeting_name(&session.first_name),
            now,
        ))
    }

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let session = self.sessions.require()?;
        self.api.list_categories(&session.token).await
    }

    /// Create an empty note in the default category.
    pub async fn create_note(&self) -> ClientResult<Note> {
        let session = self.sessions.require()?;
        let categories = self.api.list_categories(&session.token).await?;
        let category = default_category(&categories).ok_or_else(|| {
            ClientError::Validation("no categories available to file the note under".to_string())
        })?;

        let note = self.api.create_note(&session.token, Some(category.id)).await?;
        tracing::info!("Created note {} in category {}", note.id, category.name);
        Ok(note)
    }

    pub async fn delete_note(&self, id: NoteId) -> ClientResult<()> {
        let session = self.sessions.require()?;
        self.api.delete_note(&session.token, id).await?;
        tracing::info!("Deleted note {}", id);
        Ok(())
    }

    /// Delete every note, one request at a time. Returns how many were removed.
    pub async fn clear_all(&self) -> ClientResult<usize> {
        let session = self.sessions.require()?;
        let notes = self.api.list_notes(&session.token).await?;

        let mut deleted = 0;
        for note in &notes {
            self.api.delete_note(&session.token, note.id).await?;
            deleted += 1;
        }

        tracing::info!("Cleared {} notes", deleted);
        Ok(deleted)
    }

    pub async fn populate(&self, subject: &str) -> ClientResult<usize> {
        let session = self.sessions.require()?;
        let created = self.api.populate(&session.token, subject.trim()).await?;
        tracing::info!("Populated {} notes inspired by '{}'", created, subject);
        Ok(created)
    }

    /// Create a category; the name is trimmed and must not be blank.
    pub async fn create_category(&self, name: &str, color: Option<&str>) -> ClientResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::Validation("Category name is required.".to_string()));
        }
        let session = self.sessions.require()?;
        let color = color.unwrap_or(NEW_CATEGORY_COLOR);

        let category = self.api.create_category(&session.token, name, color).await?;
        tracing::info!("Created category {} '{}'", category.id, category.name);
        Ok(category)
    }

    pub async fn rename_category(
        &self,
        id: CategoryId,
        changes: &CategoryChanges,
    ) -> ClientResult<Category> {
        if changes.name.is_none() && changes.color.is_none() {
            return Err(ClientError::Validation("nothing to change".to_string()));
        }
        let session = self.sessions.require()?;
        self.api.update_category(&session.token, id, changes).await
    }

    async fn fetch_snapshot(&self, token: &str) -> ClientResult<(Vec<Note>, Vec<Category>)> {
        futures::try_join!(self.api.list_notes(token), self.api.list_categories(token))
    }
}
