// Repository trait for the remote notes API
use crate::application::error::ClientResult;
use crate::domain::category::{Category, CategoryId};
use crate::domain::note::{Note, NoteChanges, NoteId};
use crate::domain::profile::{Profile, ProfileUpdate};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Token plus the user it was issued for, as returned by login/register.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthGrant {
    pub token: String,
    pub profile: Profile,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Calls against the notes service. Authenticated calls take the session token.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn register(&self, registration: &Registration) -> ClientResult<AuthGrant>;

    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthGrant>;

    async fn logout(&self, token: &str) -> ClientResult<()>;

    /// All notes of the user, most recently updated first
    async fn list_notes(&self, token: &str) -> ClientResult<Vec<Note>>;

    async fn get_note(&self, token: &str, id: NoteId) -> ClientResult<Note>;

    async fn create_note(&self, token: &str, category_id: Option<CategoryId>) -> ClientResult<Note>;

    async fn update_note(&self, token: &str, id: NoteId, changes: &NoteChanges) -> ClientResult<Note>;

    async fn delete_note(&self, token: &str, id: NoteId) -> ClientResult<()>;

    async fn list_categories(&self, token: &str) -> ClientResult<Vec<Category>>;

    async fn create_category(&self, token: &str, name: &str, color: &str) -> ClientResult<Category>;

    async fn update_category(
        &self,
        token: &str,
        id: CategoryId,
        changes: &CategoryChanges,
    ) -> ClientResult<Category>;

    async fn get_profile(&self, token: &str) -> ClientResult<Profile>;

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> ClientResult<Profile>;

    /// Ask the server to generate sample notes inspired by `subject`
    async fn populate(&self, token: &str, subject: &str) -> ClientResult<usize>;
}
