// Profile service - Use cases for viewing and updating the user profile
use crate::application::error::ClientResult;
use crate::application::notes_api::NotesApi;
use crate::application::session_store::{Session, SessionStore};
use crate::domain::profile::{Profile, ProfileUpdate};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProfileService {
    api: Arc<dyn NotesApi>,
    sessions: Arc<dyn SessionStore>,
}

impl ProfileService {
    pub fn new(api: Arc<dyn NotesApi>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { api, sessions }
    }

    pub async fn show(&self) -> ClientResult<Profile> {
        let session = self.sessions.require()?;
        self.api.get_profile(&session.token).await
    }

    pub async fn update(&self, update: &ProfileUpdate) -> ClientResult<Profile> {
        update.validate()?;
        let session = self.sessions.require()?;

        let profile = self.api.update_profile(&session.token, update).await?;
        self.sessions.save(&Session {
            token: session.token,
            first_name: profile.first_name.clone(),
        })?;

        tracing::info!("Profile updated for {}", profile.username);
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ClientError;
    use crate::application::testing::{FakeNotesApi, MemorySessionStore};
    use crate::domain::profile::{PasswordChange, ProfileValidationError};

    #[tokio::test]
    async fn test_update_refreshes_stored_first_name() {
        let sessions = Arc::new(MemorySessionStore::logged_in());
        let service = ProfileService::new(Arc::new(FakeNotesApi::new()), sessions.clone());

        let update = ProfileUpdate {
            first_name: Some("Maria".to_string()),
            ..Default::default()
        };
        let profile = service.update(&update).await.unwrap();

        assert_eq!(profile.first_name, "Maria");
        assert_eq!(profile.last_name, "Smith");
        assert_eq!(sessions.load().unwrap().unwrap().first_name, "Maria");
    }

    #[tokio::test]
    async fn test_update_rejects_mismatched_passwords_before_calling_api() {
        let api = Arc::new(FakeNotesApi::new());
        let service = ProfileService::new(api.clone(), Arc::new(MemorySessionStore::logged_in()));

        let update = ProfileUpdate {
            password: Some(PasswordChange {
                current: "pw".to_string(),
                new: "a".to_string(),
                repeat: "b".to_string(),
            }),
            ..Default::default()
        };
        let result = service.update(&update).await;

        assert!(matches!(
            result,
            Err(ClientError::Profile(ProfileValidationError::PasswordMismatch))
        ));
        assert_eq!(api.profile().first_name, "Mary");
    }

    #[tokio::test]
    async fn test_update_with_wrong_current_password() {
        let service = ProfileService::new(
            Arc::new(FakeNotesApi::new()),
            Arc::new(MemorySessionStore::logged_in()),
        );
        let update = ProfileUpdate {
            password: Some(PasswordChange {
                current: "nope".to_string(),
                new: "new".to_string(),
                repeat: "new".to_string(),
            }),
            ..Default::default()
        };

        let result = service.update(&update).await;
        assert!(matches!(result, Err(ClientError::Api { status: 400, .. })));
    }
}
