// Auth service - Use cases for registering, logging in and out
use crate::application::error::ClientResult;
use crate::application::notes_api::{AuthGrant, Credentials, NotesApi, Registration};
use crate::application::session_store::{Session, SessionStore};
use crate::domain::profile::Profile;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn NotesApi>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<dyn NotesApi>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { api, sessions }
    }

    pub async fn register(&self, registration: &Registration) -> ClientResult<Profile> {
        let grant = self.api.register(registration).await?;
        tracing::info!("Registered new user {}", grant.profile.username);
        self.store(grant)
    }

    pub async fn login(&self, credentials: &Credentials) -> ClientResult<Profile> {
        let grant = self.api.login(credentials).await?;
        tracing::info!("Logged in as {}", grant.profile.username);
        self.store(grant)
    }

    /// Ends the session on the server, then locally. The local session is
    /// removed even when the server call fails.
    pub async fn logout(&self) -> ClientResult<()> {
        let session = self.sessions.require()?;
        if let Err(e) = self.api.logout(&session.token).await {
            tracing::warn!("Server logout failed, clearing local session anyway: {}", e);
        }
        self.sessions.clear()
    }

    fn store(&self, grant: AuthGrant) -> ClientResult<Profile> {
        self.sessions.save(&Session {
            token: grant.token,
            first_name: grant.profile.first_name.clone(),
        })?;
        Ok(grant.profile)
    }
}
