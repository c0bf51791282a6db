// Local storage for the authenticated session
use crate::application::error::ClientResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub first_name: String,
}

pub trait SessionStore: Send + Sync {
    fn load(&self) -> ClientResult<Option<Session>>;

    fn save(&self, session: &Session) -> ClientResult<()>;

    fn clear(&self) -> ClientResult<()>;

    /// The stored session, or `NotLoggedIn`.
    fn require(&self) -> ClientResult<Session> {
        self.load()?
            .ok_or(crate::application::error::ClientError::NotLoggedIn)
    }
}
