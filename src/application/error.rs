// Errors surfaced by the application services
use crate::domain::profile::ProfileValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not logged in; run `notes login` first")]
    NotLoggedIn,

    #[error("session rejected by the server; please log in again")]
    Unauthorized,

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to reach the notes API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Profile(#[from] ProfileValidationError),

    #[error("session storage error: {0}")]
    Session(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
