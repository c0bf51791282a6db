// User profile domain model
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub repeat: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<PasswordChange>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileValidationError {
    #[error("Current password is required to set a new password.")]
    MissingCurrentPassword,
    #[error("New password and repeat do not match.")]
    PasswordMismatch,
}

impl ProfileUpdate {
    /// Same checks the server applies, run before the round trip.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        let Some(change) = &self.password else {
            return Ok(());
        };
        if change.new.is_empty() && change.repeat.is_empty() {
            return Ok(());
        }
        if change.current.is_empty() {
            return Err(ProfileValidationError::MissingCurrentPassword);
        }
        if change.new != change.repeat {
            return Err(ProfileValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Dashboard greeting name: first word of the first name, capitalized.
pub fn greeting_name(first_name: &str) -> Option<String> {
    let word = first_name.split_whitespace().next()?;
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
}
