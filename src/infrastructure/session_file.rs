// TOML file holding the auth token between runs
use crate::application::error::{ClientError, ClientResult};
use crate::application::session_store::{Session, SessionStore};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
    #[serde(default)]
    first_name: String,
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClientError::Session(e.to_string())),
        };

        let file: SessionFile = match toml::from_str(&raw) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                return Ok(None);
            }
        };

        if file.token.is_empty() {
            return Ok(None);
        }

        Ok(Some(Session {
            token: file.token,
            first_name: file.first_name,
        }))
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        let file = SessionFile {
            token: session.token.clone(),
            first_name: session.first_name.clone(),
        };
        let raw = toml::to_string(&file).map_err(|e| ClientError::Session(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ClientError::Session(e.to_string()))?;
        }
        std::fs::write(&self.path, raw).map_err(|e| ClientError::Session(e.to_string()))?;

        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Session(e.to_string())),
        }
    }
}
