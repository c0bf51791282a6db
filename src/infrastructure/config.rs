use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1/";
const DEFAULT_TIMEOUT_SECS: i64 = 10;
const DEFAULT_SESSION_PATH: &str = ".notes-session.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub path: PathBuf,
}

/// Defaults, then `config/client.{toml,yaml,json}` if present, then
/// `NOTES_` environment variables (`NOTES_API__BASE_URL=...`).
pub fn load_client_config() -> anyhow::Result<ClientConfig> {
    load_client_config_from("config/client")
}

pub fn load_client_config_from(file: &str) -> anyhow::Result<ClientConfig> {
    let settings = config::Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS)?
        .set_default("session.path", DEFAULT_SESSION_PATH)?
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix("NOTES")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
