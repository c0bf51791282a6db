// Main entry point - Dependency injection and command dispatch
use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use notes_client::application::auth_service::AuthService;
use notes_client::application::dashboard_service::DashboardService;
use notes_client::application::editor_service::EditorService;
use notes_client::application::profile_service::ProfileService;
use notes_client::infrastructure::config::load_client_config;
use notes_client::infrastructure::http_api::HttpNotesApi;
use notes_client::infrastructure::session_file::FileSessionStore;
use notes_client::presentation::app_state::AppState;
use notes_client::presentation::cli::Cli;
use notes_client::presentation::handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = load_client_config().context("Failed to load client configuration")?;
    let base_url = cli.api_url.as_deref().unwrap_or(&config.api.base_url);
    tracing::debug!("Using notes API at {}", base_url);

    // Create adapters (infrastructure layer)
    let api = Arc::new(HttpNotesApi::new(base_url, config.api.timeout())?);
    let sessions = Arc::new(FileSessionStore::new(config.session.path.clone()));

    // Create services (application layer)
    let state = AppState {
        auth_service: AuthService::new(api.clone(), sessions.clone()),
        dashboard_service: DashboardService::new(api.clone(), sessions.clone()),
        editor_service: EditorService::new(api.clone(), sessions.clone()),
        profile_service: ProfileService::new(api, sessions),
    };

    handlers::run(&state, cli.command).await
}
