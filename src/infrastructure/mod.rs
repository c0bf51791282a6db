// Infrastructure layer - External dependencies and adapters
pub mod api_types;
pub mod config;
pub mod http_api;
pub mod session_file;
