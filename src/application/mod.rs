// Application layer - Use cases over the remote notes API
pub mod auth_service;
pub mod dashboard_service;
pub mod editor_service;
pub mod error;
pub mod notes_api;
pub mod profile_service;
pub mod session_store;

#[cfg(test)]
pub mod testing;
