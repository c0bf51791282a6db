// Notes client - Domain, use cases and adapters for the notes REST API
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
