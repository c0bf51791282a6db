// Domain layer - Pure note-taking models and computations
pub mod aggregation;
pub mod category;
pub mod dashboard;
pub mod date_label;
pub mod editor;
pub mod note;
pub mod profile;
pub mod selection;
