// Presentation layer - HTTP surface over page sessions
pub mod app_state;
pub mod handlers;
pub mod view_model;
