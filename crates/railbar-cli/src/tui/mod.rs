//! Terminal User Interface for Railbar

pub mod app;
pub mod components;
pub mod handlers;
pub mod state;

// Re-exports
pub use app::App;
