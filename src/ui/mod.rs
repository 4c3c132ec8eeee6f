// Module declarations
mod activity;
mod app;
pub mod auth_card;
pub mod phone_frame;
pub mod pointer;
pub mod splash;
// Re-exports for external use
pub use app::{App, UIConfig, run};
