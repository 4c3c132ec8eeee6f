//! Login / sign-up card
//!
//! Split into state, input routing, timers and rendering

pub mod card;
pub mod components;
pub mod hit_map;
pub mod input;
pub mod renderer;
pub mod state;
pub mod transition;
pub mod utils;

// Re-export main types and functions for external use
pub use card::AuthCard;
pub use input::handle_key;
pub use renderer::AuthScreen;
pub use state::{Mode, Role};
pub use transition::FadeTimings;
