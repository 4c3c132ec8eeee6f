pub mod headless_mode;
pub mod messages;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::{SnapshotOptions, run_snapshot};
pub use setup::{StartOverrides, setup_session};
pub use tui_mode::run_tui_mode;
