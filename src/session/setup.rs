//! Session setup and initialization

use crate::config::Config;
use crate::ui::UIConfig;
use crate::ui::auth_card::FadeTimings;

/// Command-line overrides for the interactive session.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartOverrides {
    /// Disable the viewport gradient
    pub no_background: bool,
    /// Use this duration for both fade phases
    pub fade_ms: Option<u64>,
    /// Mount the card immediately
    pub skip_splash: bool,
}

/// Resolves the UI configuration for a session.
///
/// Flags given on the command line win over values from the config file.
pub fn setup_session(config: &Config, overrides: StartOverrides) -> UIConfig {
    let timings = match overrides.fade_ms {
        Some(ms) => FadeTimings::from_millis(ms, ms),
        None => {
            let (fade_out_ms, fade_in_ms) = config.fade_millis();
            FadeTimings::from_millis(fade_out_ms, fade_in_ms)
        }
    };
    UIConfig::new(
        config.with_background_color && !overrides.no_background,
        timings,
        config.show_activity,
        overrides.skip_splash,
    )
}
