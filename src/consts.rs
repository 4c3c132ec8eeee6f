pub mod cli_consts {
    //! Mockup Configuration Constants
    //!
    //! Timings and geometry shared by the frame, the auth card and the app
    //! loop, organized by functional area.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity panel.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Minimum width of the activity panel; narrower terminals hide it.
    pub const ACTIVITY_PANEL_MIN_WIDTH: u16 = 30;

    // =============================================================================
    // TIMING
    // =============================================================================

    /// Fade timings for the login/sign-up transition
    pub mod fade {
        /// Content fade-out before the mode flips (milliseconds)
        pub const FADE_OUT_MS: u64 = 150;
        /// Content fade-in after the mode flips (milliseconds)
        pub const FADE_IN_MS: u64 = 150;
        /// Upper bound for either phase, from flags or the config file
        pub const MAX_FADE_MS: u64 = 5000;
    }

    /// Input poll interval for the UI loop (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 16;

    /// How long the splash screen stays up (seconds)
    pub const SPLASH_DURATION_SECS: u64 = 2;

    /// Largest width or height accepted by `snapshot`
    pub const MAX_SNAPSHOT_SIZE: u16 = 500;

    // =============================================================================
    // PHONE FRAME GEOMETRY
    // =============================================================================

    /// Phone frame dimensions in terminal cells
    pub mod frame {
        /// Outer width of the phone, border included
        pub const FRAME_WIDTH: u16 = 40;
        /// Outer height of the phone, border included
        pub const FRAME_HEIGHT: u16 = 38;
        /// Width of the notch drawn over the top of the viewport
        pub const NOTCH_WIDTH: u16 = 16;
        /// Horizontal padding inside the scroll viewport
        pub const PADDING_X: u16 = 1;
        /// Vertical padding inside the scroll viewport
        pub const PADDING_Y: u16 = 1;
        /// Rows scrolled per PageUp/PageDown or wheel notch
        pub const SCROLL_STEP: u16 = 3;
    }

    // =============================================================================
    // AUTH CARD GEOMETRY
    // =============================================================================

    /// Row budget of the screen hosted inside the phone
    pub mod card {
        /// Back button row
        pub const BACK_HEIGHT: u16 = 1;
        /// Diamond logo rows
        pub const LOGO_HEIGHT: u16 = 5;
        /// "State Name" caption row
        pub const CAPTION_HEIGHT: u16 = 1;
        /// Card height including its border; identical in both modes
        pub const CARD_HEIGHT: u16 = 28;
        /// Gap below the card
        pub const BOTTOM_MARGIN: u16 = 1;
        /// Height of a bordered input row (fields, PIN slots, buttons)
        pub const FIELD_HEIGHT: u16 = 3;
        /// Width of the role selector button
        pub const ROLE_BUTTON_WIDTH: u16 = 18;
        /// Width of one PIN slot
        pub const PIN_SLOT_WIDTH: u16 = 5;
        /// Gap between PIN slots
        pub const PIN_SLOT_GAP: u16 = 3;
    }
}
