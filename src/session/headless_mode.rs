//! Headless snapshot execution
//!
//! Mounts a card without a terminal, drives it through the same operations
//! the TUI uses and renders a single frame into an in-memory backend.

use crate::consts::cli_consts::frame::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::ui::auth_card::{AuthCard, AuthScreen, FadeTimings, Mode, Role};
use crate::ui::phone_frame::PhoneFrame;
use crate::ui::pointer::PointerBus;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use std::error::Error;

/// What to put on the card before rendering.
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    pub mode: Mode,
    pub role: Option<Role>,
    /// Typed into the PIN slots left to right; non-digits are rejected.
    pub pin: String,
    pub open_menu: bool,
    pub width: u16,
    pub height: u16,
    pub with_background_color: bool,
    pub timings: FadeTimings,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            role: None,
            pin: String::new(),
            open_menu: false,
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            with_background_color: false,
            timings: FadeTimings::default(),
        }
    }
}

/// Renders the card to plain text, one line per terminal row.
pub async fn render_snapshot(options: &SnapshotOptions) -> Result<String, Box<dyn Error>> {
    let bus = PointerBus::new();
    let mut card = AuthCard::mount(&bus, options.timings);

    // Mode first: switching clears the PIN and the role.
    if card.switch_mode(options.mode) {
        card.settle().await;
    }
    if let Some(role) = options.role {
        card.select_role(role);
    }
    let mut slot = 0;
    for c in options.pin.chars() {
        if card.pin_input(slot, &c.to_string()) {
            slot += 1;
        }
    }
    if options.open_menu {
        card.toggle_dropdown();
    }

    let mut terminal = Terminal::new(TestBackend::new(options.width, options.height))?;
    terminal.draw(|f| {
        let area = f.area();
        let (_, hits) = PhoneFrame::new(AuthScreen::new(&card))
            .background(options.with_background_color)
            .render(area, f.buffer_mut());
        log::debug!("Snapshot submit button at {:?}", hits.submit);
    })?;

    for event in card.drain_events() {
        log::debug!("{}", event);
    }
    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// Prints a snapshot to stdout.
pub async fn run_snapshot(options: SnapshotOptions) -> Result<(), Box<dyn Error>> {
    let text = render_snapshot(&options).await?;
    print!("{}", text);
    Ok(())
}

fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
