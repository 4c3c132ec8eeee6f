//! Auth card utility functions
//!
//! Colors, centering and the fade blanking shared by the components

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};

/// Brand violet of the submit button and focus rings.
pub const ACCENT: Color = Color::Rgb(75, 57, 239);
pub const CARD_BG: Color = Color::White;
pub const MUTED: Color = Color::Rgb(107, 114, 128);
pub const OUTLINE: Color = Color::Rgb(209, 213, 219);
pub const SELECTED_BG: Color = Color::Rgb(239, 246, 255);

/// Border style for a control, highlighted when it has focus.
pub fn border_style(focused: bool, idle: Color) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(idle)
    }
}

/// A `width` wide rectangle centered horizontally in `area`.
pub fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

/// Replaces everything in `area` with blank card background.
pub fn blank(area: Rect, buf: &mut Buffer) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_style(Style::default().bg(CARD_BG));
            }
        }
    }
}
