//! Auth screen header component
//!
//! Back button, diamond logo, caption and the card heading

use super::super::state::Mode;
use super::super::utils::{MUTED, border_style};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

pub const SUBTITLE: &str = "Please select role and enter the PIN.";

/// Renders the decorative back button and returns its rectangle.
pub fn render_back(area: Rect, buf: &mut Buffer, focused: bool) -> Rect {
    let rect = Rect::new(area.x, area.y, area.width.min(3), area.height.min(1));
    let style = border_style(focused, Color::Black).add_modifier(Modifier::BOLD);
    Paragraph::new(Span::styled(" < ", style)).render(rect, buf);
    rect
}

/// Yellow diamond with the school name.
pub fn render_logo(area: Rect, buf: &mut Buffer) {
    let face = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("/\\", face)),
        Line::from(Span::styled("/CDL\\", face)),
        Line::from(Span::styled("<SCHOOLS>", face)),
        Line::from(vec![
            Span::styled("\\ ", face),
            Span::styled("⊕", face.fg(Color::Blue)),
            Span::styled(" /", face),
        ]),
        Line::from(Span::styled("\\/", face)),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

pub fn render_caption(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        "  State Name",
        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
    )))
    .render(area, buf);
}

/// Heading that follows the mode, with the instruction line below it.
pub fn render_heading(area: Rect, buf: &mut Buffer, mode: Mode) {
    let [title, subtitle] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    Paragraph::new(Span::styled(
        mode.heading(),
        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
    ))
    .render(title, buf);

    Paragraph::new(Span::styled(SUBTITLE, Style::default().fg(MUTED)))
        .wrap(Wrap { trim: true })
        .render(subtitle, buf);
}
