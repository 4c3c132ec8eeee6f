//! Form fields component
//!
//! Email, password and confirm-password inputs plus the submit button

use super::super::utils::{ACCENT, MUTED, OUTLINE, border_style, center_horizontally};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Eye-off icon at the end of password inputs. Decorative.
pub const EYE_OFF: &str = "⊘";

/// One text input.
pub struct TextField<'a> {
    pub placeholder: &'a str,
    pub value: &'a str,
    pub masked: bool,
    pub focused: bool,
}

impl TextField<'_> {
    /// Renders the field into `area` and returns the rectangle it occupies.
    pub fn render(self, area: Rect, buf: &mut Buffer) -> Rect {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(self.focused, OUTLINE));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = if self.value.is_empty() && !self.focused {
            vec![Span::styled(self.placeholder, Style::default().fg(MUTED))]
        } else {
            let shown = if self.masked {
                "•".repeat(self.value.chars().count())
            } else {
                self.value.to_string()
            };
            vec![Span::styled(shown, Style::default().fg(Color::Black))]
        };
        if self.focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if self.masked && inner.width > 2 {
            let icon = Rect::new(inner.right() - 1, inner.y, 1, inner.height.min(1));
            Paragraph::new(Span::styled(EYE_OFF, Style::default().fg(MUTED))).render(icon, buf);
        }
        area
    }
}

/// Submit button, 60% of the card width.
pub fn render_submit(area: Rect, buf: &mut Buffer, label: &str, focused: bool) -> Rect {
    let rect = center_horizontally(area, area.width * 3 / 5);
    let border = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(ACCENT));
    Paragraph::new(Span::styled(
        label,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block)
    .render(rect, buf);
    rect
}
