//! PIN entry component

use super::super::card::AuthCard;
use super::super::state::{Focus, PIN_LENGTH};
use super::super::utils::{OUTLINE, border_style, center_horizontally};
use crate::consts::cli_consts::card::{PIN_SLOT_GAP, PIN_SLOT_WIDTH};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Dot shown in an empty slot.
pub const EMPTY_SLOT: &str = "●";

/// Renders the three PIN slots and returns their rectangles.
pub fn render_pin_row(area: Rect, buf: &mut Buffer, card: &AuthCard) -> [Rect; PIN_LENGTH] {
    let total = PIN_SLOT_WIDTH * PIN_LENGTH as u16 + PIN_SLOT_GAP * (PIN_LENGTH as u16 - 1);
    let row = center_horizontally(area, total);

    let digits = card.pin().slots();
    let mut slots = [Rect::default(); PIN_LENGTH];
    for (index, slot) in slots.iter_mut().enumerate() {
        let x = row.x + index as u16 * (PIN_SLOT_WIDTH + PIN_SLOT_GAP);
        *slot = Rect::new(x, row.y, PIN_SLOT_WIDTH, row.height).intersection(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(card.focus() == Focus::Pin(index), OUTLINE));
        let inner = block.inner(*slot);
        block.render(*slot, buf);

        let content = match digits[index] {
            Some(digit) => Span::styled(
                digit.to_string(),
                Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(EMPTY_SLOT, Style::default().fg(Color::Gray)),
        };
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
    slots
}
