//! Mode tabs component

use super::super::card::AuthCard;
use super::super::state::{Focus, Mode};
use super::super::utils::{CARD_BG, MUTED, OUTLINE};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Renders the sign-up and login tabs side by side. The active mode's tab
/// is light, the other one gray.
pub fn render_tabs(area: Rect, buf: &mut Buffer, card: &AuthCard) -> Vec<(Mode, Rect)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(OUTLINE));
    let inner = block.inner(area);
    block.render(area, buf);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);
    let [left_hit, right_hit] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let mut tabs = Vec::with_capacity(2);
    for (mode, label_area, hit) in [(Mode::SignUp, left, left_hit), (Mode::Login, right, right_hit)] {
        let active = card.mode() == mode;
        let mut style = if active {
            Style::default().fg(Color::Black).bg(CARD_BG)
        } else {
            Style::default().fg(Color::White).bg(MUTED)
        }
        .add_modifier(Modifier::BOLD);
        if card.focus() == Focus::Tab(mode) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Paragraph::new(Span::raw(mode.tab_label()))
            .alignment(Alignment::Center)
            .style(style)
            .render(label_area, buf);
        tabs.push((mode, hit));
    }
    tabs
}
