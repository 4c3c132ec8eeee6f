//! Role selector component
//!
//! Dropdown button plus the menu overlay drawn on top of the form

use super::super::card::AuthCard;
use super::super::state::{Focus, Role};
use super::super::utils::{CARD_BG, OUTLINE, SELECTED_BG, border_style, center_horizontally};
use crate::consts::cli_consts::card::ROLE_BUTTON_WIDTH;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};

pub const PLACEHOLDER: &str = "Select Role";

/// Renders the dropdown button and returns its rectangle.
pub fn render_button(area: Rect, buf: &mut Buffer, card: &AuthCard) -> Rect {
    let rect = center_horizontally(area, ROLE_BUTTON_WIDTH);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(card.focus() == Focus::RoleSelector, Color::Blue));
    let inner = block.inner(rect);
    block.render(rect, buf);

    let label = card
        .selected_role()
        .map(|role| role.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let chevron = if card.is_dropdown_open() { "▴" } else { "▾" };
    let label_width = (inner.width as usize).saturating_sub(2);
    let label: String = label.chars().take(label_width).collect();
    let padding = label_width.saturating_sub(label.chars().count());

    Paragraph::new(Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding + 1)),
        Span::styled(chevron, Style::default().fg(Color::Gray)),
    ]))
    .render(inner, buf);
    rect
}

/// Renders the open menu below `button`. Returns the menu rectangle and the
/// rectangle of every item.
pub fn render_menu(button: Rect, buf: &mut Buffer, card: &AuthCard) -> (Rect, Vec<(Role, Rect)>) {
    let height = Role::ALL.len() as u16 + 2;
    let menu = Rect::new(button.x, button.bottom(), button.width, height).intersection(buf.area);

    Clear.render(menu, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(OUTLINE))
        .style(Style::default().bg(CARD_BG));
    let inner = block.inner(menu);
    block.render(menu, buf);

    let highlighted = card.highlighted_role();
    let mut items = Vec::with_capacity(Role::ALL.len());
    for (row, role) in Role::ALL.iter().enumerate() {
        let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1).intersection(inner);
        if rect.is_empty() {
            continue;
        }
        let mut style = Style::default().fg(Color::Black);
        if card.selected_role() == Some(*role) {
            style = style.bg(SELECTED_BG).add_modifier(Modifier::BOLD);
        }
        if *role == highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let width = rect.width.saturating_sub(1) as usize;
        let label = format!(" {:<width$}", role.to_string(), width = width);
        Paragraph::new(Span::styled(label, style)).render(rect, buf);
        items.push((*role, rect));
    }
    (menu, items)
}
