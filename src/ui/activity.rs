//! Activity panel
//!
//! Renders card events beside the phone, newest first

use crate::events::{Event, EventType};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use std::collections::VecDeque;

/// Get a ratatui color for an event based on its type
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Input => Color::White,
        EventType::Rejected => Color::LightRed,
        EventType::Transition => Color::Cyan,
        EventType::Selection => Color::Yellow,
        EventType::Lifecycle => Color::Green,
    }
}

/// Keep only "HH:MM:SS" from a "YYYY-MM-DD HH:MM:SS" timestamp.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    timestamp
        .split(' ')
        .nth(1)
        .unwrap_or(timestamp)
        .to_string()
}

pub fn render_activity_panel(f: &mut Frame, area: Rect, events: &VecDeque<Event>) {
    // Borders plus padding take three rows.
    let max_logs = (area.height.saturating_sub(3) as usize).max(1);

    let log_lines: Vec<Line> = events
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(max_logs)
        .map(|event| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(get_event_color(event.event_type)),
                ),
            ])
        })
        .collect();

    let paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for input...")])
    } else {
        Paragraph::new(log_lines)
    };

    let block = Block::default()
        .title("ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_time_of_day() {
        assert_eq!(format_compact_timestamp("2026-10-19 14:03:22"), "14:03:22");
        assert_eq!(format_compact_timestamp("garbled"), "garbled");
    }
}
