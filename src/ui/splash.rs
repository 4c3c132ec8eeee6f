//! Splash screen rendering module.

use crate::ui::phone_frame::{Passthrough, PhoneFrame};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
 ██████╗  ██████╗   ██╗
██╔════╝  ██╔══██╗  ██║
██║       ██║  ██║  ██║
██║       ██║  ██║  ██║
╚██████╗  ██████╔╝  ███████╗
 ╚═════╝  ╚═════╝   ╚══════╝
"#;

/// Blank rows above the logo inside the phone.
const TOP_MARGIN: usize = 10;

pub fn render_splash(f: &mut Frame, area: Rect, with_background_color: bool) {
    let mut lines: Vec<Line> = vec![Line::from(""); TOP_MARGIN];

    // Pad every row to the widest so the logo centers as a block.
    let logo_rows: Vec<&str> = LOGO_NAME.trim_matches('\n').lines().collect();
    let width = logo_rows.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    lines.extend(logo_rows.iter().map(|row| {
        let padded = format!("{:<width$}", row, width = width);
        Line::from(Span::styled(
            padded,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    }));

    lines.push(Line::from(Span::raw(" ")));
    lines.push(Line::from(Span::styled(
        "S C H O O L S",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::raw(" ")));
    lines.push(Line::from(Span::styled(
        format!("Version {}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC),
    )));

    let height = lines.len() as u16;
    let logo = Paragraph::new(lines).alignment(Alignment::Center);
    PhoneFrame::new(Passthrough::new(logo, height))
        .background(with_background_color)
        .render(area, f.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn splash_shows_school_and_version() {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_splash(f, area, false);
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                screen.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
        }
        assert!(screen.contains("S C H O O L S"));
        assert!(screen.contains(env!("CARGO_PKG_VERSION")));
    }
}
