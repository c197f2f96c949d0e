use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::StatusLine;

pub fn draw_statusbar(f: &mut Frame, area: Rect, status: Option<&StatusLine>, summary: &str) {
    let line = match status {
        Some(s) if s.is_error => Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("✗ {}", s.text), Style::default().fg(Color::Red)),
        ]),
        Some(s) => Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("✓ {}", s.text), Style::default().fg(Color::Green)),
        ]),
        None => Line::from(vec![
            Span::raw(" "),
            Span::styled(summary.to_string(), Style::default().fg(Color::White)),
            Span::raw("   "),
            Span::styled("[?] help", Style::default().fg(Color::DarkGray)),
        ]),
    };

    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
