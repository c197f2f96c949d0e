use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::RunnerState;
use crate::ui::markdown::markdown_to_lines;

pub fn draw_result(f: &mut Frame, area: Rect, state: &RunnerState) {
    let snapshot = state.snapshot;

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Your result",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", snapshot.score, snapshot.total),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(markdown_to_lines(
        state.session.result_message(),
        Style::default().fg(Color::Yellow),
    ));
    lines.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled("[s] Share", Style::default().fg(Color::Green)),
            Span::raw("    "),
            Span::styled("[r] Restart", Style::default().fg(Color::Cyan)),
            Span::raw("    "),
            Span::styled("[q] Quit", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ]);

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

pub fn draw_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "This quiz has no questions yet",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Add some in the admin editor: quizdesk /admin"),
        Line::from(""),
        Line::from(Span::styled(
            "[q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
