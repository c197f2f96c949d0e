use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::Dialog;

/// Which key table the help dialog shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HelpFor {
    Runner,
    Admin,
}

pub fn draw_dialog(f: &mut Frame, area: Rect, dialog: &Dialog, help: HelpFor) {
    match dialog {
        Dialog::Help => draw_help(f, area, help),
        Dialog::ConfirmRestart => draw_confirm(
            f,
            area,
            "Restart the quiz?",
            "Your score will be reset.",
        ),
        Dialog::ConfirmDeleteQuestion(idx) => draw_confirm(
            f,
            area,
            &format!("Delete question {}?", idx + 1),
            "This cannot be undone.",
        ),
        Dialog::Export(json) => draw_export(f, area, json),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn draw_confirm(f: &mut Frame, area: Rect, question: &str, detail: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("   {}", question),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("   {}", detail)),
        Line::from(""),
        Line::from(vec![
            Span::styled("   [Enter] Confirm", Style::default().fg(Color::Green)),
            Span::raw("    "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    let rect = centered_rect(40, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}

fn draw_export(f: &mut Frame, area: Rect, json: &str) {
    let width = area.width.saturating_sub(8).max(20);
    let height = area.height.saturating_sub(4).max(6);
    let visible = height.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = json
        .lines()
        .take(visible)
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::White))))
        .collect();
    let hidden = json.lines().count().saturating_sub(visible);
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("… {} more lines in the buffer", hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Esc] Close",
        Style::default().fg(Color::DarkGray),
    )));

    let rect = centered_rect(width, height, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Exported JSON ")
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

const RUNNER_KEYS: &[(&str, &str)] = &[
    ("a-z, 1-9", "Pick an answer"),
    ("click", "Pick an answer"),
    ("Enter, →", "Next question"),
    ("↑/↓", "Scroll question"),
    ("s", "Share result"),
    ("Ctrl+R", "Restart quiz"),
    ("Ctrl+Q, q", "Quit"),
    ("?", "This help"),
    ("Esc", "Close dialog"),
];

const ADMIN_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "Previous/Next field"),
    ("PgUp/PgDn", "Previous/Next question"),
    ("Tab", "Questions/Messages"),
    ("Enter", "Edit field inline"),
    ("Ctrl+E", "Edit field in $EDITOR"),
    ("Space", "Mark choice correct"),
    ("+", "Add choice/message"),
    ("-", "Remove choice/message"),
    ("n", "New question"),
    ("Delete", "Delete question"),
    ("[ / ]", "Move question up/down"),
    ("m", "Move question to..."),
    ("t", "Edit title"),
    ("Ctrl+S", "Export to buffer"),
    ("Ctrl+L", "Import from buffer"),
    ("Ctrl+Q", "Quit"),
];

fn draw_help(f: &mut Frame, area: Rect, help: HelpFor) {
    let keys = match help {
        HelpFor::Runner => RUNNER_KEYS,
        HelpFor::Admin => ADMIN_KEYS,
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Key Bindings",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, action) in keys {
        lines.push(Line::from(format!("   {:<11}{}", key, action)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "        [Esc] Close",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    let rect = centered_rect(44, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}
