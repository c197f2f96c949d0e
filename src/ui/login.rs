use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::AdminState;
use crate::ui::form::input_spans;

const BOX_WIDTH: u16 = 44;

pub fn draw_login(f: &mut Frame, area: Rect, state: &AdminState) {
    let inner = BOX_WIDTH.saturating_sub(8) as usize;

    let mut input_line = vec![Span::raw("  │ ")];
    input_line.extend(input_spans(&state.password, inner, Some('•')));
    input_line.push(Span::raw(" │"));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quiz editor",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Enter the admin password:"),
        Line::from(""),
        Line::from(vec![
            Span::raw("  ┌"),
            Span::raw("─".repeat(inner + 2)),
            Span::raw("┐"),
        ]),
        Line::from(input_line),
        Line::from(vec![
            Span::raw("  └"),
            Span::raw("─".repeat(inner + 2)),
            Span::raw("┘"),
        ]),
        Line::from(""),
    ];

    if let Some(status) = state.status.as_ref().filter(|s| s.is_error) {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {}", status.text),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  [Enter] Unlock", Style::default().fg(Color::Green)),
        Span::raw("    "),
        Span::styled("[Esc] Quit", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    let height = lines.len() as u16 + 2;
    let x = area.x + area.width.saturating_sub(BOX_WIDTH) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect::new(x, y, BOX_WIDTH.min(area.width), height.min(area.height));

    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}
