use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AdminPane, AdminState, EditTarget, Field, TextInput};

const LABEL_WIDTH: usize = 12;

/// Spans for a single-line input `width` columns wide with a block cursor.
pub(crate) fn input_spans(input: &TextInput, width: usize, mask: Option<char>) -> Vec<Span<'static>> {
    let chars: Vec<char> = input.value.chars().map(|c| mask.unwrap_or(c)).collect();
    let width = width.max(1);
    let cursor = input.cursor.min(chars.len());
    let start = cursor.saturating_sub(width - 1);
    let end = (start + width).min(chars.len());

    let text = Style::default().fg(Color::White);
    let block = Style::default().fg(Color::Black).bg(Color::White);

    let before: String = chars[start..cursor].iter().collect();
    let at: String = chars.get(cursor).map_or(' ', |c| *c).to_string();
    let after: String = if cursor < end {
        chars[cursor + 1..end].iter().collect()
    } else {
        String::new()
    };
    let used = (cursor - start) + 1 + after.chars().count();

    vec![
        Span::styled(before, text),
        Span::styled(at, block),
        Span::styled(after, text),
        Span::raw(" ".repeat(width.saturating_sub(used))),
    ]
}

/// First line of a possibly multi-line value, cut to `width`.
fn preview(value: &str, width: usize) -> String {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or("");
    let more = lines.next().is_some();
    let count = first.chars().count();
    if count > width || more {
        let keep = width.saturating_sub(1).min(count);
        format!("{}…", first.chars().take(keep).collect::<String>())
    } else {
        first.to_string()
    }
}

fn field_line(state: &AdminState, field: Field, focused: bool, width: usize) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<w$}", field.label(), w = LABEL_WIDTH), label_style),
    ];

    if let Field::ChoiceText(i) = field {
        let correct = state
            .document
            .questions
            .get(state.selected_question)
            .is_some_and(|q| q.correct_index == i);
        spans.push(if correct {
            Span::styled("(●) ", Style::default().fg(Color::Green))
        } else {
            Span::styled("( ) ", Style::default().fg(Color::DarkGray))
        });
    } else if matches!(field, Field::ChoiceComment(_)) {
        spans.push(Span::raw("    "));
    }

    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let value_width = width.saturating_sub(used + 1);

    if state.editing == Some(EditTarget::Field(field)) {
        spans.extend(input_spans(&state.input, value_width, None));
    } else {
        let value = state.field_value(field);
        if value.is_empty() {
            let placeholder = match field {
                Field::MessageMax(_) => "(no limit)",
                _ => "(empty)",
            };
            spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::raw(preview(&value, value_width)));
        }
    }

    Line::from(spans)
}

fn prompt_line(state: &AdminState, label: &str, width: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("  {}: ", label),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    let used = label.chars().count() + 4;
    spans.extend(input_spans(&state.input, width.saturating_sub(used + 1), None));
    Line::from(spans)
}

pub fn draw_form(f: &mut Frame, area: Rect, state: &AdminState) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    match state.editing {
        Some(EditTarget::Title) => {
            lines.push(prompt_line(state, "Title", width));
            lines.push(Line::from(""));
        }
        Some(EditTarget::Position) => {
            lines.push(prompt_line(state, "Move to position", width));
            lines.push(Line::from(""));
        }
        _ => {}
    }

    let heading = match state.pane {
        AdminPane::Questions if state.document.questions.is_empty() => {
            "  No questions. Press n to add one.".to_string()
        }
        AdminPane::Questions => format!(
            "  Question {} of {}",
            state.selected_question + 1,
            state.document.questions.len()
        ),
        AdminPane::Messages if state.document.messages.is_empty() => {
            "  No result messages. Press + to add one.".to_string()
        }
        AdminPane::Messages => "  Result messages (first match wins)".to_string(),
    };
    lines.push(Line::from(Span::styled(
        heading,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let mut focused_row = 0;
    for (i, field) in state.fields().into_iter().enumerate() {
        // blank line between choices and between messages
        if matches!(field, Field::ChoiceText(_) | Field::MessageMin(_)) && i > 0 {
            lines.push(Line::from(""));
        }
        if i == state.field_cursor {
            focused_row = lines.len();
        }
        lines.push(field_line(state, field, i == state.field_cursor, width));
    }

    // Keep the focused row visible.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = focused_row.saturating_sub(inner_height.saturating_sub(1));
    let display: Vec<Line> = lines.into_iter().skip(scroll).collect();

    let title = match state.pane {
        AdminPane::Questions => " Question ",
        AdminPane::Messages => " Messages ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(display).block(block), area);
}
