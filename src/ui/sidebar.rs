use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::model::Question;
use crate::state::{AdminPane, AdminState};

const FOOTER_ROWS: usize = 2; // separator + messages row

/// What a click on the sidebar lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarHit {
    Question(usize),
    Messages,
}

fn is_broken(q: &Question) -> bool {
    q.choices.is_empty() || q.correct_index >= q.choices.len()
}

fn list_height(area: Rect) -> usize {
    (area.height.saturating_sub(2) as usize).saturating_sub(FOOTER_ROWS)
}

fn scroll_offset(current: usize, list_height: usize) -> usize {
    if current >= list_height {
        current + 1 - list_height
    } else {
        0
    }
}

pub fn hit_test(state: &AdminState, area: Rect, column: u16, row: u16) -> Option<SidebarHit> {
    if column < area.x || column >= area.x + area.width || row <= area.y {
        return None;
    }
    let rel = (row - area.y - 1) as usize;
    let list_height = list_height(area);
    if rel < list_height {
        let idx = rel + scroll_offset(state.selected_question, list_height);
        (idx < state.document.questions.len()).then_some(SidebarHit::Question(idx))
    } else if rel == list_height + 1 {
        Some(SidebarHit::Messages)
    } else {
        None
    }
}

pub fn draw_sidebar(f: &mut Frame, area: Rect, state: &AdminState) {
    let mut lines: Vec<Line> = Vec::new();

    let inner_width = area.width.saturating_sub(2) as usize;
    let list_height = list_height(area);
    let total = state.document.questions.len();
    let current = state.selected_question;
    let on_questions = state.pane == AdminPane::Questions;

    let scroll_offset = scroll_offset(current, list_height);

    let title_max_len = inner_width.saturating_sub(7); // marker+number+dot+space+flag

    for (qi, q) in state
        .document
        .questions
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(list_height)
    {
        let is_current = qi == current;
        let bg = if is_current && on_questions {
            Color::DarkGray
        } else {
            Color::Reset
        };
        let marker = if is_current { "▸" } else { " " };

        let first_line = q.text.lines().next().unwrap_or("");
        let title = if first_line.is_empty() {
            "(no text)".to_string()
        } else if first_line.chars().count() > title_max_len {
            let cut: String = first_line.chars().take(title_max_len.saturating_sub(1)).collect();
            format!("{}…", cut)
        } else {
            first_line.to_string()
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Cyan).bg(bg)),
            Span::styled(
                format!("{:>2}. ", qi + 1),
                Style::default().fg(Color::Gray).bg(bg),
            ),
            Span::styled(title, Style::default().fg(Color::White).bg(bg)),
        ];
        if is_broken(q) {
            spans.push(Span::styled(
                " !",
                Style::default()
                    .fg(Color::Red)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < list_height {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(inner_width),
        Style::default().fg(Color::DarkGray),
    )));
    let messages_style = if on_questions {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(
        format!(" Messages ({})", state.document.messages.len()),
        messages_style,
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Questions ({}) ", total))
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);

    if total > list_height {
        let mut scrollbar_state = ScrollbarState::new(total)
            .position(scroll_offset)
            .viewport_content_length(list_height);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::model::QuizDocument;

    #[test]
    fn clicks_map_to_rows() {
        let mut doc = QuizDocument::new();
        for _ in 0..3 {
            doc.add_question();
        }
        let state = AdminState::new(doc, Box::new(MemoryClipboard::default()));
        let area = Rect::new(0, 1, 30, 12);
        // border at y=1, first row at y=2
        assert_eq!(hit_test(&state, area, 3, 2), Some(SidebarHit::Question(0)));
        assert_eq!(hit_test(&state, area, 3, 4), Some(SidebarHit::Question(2)));
        assert_eq!(hit_test(&state, area, 3, 5), None);
        // 10 inner rows: 8 list rows, separator, messages
        assert_eq!(hit_test(&state, area, 3, 11), Some(SidebarHit::Messages));
        assert_eq!(hit_test(&state, area, 40, 2), None);
    }
}
