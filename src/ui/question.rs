use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::model::Question;
use crate::model::choice_letter;
use crate::state::RunnerState;
use crate::ui::markdown::markdown_to_lines;

/// Content rows occupied by each choice, for mouse handling.
pub struct QuestionHitMap {
    /// (first_line, last_line_exclusive, choice_index)
    pub choice_lines: Vec<(usize, usize, usize)>,
    pub scroll: usize,
}

impl QuestionHitMap {
    /// Choice under a terminal row inside the card area.
    pub fn choice_at(&self, area: Rect, row: u16) -> Option<usize> {
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        let line = (row - area.y) as usize + self.scroll;
        self.choice_lines
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&line))
            .map(|(_, _, idx)| *idx)
    }
}

struct Card {
    lines: Vec<Line<'static>>,
    choice_lines: Vec<(usize, usize, usize)>,
}

fn build_card(state: &RunnerState, question: &Question, width: usize) -> Card {
    let snapshot = state.snapshot;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(
            "  Question {} of {}",
            snapshot.question_index + 1,
            snapshot.total
        ),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let text_width = width.saturating_sub(4);
    for line in markdown_to_lines(&question.text, Style::default()) {
        for wline in wrap_styled_line(line, text_width) {
            lines.push(indent(wline, 2));
        }
    }

    if let Some(image) = &question.image {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("[image] {}", image),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    lines.push(Line::from(""));
    let answered = snapshot.selected_choice;
    let mut choice_lines = Vec::new();
    for (i, choice) in question.choices.iter().enumerate() {
        let start = lines.len();
        let (mark, style) = match answered {
            Some(_) if question.is_correct(i) => ("✓", Style::default().fg(Color::Green)),
            Some(sel) if sel == i => ("✕", Style::default().fg(Color::Red)),
            Some(_) => (" ", Style::default().fg(Color::DarkGray)),
            None => (" ", Style::default()),
        };
        let style = if answered == Some(i) {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };

        // "  ✓ A. "
        let prefix = format!("  {} {}. ", mark, choice_letter(i));
        let prefix_len = prefix.chars().count();
        let wrapped = wrap_text(&choice.text, width.saturating_sub(prefix_len + 1));
        for (li, wline) in wrapped.into_iter().enumerate() {
            let lead = if li == 0 {
                prefix.clone()
            } else {
                " ".repeat(prefix_len)
            };
            lines.push(Line::from(vec![
                Span::styled(lead, style),
                Span::styled(wline, style),
            ]));
        }

        if answered.is_some() {
            if let Some(comment) = &choice.comment {
                let comment_style = Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC);
                let comment_width = width.saturating_sub(prefix_len + 1);
                for line in markdown_to_lines(comment, comment_style) {
                    for wline in wrap_styled_line(line, comment_width) {
                        lines.push(indent(wline, prefix_len));
                    }
                }
            }
        }
        choice_lines.push((start, lines.len(), i));
    }

    lines.push(Line::from(""));
    let hint = match answered {
        None => "  Pick an answer".to_string(),
        Some(_) if snapshot.question_index + 1 == snapshot.total => "  [Enter] See result".to_string(),
        Some(_) => "  [Enter] Next".to_string(),
    };
    let hint_style = if answered.is_some() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(Span::styled(hint, hint_style)));

    Card {
        lines,
        choice_lines,
    }
}

fn clamp_scroll(state: &RunnerState, total: usize, height: usize) -> usize {
    (state.question_scroll as usize).min(total.saturating_sub(height))
}

pub fn compute_hit_map(state: &RunnerState, area: Rect) -> Option<QuestionHitMap> {
    let question = state.session.current_question()?;
    let card = build_card(state, question, area.width as usize);
    let scroll = clamp_scroll(state, card.lines.len(), area.height as usize);
    Some(QuestionHitMap {
        choice_lines: card.choice_lines,
        scroll,
    })
}

pub fn draw_question(f: &mut Frame, area: Rect, state: &RunnerState) {
    let Some(question) = state.session.current_question() else {
        return;
    };
    let card = build_card(state, question, area.width as usize);

    let total_content_lines = card.lines.len();
    let visible_height = area.height as usize;
    let scroll = clamp_scroll(state, total_content_lines, visible_height);
    let display_lines: Vec<Line> = card.lines.into_iter().skip(scroll).collect();

    f.render_widget(Paragraph::new(display_lines), area);

    if total_content_lines > visible_height {
        let mut scrollbar_state = ScrollbarState::new(total_content_lines)
            .position(scroll)
            .viewport_content_length(visible_height);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn indent(line: Line<'static>, width: usize) -> Line<'static> {
    Line::from(
        std::iter::once(Span::raw(" ".repeat(width)))
            .chain(line.spans)
            .collect::<Vec<_>>(),
    )
}

/// Wrap a styled Line at `width`, preserving span styles across breaks.
pub(crate) fn wrap_styled_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line];
    }

    let chars: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();
    if chars.len() <= width {
        return vec![line];
    }

    let mut result: Vec<Line<'static>> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars.len() - pos <= width {
            result.push(styled_chars_to_line(&chars[pos..]));
            break;
        }

        let chunk_end = pos + width;
        let break_at = if chars[chunk_end].0 == ' ' {
            chunk_end
        } else {
            match chars[pos..chunk_end].iter().rposition(|(c, _)| *c == ' ') {
                Some(sp) if sp > 0 => pos + sp,
                _ => chunk_end,
            }
        };

        result.push(styled_chars_to_line(&chars[pos..break_at]));
        pos = break_at;
        if pos < chars.len() && chars[pos].0 == ' ' {
            pos += 1;
        }
    }

    result
}

/// Rebuild a Line from (char, style) pairs, grouping consecutive same-style chars into spans.
fn styled_chars_to_line(chars: &[(char, Style)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current_text = String::new();
    let mut current_style = chars.first().map(|c| c.1).unwrap_or_default();

    for &(c, style) in chars {
        if style != current_style && !current_text.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
        }
        current_style = style;
        current_text.push(c);
    }
    if !current_text.is_empty() {
        spans.push(Span::styled(current_text, current_style));
    }

    Line::from(spans)
}

/// Word-wrap plain text to `width` columns.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}
