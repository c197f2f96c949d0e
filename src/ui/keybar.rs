use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub type Bindings = &'static [(&'static str, &'static str)];

pub const RUNNER_QUESTION: Bindings = &[
    ("a-z", "answer"),
    ("Enter", "next"),
    ("Ctrl+R", "restart"),
    ("Ctrl+Q", "quit"),
];

pub const RUNNER_RESULT: Bindings = &[
    ("s", "share"),
    ("r", "restart"),
    ("q", "quit"),
];

pub const EXIT_ONLY: Bindings = &[("q", "quit")];

pub const ADMIN_NAVIGATION: Bindings = &[
    ("↑/↓", "field"),
    ("PgUp/PgDn", "question"),
    ("Enter", "edit"),
    ("Space", "correct"),
    ("n", "new"),
    ("+/-", "add/remove"),
    ("Tab", "messages"),
    ("Ctrl+S", "export"),
    ("Ctrl+L", "import"),
    ("Ctrl+Q", "quit"),
];

pub const ADMIN_EDITING: Bindings = &[
    ("←/→", "cursor"),
    ("Enter", "save"),
    ("Esc", "cancel"),
];

pub fn draw_keybar(f: &mut Frame, area: Rect, bindings: Bindings) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
