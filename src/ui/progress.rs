use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Gauge;
use ratatui::Frame;

pub fn draw_progress(f: &mut Frame, area: Rect, percent: u32) {
    let percent = percent.min(100) as u16;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Rgb(40, 40, 40)))
        .percent(percent)
        .label(format!("{}%", percent));
    f.render_widget(gauge, area);
}
