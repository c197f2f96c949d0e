pub mod dialog;
pub mod form;
pub mod keybar;
pub mod layout;
pub mod login;
pub mod markdown;
pub mod notice;
pub mod progress;
pub mod question;
pub mod result;
pub mod sidebar;
pub mod statusbar;
pub mod titlebar;

use ratatui::Frame;

use crate::state::{AdminScreen, AdminState, InputMode, RunnerScreen, RunnerState};
use dialog::HelpFor;

pub fn draw_runner(f: &mut Frame, state: &RunnerState) {
    let area = f.area();
    let layout = layout::compute_runner_layout(area);
    let snapshot = state.snapshot;

    let score = format!("Score {}", snapshot.score);
    titlebar::draw_titlebar(f, layout.titlebar, state.title(), Some(score.as_str()));
    progress::draw_progress(f, layout.progress, state.session.progress_percent());

    let bindings = match state.screen() {
        RunnerScreen::Question => {
            question::draw_question(f, layout.main, state);
            keybar::RUNNER_QUESTION
        }
        RunnerScreen::Result => {
            result::draw_result(f, layout.main, state);
            keybar::RUNNER_RESULT
        }
        RunnerScreen::Empty => {
            result::draw_empty(f, layout.main);
            keybar::EXIT_ONLY
        }
    };

    let summary = match state.screen() {
        RunnerScreen::Empty => "No questions".to_string(),
        _ => format!(
            "{} of {} answered",
            snapshot.question_index + usize::from(snapshot.is_answered()),
            snapshot.total
        ),
    };
    statusbar::draw_statusbar(f, layout.statusbar, state.status.as_ref(), &summary);
    keybar::draw_keybar(f, layout.keybar, bindings);

    if let Some(d) = state.top_dialog() {
        dialog::draw_dialog(f, area, d, HelpFor::Runner);
    }
}

pub fn draw_admin(f: &mut Frame, state: &AdminState) {
    let area = f.area();

    if state.screen == AdminScreen::Login {
        login::draw_login(f, area, state);
        return;
    }

    let layout = layout::compute_admin_layout(area);
    titlebar::draw_titlebar(f, layout.titlebar, &state.document.title, Some("admin"));
    sidebar::draw_sidebar(f, layout.sidebar, state);
    form::draw_form(f, layout.main, state);

    let summary = format!(
        "{} questions, {} messages",
        state.document.questions.len(),
        state.document.messages.len()
    );
    statusbar::draw_statusbar(f, layout.statusbar, state.status.as_ref(), &summary);
    let bindings = match state.input_mode {
        InputMode::Navigation => keybar::ADMIN_NAVIGATION,
        InputMode::TextInput => keybar::ADMIN_EDITING,
    };
    keybar::draw_keybar(f, layout.keybar, bindings);

    if let Some(d) = state.top_dialog() {
        dialog::draw_dialog(f, area, d, HelpFor::Admin);
    }
}

pub fn draw_load_failed(f: &mut Frame, message: &str) {
    let area = f.area();
    notice::draw_load_failed(f, area, message);
}
