use std::io;
use std::time::Duration;

use log::{debug, warn};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::editor;
use crate::error::QuizError;
use crate::state::*;
use crate::ui::question::compute_hit_map;
use crate::ui::sidebar::{hit_test, SidebarHit};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Enter the alternate screen, run `body`, and always restore the terminal.
fn with_terminal<F>(body: F) -> Result<(), QuizError>
where
    F: FnOnce(&mut Term) -> Result<(), QuizError>,
{
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode().ok();
        return Err(e.into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(QuizError::from)
        .and_then(|mut terminal| {
            let result = body(&mut terminal);
            execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
            terminal.show_cursor().ok();
            result
        });

    disable_raw_mode().ok();
    result
}

fn suspend(terminal: &mut Term) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
}

fn resume(terminal: &mut Term) {
    execute!(terminal.backend_mut(), EnterAlternateScreen, EnableMouseCapture).ok();
    enable_raw_mode().ok();
    terminal.clear().ok();
}

fn terminal_area(terminal: &Term) -> Rect {
    let size = terminal.size().unwrap_or_default();
    Rect::new(0, 0, size.width, size.height)
}

/// Next key press or mouse event, if one arrives within the poll window.
fn next_event() -> Result<Option<Event>, QuizError> {
    if !event::poll(Duration::from_millis(100))? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Press => None,
        ev => Some(ev),
    })
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Shared editing keys for single-line inputs. Returns false if unhandled.
fn edit_text(input: &mut TextInput, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}

// ---------------------------------------------------------------------------
// Quiz runner

pub fn run_runner(mut state: RunnerState) -> Result<(), QuizError> {
    with_terminal(|terminal| {
        loop {
            state.sync();
            terminal.draw(|f| crate::ui::draw_runner(f, &state))?;

            if state.should_quit {
                break;
            }

            match next_event()? {
                Some(Event::Key(key)) => handle_runner_key(key, &mut state),
                Some(Event::Mouse(mouse)) => {
                    handle_runner_mouse(mouse, &mut state, terminal_area(terminal))
                }
                _ => {}
            }
        }
        Ok(())
    })
}

fn handle_runner_key(key: KeyEvent, state: &mut RunnerState) {
    if state.has_dialog() {
        handle_runner_dialog_key(key, state);
        return;
    }

    if is_ctrl(&key, 'q') || is_ctrl(&key, 'c') {
        state.should_quit = true;
        return;
    }
    if is_ctrl(&key, 'r') {
        if state.screen() != RunnerScreen::Empty {
            state.push_dialog(Dialog::ConfirmRestart);
        }
        return;
    }
    if key.code == KeyCode::Char('?') {
        state.push_dialog(Dialog::Help);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match state.screen() {
        RunnerScreen::Question => match key.code {
            KeyCode::Char(c @ 'a'..='z') => state.select(c as usize - 'a' as usize),
            KeyCode::Char(c @ '1'..='9') => state.select(c as usize - '1' as usize),
            KeyCode::Enter | KeyCode::Right => state.advance(),
            KeyCode::Up => state.question_scroll = state.question_scroll.saturating_sub(1),
            KeyCode::Down => state.question_scroll = state.question_scroll.saturating_add(1),
            _ => {}
        },
        RunnerScreen::Result => match key.code {
            KeyCode::Char('s') => state.share(),
            KeyCode::Char('r') => state.restart(),
            KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
            _ => {}
        },
        RunnerScreen::Empty => {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                state.should_quit = true;
            }
        }
    }
}

fn handle_runner_dialog_key(key: KeyEvent, state: &mut RunnerState) {
    match state.top_dialog().cloned() {
        Some(Dialog::ConfirmRestart) => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                state.restart();
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
                state.pop_dialog();
            }
        }
        None => {}
    }
}

fn handle_runner_mouse(mouse: MouseEvent, state: &mut RunnerState, area: Rect) {
    if state.has_dialog() || state.screen() != RunnerScreen::Question {
        return;
    }
    let main = crate::ui::layout::compute_runner_layout(area).main;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(choice) =
                compute_hit_map(state, main).and_then(|map| map.choice_at(main, mouse.row))
            {
                state.select(choice);
            }
        }
        MouseEventKind::ScrollUp => {
            state.question_scroll = state.question_scroll.saturating_sub(1);
        }
        MouseEventKind::ScrollDown => {
            state.question_scroll = state.question_scroll.saturating_add(1);
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Admin editor

pub fn run_admin(mut state: AdminState) -> Result<(), QuizError> {
    with_terminal(|terminal| {
        loop {
            terminal.draw(|f| crate::ui::draw_admin(f, &state))?;

            if state.should_quit {
                break;
            }

            match next_event()? {
                Some(Event::Key(key)) => handle_admin_key(key, &mut state, terminal),
                Some(Event::Mouse(mouse)) => {
                    handle_admin_mouse(mouse, &mut state, terminal_area(terminal))
                }
                _ => {}
            }
        }
        Ok(())
    })
}

fn handle_admin_key(key: KeyEvent, state: &mut AdminState, terminal: &mut Term) {
    if is_ctrl(&key, 'q') {
        state.should_quit = true;
        return;
    }

    if state.screen == AdminScreen::Login {
        match key.code {
            KeyCode::Enter => state.login(),
            KeyCode::Esc => state.should_quit = true,
            _ => {
                edit_text(&mut state.password, &key);
            }
        }
        return;
    }

    if state.has_dialog() {
        handle_admin_dialog_key(key, state);
        return;
    }

    match state.input_mode {
        InputMode::TextInput => handle_admin_input_key(key, state, terminal),
        InputMode::Navigation => handle_admin_nav_key(key, state, terminal),
    }
}

fn handle_admin_input_key(key: KeyEvent, state: &mut AdminState, terminal: &mut Term) {
    if is_ctrl(&key, 'e') {
        if let Some(target) = state.editing {
            let current = state.input.value.clone();
            state.cancel_edit();
            edit_externally(state, terminal, target, &current);
        }
        return;
    }
    match key.code {
        KeyCode::Enter => state.commit_edit(),
        KeyCode::Esc => state.cancel_edit(),
        _ => {
            edit_text(&mut state.input, &key);
        }
    }
}

fn handle_admin_nav_key(key: KeyEvent, state: &mut AdminState, terminal: &mut Term) {
    if is_ctrl(&key, 's') {
        state.export();
        return;
    }
    if is_ctrl(&key, 'l') {
        state.import();
        return;
    }
    if is_ctrl(&key, 'e') {
        if let Some(target) = state.focused_edit_target() {
            let current = state.current_value(target);
            edit_externally(state, terminal, target, &current);
        }
        return;
    }

    let on_questions = state.pane == AdminPane::Questions;
    match key.code {
        KeyCode::Up => state.cursor_up(),
        KeyCode::Down => state.cursor_down(),
        KeyCode::PageUp => state.prev_question(),
        KeyCode::PageDown => state.next_question(),
        KeyCode::Tab | KeyCode::BackTab => state.toggle_pane(),
        KeyCode::Enter => {
            if let Some(target) = state.focused_edit_target() {
                state.begin_edit(target);
            }
        }
        KeyCode::Char(' ') => state.mark_correct(),
        KeyCode::Char('+') => state.add_item(),
        KeyCode::Char('-') => state.remove_focused(),
        KeyCode::Char('n') => state.new_question(),
        KeyCode::Delete if on_questions => state.request_delete_question(),
        KeyCode::Char('[') if on_questions => state.move_selected(-1),
        KeyCode::Char(']') if on_questions => state.move_selected(1),
        KeyCode::Char('m') if on_questions => state.begin_edit(EditTarget::Position),
        KeyCode::Char('t') => state.begin_edit(EditTarget::Title),
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        _ => {}
    }
}

fn handle_admin_dialog_key(key: KeyEvent, state: &mut AdminState) {
    match state.top_dialog().cloned() {
        Some(Dialog::ConfirmDeleteQuestion(idx)) => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                state.delete_question(idx);
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
                state.pop_dialog();
            }
        }
        None => {}
    }
}

/// Edit a value in `$EDITOR`, suspending the TUI while it runs.
fn edit_externally(state: &mut AdminState, terminal: &mut Term, target: EditTarget, current: &str) {
    suspend(terminal);
    let edited = editor::open_editor(current);
    resume(terminal);

    match edited {
        Ok(value) => {
            debug!("editor returned {} bytes", value.len());
            if let Err(msg) = state.apply(target, value) {
                state.status = Some(StatusLine::error(msg));
            }
        }
        Err(e) => {
            warn!("{}", e);
            state.status = Some(StatusLine::error(e.to_string()));
        }
    }
}

fn handle_admin_mouse(mouse: MouseEvent, state: &mut AdminState, area: Rect) {
    if state.screen != AdminScreen::Editor
        || state.has_dialog()
        || state.input_mode != InputMode::Navigation
    {
        return;
    }
    let sidebar = crate::ui::layout::compute_admin_layout(area).sidebar;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match hit_test(state, sidebar, mouse.column, mouse.row) {
                Some(SidebarHit::Question(idx)) => state.select_question(idx),
                Some(SidebarHit::Messages) if state.pane == AdminPane::Questions => {
                    state.toggle_pane()
                }
                _ => {}
            }
        }
        MouseEventKind::ScrollUp => state.prev_question(),
        MouseEventKind::ScrollDown => state.next_question(),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Load failure

/// Show the load error until the user leaves.
pub fn run_load_failed(message: &str) -> Result<(), QuizError> {
    with_terminal(|terminal| loop {
        terminal.draw(|f| crate::ui::draw_load_failed(f, message))?;
        if let Some(Event::Key(key)) = next_event()? {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q'))
                || is_ctrl(&key, 'q')
                || is_ctrl(&key, 'c')
            {
                return Ok(());
            }
        }
    })
}
