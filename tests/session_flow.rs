use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use quizdesk::clipboard::{Clipboard, MemoryClipboard};
use quizdesk::model::QuizDocument;
use quizdesk::session::QuizSession;
use quizdesk::state::{AdminState, RunnerScreen, RunnerState, TextInput};

fn sample() -> QuizDocument {
    let content = fs::read_to_string("fixtures/sample_quiz.json").expect("Cannot read fixture");
    quizdesk::document::parse_document(&content).unwrap()
}

#[test]
fn test_full_run_scores_and_picks_message() {
    let mut session = QuizSession::new(sample());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.subscribe(move |s| sink.borrow_mut().push(s.progress));

    // right, wrong, right
    for choice in [1, 1, 0] {
        session.select_choice(choice);
        session.advance();
    }

    assert!(session.is_finished());
    assert_eq!(session.score(), 2);
    assert_eq!(session.progress_percent(), 100);
    assert_eq!(session.result_message(), "Nearly there!");
    assert_eq!(
        session.share_text(),
        "My result in Pond Life: 2/3 — Nearly there!"
    );

    let progress = seen.borrow();
    assert_eq!(progress.len(), 6);
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(progress.last(), Some(&100));
}

#[test]
fn test_runner_share_writes_buffer() {
    let mut runner = RunnerState::new(
        QuizSession::new(sample()),
        Box::new(MemoryClipboard::default()),
    );
    assert_eq!(runner.screen(), RunnerScreen::Question);

    for _ in 0..3 {
        runner.select(0);
        runner.advance();
    }
    assert_eq!(runner.screen(), RunnerScreen::Result);
    assert_eq!(runner.snapshot.score, 2);

    runner.share();
    assert!(!runner.status.as_ref().unwrap().is_error);
    assert_eq!(
        runner.clipboard.read_text().unwrap(),
        "My result in Pond Life: 2/3 — Nearly there!"
    );

    runner.restart();
    assert_eq!(runner.screen(), RunnerScreen::Question);
    assert_eq!(runner.snapshot.score, 0);
    assert_eq!(runner.snapshot.question_index, 0);
}

#[test]
fn test_runner_ignores_choices_past_the_list() {
    let mut runner = RunnerState::new(
        QuizSession::new(sample()),
        Box::new(MemoryClipboard::default()),
    );
    runner.select(7);
    assert_eq!(runner.snapshot.selected_choice, None);
    runner.advance();
    assert_eq!(runner.snapshot.question_index, 0);
}

#[test]
fn test_empty_document_shows_empty_screen() {
    let mut doc = QuizDocument::new();
    doc.title = "Nothing".to_string();
    let mut runner = RunnerState::new(QuizSession::new(doc), Box::new(MemoryClipboard::default()));
    assert_eq!(runner.screen(), RunnerScreen::Empty);
    assert_eq!(runner.session.progress_percent(), 0);
    runner.select(0);
    runner.advance();
    assert_eq!(runner.screen(), RunnerScreen::Empty);
}

#[test]
fn test_admin_edit_export_then_run() {
    let mut admin = AdminState::new(QuizDocument::new(), Box::new(MemoryClipboard::default()));
    admin.password = TextInput::new("DOWEN");
    admin.login();

    admin.apply(quizdesk::state::EditTarget::Title, "Made here".to_string()).unwrap();
    admin.new_question();
    admin.document.questions[0].text = "Pick B".to_string();
    admin.field_cursor = 4; // choice B text
    admin.mark_correct();
    admin.export();

    let json = admin.clipboard.read_text().unwrap();
    let document = quizdesk::document::parse_document(&json).unwrap();
    assert_eq!(document.title, "Made here");
    assert_eq!(document.questions[0].choices.len(), 4);
    assert_eq!(document.questions[0].correct_index, 1);

    let mut session = QuizSession::new(document);
    session.select_choice(1);
    session.advance();
    assert!(session.is_finished());
    assert_eq!(session.score(), 1);
    assert_eq!(session.result_message(), "Good result! A little more practice.");
}
