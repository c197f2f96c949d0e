use std::io;

use clap::Parser;
use log::{info, warn};

use quizdesk::cli::Cli;
use quizdesk::clipboard::{Clipboard, FileClipboard};
use quizdesk::error::QuizError;
use quizdesk::feedback::{Feedback, Silent, TerminalBell};
use quizdesk::model::QuizDocument;
use quizdesk::route::{self, View};
use quizdesk::session::QuizSession;
use quizdesk::source;
use quizdesk::state::{AdminState, RunnerState, StatusLine};
use quizdesk::tui;

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), QuizError> {
    let cli = Cli::parse();

    let quiz_path = source::resolve_source(cli.file.as_deref())?;
    let clipboard: Box<dyn Clipboard> = Box::new(match cli.buffer {
        Some(ref path) => FileClipboard::new(path),
        None => FileClipboard::new(FileClipboard::default_path()),
    });

    if cli.check {
        let document = source::load_document(&quiz_path)?;
        return source::print_status(&document, &quiz_path);
    }

    if let Some(ref export_path) = cli.export {
        let document = source::load_document(&quiz_path)?;
        source::export_document(&document, export_path)?;
        eprintln!("Quiz exported to {}", export_path);
        return Ok(());
    }

    match route::resolve(&cli.route) {
        View::Quiz => {
            let document = match source::load_document(&quiz_path) {
                Ok(document) => document,
                Err(e) => {
                    tui::run_load_failed(&e.to_string())?;
                    return Err(e);
                }
            };
            let feedback: Box<dyn Feedback> = if cli.quiet {
                Box::new(Silent)
            } else {
                Box::new(TerminalBell::new(io::stdout()))
            };
            let session = QuizSession::new(document).with_feedback(feedback);
            info!("starting quiz from {}", quiz_path.display());
            tui::run_runner(RunnerState::new(session, clipboard))
        }
        View::Admin => {
            let (document, status) = if quiz_path.is_file() {
                match source::load_document(&quiz_path) {
                    Ok(document) => (document, None),
                    Err(e) => {
                        warn!("{}", e);
                        (QuizDocument::new(), Some(StatusLine::error(e.to_string())))
                    }
                }
            } else {
                info!("no quiz at {}, starting blank", quiz_path.display());
                (QuizDocument::new(), None)
            };
            let mut state = AdminState::new(document, clipboard);
            state.notice = status;
            tui::run_admin(state)
        }
    }
}
