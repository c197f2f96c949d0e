//! One attempt at a quiz: question progression, answer locking and scoring.

use std::fmt;

use log::{debug, info};

use crate::feedback::{AnswerOutcome, Feedback, Silent};
use crate::model::{Question, QuizDocument};

/// State handed to subscribers after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub question_index: usize,
    pub selected_choice: Option<usize>,
    pub score: u32,
    pub finished: bool,
    pub progress: u32,
    pub total: usize,
}

impl SessionSnapshot {
    pub fn is_answered(&self) -> bool {
        self.selected_choice.is_some()
    }
}

pub type Subscriber = Box<dyn FnMut(&SessionSnapshot)>;

pub struct QuizSession {
    document: QuizDocument,
    question_index: usize,
    selected_choice: Option<usize>,
    score: u32,
    finished: bool,
    feedback: Box<dyn Feedback>,
    subscribers: Vec<Subscriber>,
}

impl QuizSession {
    pub fn new(document: QuizDocument) -> Self {
        Self {
            document,
            question_index: 0,
            selected_choice: None,
            score: 0,
            finished: false,
            feedback: Box::new(Silent),
            subscribers: Vec::new(),
        }
    }

    pub fn with_feedback(mut self, feedback: Box<dyn Feedback>) -> Self {
        self.feedback = feedback;
        self
    }

    /// Register an observer called with a snapshot after each state change.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&SessionSnapshot) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn document(&self) -> &QuizDocument {
        &self.document
    }

    pub fn total(&self) -> usize {
        self.document.questions.len()
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn selected_choice(&self) -> Option<usize> {
        self.selected_choice
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_answered(&self) -> bool {
        self.selected_choice.is_some()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.document.questions.get(self.question_index)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            question_index: self.question_index,
            selected_choice: self.selected_choice,
            score: self.score,
            finished: self.finished,
            progress: self.progress_percent(),
            total: self.total(),
        }
    }

    /// Lock in an answer for the current question. Ignored once a choice is
    /// already selected, after the quiz has finished, or with no questions.
    pub fn select_choice(&mut self, choice: usize) {
        if self.finished || self.selected_choice.is_some() {
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };
        let correct = question.is_correct(choice);

        self.selected_choice = Some(choice);
        if correct {
            self.score += 1;
        }
        debug!(
            "question {}: choice {} ({})",
            self.question_index + 1,
            choice,
            if correct { "correct" } else { "wrong" }
        );
        self.feedback.answered(AnswerOutcome::from_correct(correct));
        self.notify();
    }

    /// Move past an answered question; the last one finishes the quiz.
    pub fn advance(&mut self) {
        if self.finished || self.selected_choice.is_none() {
            return;
        }
        if self.question_index + 1 >= self.total() {
            self.finished = true;
            info!("quiz finished: {}/{}", self.score, self.total());
        } else {
            self.question_index += 1;
            self.selected_choice = None;
        }
        self.notify();
    }

    pub fn restart(&mut self) {
        self.question_index = 0;
        self.selected_choice = None;
        self.score = 0;
        self.finished = false;
        debug!("quiz restarted");
        self.notify();
    }

    pub fn progress_percent(&self) -> u32 {
        let total = match self.total() {
            0 => 1,
            n => n,
        };
        let answered = usize::from(self.selected_choice.is_some());
        let current = (self.question_index + answered).min(total);
        ((current as f64 / total as f64) * 100.0).round() as u32
    }

    /// Text of the first message whose range contains the score, in authored order.
    pub fn result_message(&self) -> &str {
        self.document
            .messages
            .iter()
            .find(|m| m.matches(self.score))
            .map(|m| m.text.as_str())
            .unwrap_or("")
    }

    pub fn share_text(&self) -> String {
        let mut text = format!(
            "My result in {}: {}/{}",
            self.document.title,
            self.score,
            self.total()
        );
        let message = self.result_message();
        if !message.is_empty() {
            text.push_str(" — ");
            text.push_str(message);
        }
        text
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("title", &self.document.title)
            .field("question_index", &self.question_index)
            .field("selected_choice", &self.selected_choice)
            .field("score", &self.score)
            .field("finished", &self.finished)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
