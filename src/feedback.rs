use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }
}

/// Advisory side effect fired once per answered question.
pub trait Feedback {
    fn answered(&mut self, outcome: AnswerOutcome);
}

pub struct Silent;

impl Feedback for Silent {
    fn answered(&mut self, _outcome: AnswerOutcome) {}
}

/// Rings the terminal bell: once for a correct answer, twice for a wrong one.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Feedback for TerminalBell<W> {
    fn answered(&mut self, outcome: AnswerOutcome) {
        let pattern: &[u8] = match outcome {
            AnswerOutcome::Correct => b"\x07",
            AnswerOutcome::Incorrect => b"\x07\x07",
        };
        // Bell write failures are ignored.
        let _ = self.out.write_all(pattern).and_then(|_| self.out.flush());
    }
}
