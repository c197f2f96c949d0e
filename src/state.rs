use std::sync::mpsc;

use log::{debug, info};

use crate::auth;
use crate::clipboard::Clipboard;
use crate::model::{Choice, Question, QuizDocument, ScoreMessage, UNBOUNDED};
use crate::session::{QuizSession, SessionSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Help,
    ConfirmRestart,
    ConfirmDeleteQuestion(usize),
    Export(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Single-line text field with a cursor counted in characters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text before and after the cursor.
    pub fn split(&self) -> (&str, &str) {
        self.value.split_at(self.byte_offset(self.cursor))
    }
}

// ---------------------------------------------------------------------------
// Quiz runner

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunnerScreen {
    Question,
    Result,
    Empty,
}

pub struct RunnerState {
    pub session: QuizSession,
    /// Last state pushed by the session.
    pub snapshot: SessionSnapshot,
    updates: mpsc::Receiver<SessionSnapshot>,
    pub clipboard: Box<dyn Clipboard>,
    pub status: Option<StatusLine>,
    pub dialog_stack: Vec<Dialog>,
    pub question_scroll: u16,
    pub should_quit: bool,
}

impl RunnerState {
    pub fn new(mut session: QuizSession, clipboard: Box<dyn Clipboard>) -> Self {
        let (tx, rx) = mpsc::channel();
        session.subscribe(move |snapshot| {
            let _ = tx.send(*snapshot);
        });
        let snapshot = session.snapshot();
        Self {
            session,
            snapshot,
            updates: rx,
            clipboard,
            status: None,
            dialog_stack: Vec::new(),
            question_scroll: 0,
            should_quit: false,
        }
    }

    /// Pull pending snapshots; true when the view has to change.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        while let Ok(snapshot) = self.updates.try_recv() {
            if snapshot.question_index != self.snapshot.question_index {
                self.question_scroll = 0;
            }
            self.snapshot = snapshot;
            changed = true;
        }
        changed
    }

    pub fn screen(&self) -> RunnerScreen {
        if self.snapshot.total == 0 {
            RunnerScreen::Empty
        } else if self.snapshot.finished {
            RunnerScreen::Result
        } else {
            RunnerScreen::Question
        }
    }

    pub fn title(&self) -> &str {
        &self.session.document().title
    }

    pub fn select(&mut self, choice: usize) {
        if self.screen() == RunnerScreen::Question
            && choice < self.session.current_question().map_or(0, |q| q.choices.len())
        {
            self.session.select_choice(choice);
            self.sync();
        }
    }

    pub fn advance(&mut self) {
        self.session.advance();
        if self.sync() {
            self.status = None;
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.sync();
        self.status = None;
    }

    pub fn share(&mut self) {
        let text = self.session.share_text();
        self.status = Some(match self.clipboard.write_text(&text) {
            Ok(()) => StatusLine::info(format!("Result copied to {}", self.clipboard.describe())),
            Err(e) => StatusLine::error(e.to_string()),
        });
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}

// ---------------------------------------------------------------------------
// Admin editor

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdminScreen {
    Login,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdminPane {
    Questions,
    Messages,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Navigation,
    TextInput,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    QuestionText,
    QuestionImage,
    ChoiceText(usize),
    ChoiceComment(usize),
    MessageMin(usize),
    MessageMax(usize),
    MessageText(usize),
}

impl Field {
    pub fn label(&self) -> String {
        match self {
            Field::QuestionText => "Text".to_string(),
            Field::QuestionImage => "Image URL".to_string(),
            Field::ChoiceText(i) => format!("Choice {}", crate::model::choice_letter(*i)),
            Field::ChoiceComment(_) => "  comment".to_string(),
            Field::MessageMin(i) => format!("#{} min", i + 1),
            Field::MessageMax(_) => "   max".to_string(),
            Field::MessageText(_) => "   text".to_string(),
        }
    }

    fn choice(&self) -> Option<usize> {
        match self {
            Field::ChoiceText(i) | Field::ChoiceComment(i) => Some(*i),
            _ => None,
        }
    }

    fn message(&self) -> Option<usize> {
        match self {
            Field::MessageMin(i) | Field::MessageMax(i) | Field::MessageText(i) => Some(*i),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditTarget {
    Title,
    Field(Field),
    Position,
}

pub struct AdminState {
    pub screen: AdminScreen,
    pub document: QuizDocument,
    pub clipboard: Box<dyn Clipboard>,
    pub pane: AdminPane,
    pub selected_question: usize,
    pub field_cursor: usize,
    pub input_mode: InputMode,
    pub input: TextInput,
    pub editing: Option<EditTarget>,
    pub password: TextInput,
    pub status: Option<StatusLine>,
    /// Shown in place of the greeting once unlocked.
    pub notice: Option<StatusLine>,
    pub dialog_stack: Vec<Dialog>,
    pub should_quit: bool,
}

impl AdminState {
    pub fn new(document: QuizDocument, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            screen: AdminScreen::Login,
            document,
            clipboard,
            pane: AdminPane::Questions,
            selected_question: 0,
            field_cursor: 0,
            input_mode: InputMode::TextInput,
            input: TextInput::default(),
            editing: None,
            password: TextInput::default(),
            status: None,
            notice: None,
            dialog_stack: Vec::new(),
            should_quit: false,
        }
    }

    pub fn login(&mut self) {
        match auth::check_secret(&self.password.value) {
            Ok(()) => {
                self.screen = AdminScreen::Editor;
                self.input_mode = InputMode::Navigation;
                self.status = self
                    .notice
                    .take()
                    .or_else(|| Some(StatusLine::info("Unlocked")));
            }
            Err(e) => {
                self.status = Some(StatusLine::error(capitalize(&e.to_string())));
            }
        }
        self.password.clear();
    }

    pub fn fields(&self) -> Vec<Field> {
        match self.pane {
            AdminPane::Questions => {
                let Some(q) = self.document.questions.get(self.selected_question) else {
                    return Vec::new();
                };
                let mut fields = vec![Field::QuestionText, Field::QuestionImage];
                for i in 0..q.choices.len() {
                    fields.push(Field::ChoiceText(i));
                    fields.push(Field::ChoiceComment(i));
                }
                fields
            }
            AdminPane::Messages => (0..self.document.messages.len())
                .flat_map(|i| [Field::MessageMin(i), Field::MessageMax(i), Field::MessageText(i)])
                .collect(),
        }
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.fields().get(self.field_cursor).copied()
    }

    pub fn field_value(&self, field: Field) -> String {
        let q = self.document.questions.get(self.selected_question);
        match field {
            Field::QuestionText => q.map(|q| q.text.clone()),
            Field::QuestionImage => q.and_then(|q| q.image.clone()),
            Field::ChoiceText(i) => q.and_then(|q| q.choices.get(i)).map(|c| c.text.clone()),
            Field::ChoiceComment(i) => q
                .and_then(|q| q.choices.get(i))
                .and_then(|c| c.comment.clone()),
            Field::MessageMin(i) => self.document.messages.get(i).map(|m| m.min.to_string()),
            Field::MessageMax(i) => self
                .document
                .messages
                .get(i)
                .map(|m| if m.max == UNBOUNDED { String::new() } else { m.max.to_string() }),
            Field::MessageText(i) => self.document.messages.get(i).map(|m| m.text.clone()),
        }
        .unwrap_or_default()
    }

    pub fn set_field(&mut self, field: Field, value: String) -> Result<(), String> {
        let non_empty = |v: String| Some(v).filter(|v| !v.trim().is_empty());
        match field {
            Field::QuestionText => self.question_mut()?.text = value,
            Field::QuestionImage => self.question_mut()?.image = non_empty(value),
            Field::ChoiceText(i) => self.choice_mut(i)?.text = value,
            Field::ChoiceComment(i) => self.choice_mut(i)?.comment = non_empty(value),
            Field::MessageMin(i) => self.message_mut(i)?.min = parse_bound("min", &value)?,
            Field::MessageMax(i) => {
                let max = if value.trim().is_empty() {
                    UNBOUNDED
                } else {
                    parse_bound("max", &value)?
                };
                self.message_mut(i)?.max = max;
            }
            Field::MessageText(i) => self.message_mut(i)?.text = value,
        }
        Ok(())
    }

    fn question_mut(&mut self) -> Result<&mut Question, String> {
        self.document
            .questions
            .get_mut(self.selected_question)
            .ok_or_else(|| "No question selected".to_string())
    }

    fn choice_mut(&mut self, idx: usize) -> Result<&mut Choice, String> {
        self.question_mut()?
            .choices
            .get_mut(idx)
            .ok_or_else(|| "No such choice".to_string())
    }

    fn message_mut(&mut self, idx: usize) -> Result<&mut ScoreMessage, String> {
        self.document
            .messages
            .get_mut(idx)
            .ok_or_else(|| "No such message".to_string())
    }

    pub fn current_value(&self, target: EditTarget) -> String {
        match target {
            EditTarget::Title => self.document.title.clone(),
            EditTarget::Field(field) => self.field_value(field),
            EditTarget::Position => String::new(),
        }
    }

    pub fn begin_edit(&mut self, target: EditTarget) {
        if target == EditTarget::Position && self.document.questions.is_empty() {
            return;
        }
        self.input = TextInput::new(self.current_value(target));
        self.editing = Some(target);
        self.input_mode = InputMode::TextInput;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.input.clear();
        self.input_mode = InputMode::Navigation;
    }

    /// Apply the input buffer. On a bad value the edit stays open.
    pub fn commit_edit(&mut self) {
        let Some(target) = self.editing else {
            return;
        };
        let value = self.input.value.clone();
        match self.apply(target, value) {
            Ok(()) => self.cancel_edit(),
            Err(msg) => self.status = Some(StatusLine::error(msg)),
        }
    }

    /// Store a value produced outside the inline editor (e.g. `$EDITOR`).
    pub fn apply(&mut self, target: EditTarget, value: String) -> Result<(), String> {
        match target {
            EditTarget::Title => {
                self.document.title = value;
                Ok(())
            }
            EditTarget::Field(field) => self.set_field(field, value),
            EditTarget::Position => {
                let position: usize = value
                    .trim()
                    .parse()
                    .ok()
                    .filter(|&p| p >= 1)
                    .ok_or_else(|| format!("Position must be 1 or more, got {:?}", value))?;
                self.move_selected_to(position - 1);
                Ok(())
            }
        }
    }

    pub fn focused_edit_target(&self) -> Option<EditTarget> {
        self.focused_field().map(EditTarget::Field)
    }

    pub fn select_question(&mut self, idx: usize) {
        if idx < self.document.questions.len() {
            self.selected_question = idx;
            self.pane = AdminPane::Questions;
            self.field_cursor = 0;
        }
    }

    pub fn next_question(&mut self) {
        self.select_question(self.selected_question + 1);
    }

    pub fn prev_question(&mut self) {
        if self.selected_question > 0 {
            self.select_question(self.selected_question - 1);
        }
    }

    pub fn cursor_up(&mut self) {
        self.field_cursor = self.field_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.fields().len();
        if self.field_cursor + 1 < len {
            self.field_cursor += 1;
        }
    }

    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            AdminPane::Questions => AdminPane::Messages,
            AdminPane::Messages => AdminPane::Questions,
        };
        self.field_cursor = 0;
    }

    pub fn new_question(&mut self) {
        let idx = self.document.add_question();
        self.select_question(idx);
        self.status = Some(StatusLine::info(format!("Added question {}", idx + 1)));
    }

    pub fn request_delete_question(&mut self) {
        if self.selected_question < self.document.questions.len() {
            self.push_dialog(Dialog::ConfirmDeleteQuestion(self.selected_question));
        }
    }

    pub fn delete_question(&mut self, idx: usize) {
        if self.document.remove_question(idx).is_some() {
            let len = self.document.questions.len();
            self.selected_question = self.selected_question.min(len.saturating_sub(1));
            self.field_cursor = 0;
            self.status = Some(StatusLine::info(format!("Deleted question {}", idx + 1)));
        }
    }

    pub fn add_choice(&mut self) {
        if self.pane != AdminPane::Questions {
            return;
        }
        if let Some(c) = self.document.add_choice(self.selected_question) {
            self.field_cursor = 2 + 2 * c;
        }
    }

    pub fn add_message(&mut self) {
        let idx = self.document.add_message();
        self.pane = AdminPane::Messages;
        self.field_cursor = 3 * idx;
    }

    /// `+`: a choice on the question pane, a message on the message pane.
    pub fn add_item(&mut self) {
        match self.pane {
            AdminPane::Messages => self.add_message(),
            AdminPane::Questions if self.document.questions.is_empty() => {
                self.status = Some(StatusLine::info("No question to add a choice to (n adds one)"));
            }
            AdminPane::Questions => self.add_choice(),
        }
    }

    /// Remove the choice or message under the cursor.
    pub fn remove_focused(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if let Some(c) = field.choice() {
            self.document.remove_choice(self.selected_question, c);
        } else if let Some(m) = field.message() {
            self.document.remove_message(m);
        } else {
            return;
        }
        let len = self.fields().len();
        self.field_cursor = self.field_cursor.min(len.saturating_sub(1));
    }

    pub fn mark_correct(&mut self) {
        if let Some(c) = self.focused_field().and_then(|f| f.choice()) {
            self.document.set_correct(self.selected_question, c);
        }
    }

    pub fn move_selected(&mut self, delta: isize) {
        let target = self.selected_question.saturating_add_signed(delta);
        self.move_selected_to(target);
    }

    pub fn move_selected_to(&mut self, position: usize) {
        let from = self.selected_question;
        if from >= self.document.questions.len() {
            return;
        }
        let to = self.document.move_question(from, position);
        debug!("moved question {} to {}", from + 1, to + 1);
        self.selected_question = to;
    }

    pub fn export(&mut self) {
        let json = match self.document.export() {
            Ok(json) => json,
            Err(e) => {
                self.status = Some(StatusLine::error(e.to_string()));
                return;
            }
        };
        let copied = self.clipboard.write_text(&json);
        self.status = Some(match (copied, self.document.validate()) {
            (Err(e), _) => StatusLine::error(e.to_string()),
            (Ok(()), Err(e)) => StatusLine::error(format!(
                "Exported to {}, but it will not load: {}",
                self.clipboard.describe(),
                e
            )),
            (Ok(()), Ok(())) => StatusLine::info(format!("Exported to {}", self.clipboard.describe())),
        });
        self.push_dialog(Dialog::Export(json));
    }

    pub fn import(&mut self) {
        let text = match self.clipboard.read_text() {
            Ok(text) => text,
            Err(e) => {
                self.status = Some(StatusLine::error(format!("Import failed: {}", e)));
                return;
            }
        };
        match self.document.import(&text) {
            Ok(()) => {
                self.selected_question = 0;
                self.field_cursor = 0;
                info!("admin import applied");
                self.status = Some(StatusLine::info(format!(
                    "Imported {} questions",
                    self.document.questions.len()
                )));
            }
            Err(e) => {
                self.status = Some(StatusLine::error(capitalize(&e.to_string())));
            }
        }
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}

fn parse_bound(name: &str, value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a whole number, got {:?}", name, value))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn unlocked(document: QuizDocument) -> AdminState {
        let mut admin = AdminState::new(document, Box::new(MemoryClipboard::default()));
        admin.password = TextInput::new("DOWEN");
        admin.login();
        admin
    }

    fn two_questions() -> QuizDocument {
        let mut doc = QuizDocument::new();
        doc.questions = vec![
            Question {
                text: "one".to_string(),
                image: None,
                choices: vec![Choice::new("a"), Choice::new("b")],
                correct_index: 1,
            },
            Question {
                text: "two".to_string(),
                image: None,
                choices: vec![Choice::new("c"), Choice::new("d")],
                correct_index: 0,
            },
        ];
        doc
    }

    #[test]
    fn plus_without_questions_stays_on_question_pane() {
        let mut admin = unlocked(QuizDocument::new());
        admin.add_item();
        assert_eq!(admin.pane, AdminPane::Questions);
        assert_eq!(admin.document.messages.len(), 2);
        assert!(admin.status.is_some());

        admin.toggle_pane();
        admin.add_item();
        assert_eq!(admin.pane, AdminPane::Messages);
        assert_eq!(admin.document.messages.len(), 3);
    }

    #[test]
    fn plus_on_question_pane_adds_choice() {
        let mut admin = unlocked(two_questions());
        admin.add_item();
        assert_eq!(admin.document.questions[0].choices.len(), 3);
        assert_eq!(admin.focused_field(), Some(Field::ChoiceText(2)));
    }

    #[test]
    fn text_input_handles_multibyte() {
        let mut input = TextInput::new("жаба");
        input.left();
        input.insert('!');
        assert_eq!(input.value, "жаб!а");
        input.home();
        input.delete();
        assert_eq!(input.value, "аб!а");
        input.end();
        input.backspace();
        assert_eq!(input.split(), ("аб!", ""));
    }

    #[test]
    fn wrong_password_keeps_login() {
        let mut admin = AdminState::new(QuizDocument::new(), Box::new(MemoryClipboard::default()));
        admin.password = TextInput::new("nope");
        admin.login();
        assert_eq!(admin.screen, AdminScreen::Login);
        assert!(admin.status.as_ref().unwrap().is_error);
        assert!(admin.password.is_empty());

        admin.password = TextInput::new("DOWEN");
        admin.login();
        assert_eq!(admin.screen, AdminScreen::Editor);
    }

    #[test]
    fn notice_survives_login() {
        let mut admin = AdminState::new(QuizDocument::new(), Box::new(MemoryClipboard::default()));
        admin.notice = Some(StatusLine::error("Could not load"));
        admin.password = TextInput::new("DOWEN");
        admin.login();
        assert_eq!(admin.status, Some(StatusLine::error("Could not load")));
        assert!(admin.notice.is_none());
    }

    #[test]
    fn question_fields_follow_choices() {
        let admin = unlocked(two_questions());
        assert_eq!(
            admin.fields(),
            [
                Field::QuestionText,
                Field::QuestionImage,
                Field::ChoiceText(0),
                Field::ChoiceComment(0),
                Field::ChoiceText(1),
                Field::ChoiceComment(1),
            ]
        );
    }

    #[test]
    fn inline_edit_commits_to_document() {
        let mut admin = unlocked(two_questions());
        admin.field_cursor = 4;
        admin.begin_edit(admin.focused_edit_target().unwrap());
        assert_eq!(admin.input.value, "b");
        admin.input.insert('!');
        admin.commit_edit();
        assert_eq!(admin.document.questions[0].choices[1].text, "b!");
        assert_eq!(admin.input_mode, InputMode::Navigation);
    }

    #[test]
    fn bad_number_keeps_edit_open() {
        let mut admin = unlocked(two_questions());
        admin.toggle_pane();
        admin.begin_edit(EditTarget::Field(Field::MessageMin(1)));
        admin.input = TextInput::new("lots");
        admin.commit_edit();
        assert_eq!(admin.editing, Some(EditTarget::Field(Field::MessageMin(1))));
        assert_eq!(admin.document.messages[1].min, 1);
        assert!(admin.status.as_ref().unwrap().is_error);

        admin.input = TextInput::new(" 3 ");
        admin.commit_edit();
        assert_eq!(admin.document.messages[1].min, 3);
        assert_eq!(admin.editing, None);
    }

    #[test]
    fn empty_max_means_unbounded() {
        let mut admin = unlocked(two_questions());
        admin.set_field(Field::MessageMax(0), String::new()).unwrap();
        assert_eq!(admin.document.messages[0].max, UNBOUNDED);
        assert_eq!(admin.field_value(Field::MessageMax(0)), "");
    }

    #[test]
    fn mark_correct_and_remove_choice() {
        let mut admin = unlocked(two_questions());
        admin.field_cursor = 3; // comment of choice A
        admin.mark_correct();
        assert_eq!(admin.document.questions[0].correct_index, 0);

        admin.field_cursor = 0;
        admin.mark_correct();
        assert_eq!(admin.document.questions[0].correct_index, 0);

        admin.field_cursor = 4;
        admin.remove_focused();
        assert_eq!(admin.document.questions[0].choices.len(), 1);
        assert_eq!(admin.field_cursor, 3);
    }

    #[test]
    fn move_by_position_and_delta() {
        let mut admin = unlocked(two_questions());
        admin.new_question();
        assert_eq!(admin.selected_question, 2);

        admin.begin_edit(EditTarget::Position);
        admin.input = TextInput::new("1");
        admin.commit_edit();
        assert_eq!(admin.selected_question, 0);
        assert_eq!(admin.document.questions[1].text, "one");

        admin.move_selected(1);
        assert_eq!(admin.selected_question, 1);
        assert_eq!(admin.document.questions[0].text, "one");

        admin.move_selected(-5);
        assert_eq!(admin.selected_question, 0);
        assert_eq!(admin.document.questions[0].text, "");
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut admin = unlocked(two_questions());
        admin.select_question(1);
        admin.request_delete_question();
        assert_eq!(admin.top_dialog(), Some(&Dialog::ConfirmDeleteQuestion(1)));
        assert_eq!(admin.document.questions.len(), 2);

        admin.pop_dialog();
        admin.delete_question(1);
        assert_eq!(admin.document.questions.len(), 1);
        assert_eq!(admin.selected_question, 0);
    }

    #[test]
    fn export_then_import_via_clipboard() {
        let mut admin = unlocked(two_questions());
        admin.document.title = "Frogs".to_string();
        admin.export();
        assert!(matches!(admin.top_dialog(), Some(Dialog::Export(json)) if json.contains("Frogs")));
        assert!(!admin.status.as_ref().unwrap().is_error);

        let exported = admin.document.clone();
        admin.new_question();
        admin.document.title = "changed".to_string();
        admin.import();
        assert_eq!(admin.document, exported);
    }

    #[test]
    fn rejected_import_keeps_document() {
        let mut admin = AdminState::new(
            two_questions(),
            Box::new(MemoryClipboard::with_text(r#"{"title":"x"}"#)),
        );
        admin.password = TextInput::new("DOWEN");
        admin.login();
        let before = admin.document.clone();
        admin.import();
        assert_eq!(admin.document, before);
        let status = admin.status.unwrap();
        assert!(status.is_error);
        assert!(status.text.starts_with("Import rejected"));
    }

    #[test]
    fn export_warns_about_invalid_document() {
        let mut admin = unlocked(two_questions());
        admin.document.questions[0].choices.clear();
        admin.export();
        assert!(admin.status.as_ref().unwrap().is_error);
        assert!(admin.has_dialog());
    }
}
