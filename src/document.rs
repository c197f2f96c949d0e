//! Loading, validating and editing quiz documents.
//!
//! Validation happens only at the boundaries: [`parse_document`] for the
//! initial load and [`QuizDocument::import`] for admin imports. The editing
//! operations are total over any in-memory document.

use log::{debug, info, warn};

use crate::error::{DocumentError, QuizError};
use crate::hash::compute_str_hash;
use crate::model::{Choice, Question, QuizDocument, ScoreMessage};

/// Parse and validate a quiz document from JSON text.
pub fn parse_document(text: &str) -> Result<QuizDocument, DocumentError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(DocumentError::Syntax)?;

    if !value.get("questions").is_some_and(|q| q.is_array()) {
        return Err(DocumentError::MissingQuestions);
    }

    let document: QuizDocument = serde_json::from_value(value).map_err(DocumentError::Shape)?;
    document.validate()?;
    Ok(document)
}

impl QuizDocument {
    /// Check the per-question invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), DocumentError> {
        for (i, q) in self.questions.iter().enumerate() {
            if q.correct_index >= q.choices.len() {
                return Err(DocumentError::CorrectIndexOutOfRange {
                    number: i + 1,
                    index: q.correct_index,
                    choices: q.choices.len(),
                });
            }
        }
        Ok(())
    }

    /// Replace the whole document with `text`, or leave it untouched on error.
    pub fn import(&mut self, text: &str) -> Result<(), QuizError> {
        match parse_document(text) {
            Ok(document) => {
                info!(
                    "imported quiz {:?} with {} questions",
                    document.title,
                    document.questions.len()
                );
                *self = document;
                Ok(())
            }
            Err(e) => {
                warn!("import rejected: {}", e);
                Err(QuizError::ImportValidation(e))
            }
        }
    }

    /// Pretty-printed JSON of the current model.
    pub fn export(&self) -> Result<String, QuizError> {
        let json = serde_json::to_string_pretty(self)?;
        debug!("exported {} bytes", json.len());
        Ok(json)
    }

    pub fn fingerprint(&self) -> Result<String, QuizError> {
        Ok(compute_str_hash(&self.export()?))
    }

    pub fn add_question(&mut self) -> usize {
        self.questions.push(Question::template());
        self.questions.len() - 1
    }

    pub fn remove_question(&mut self, idx: usize) -> Option<Question> {
        if idx < self.questions.len() {
            Some(self.questions.remove(idx))
        } else {
            None
        }
    }

    /// Move the question at `from` to position `to`, clamped to the list.
    /// Returns the final position.
    pub fn move_question(&mut self, from: usize, to: usize) -> usize {
        let len = self.questions.len();
        if from >= len {
            return from;
        }
        let to = to.min(len - 1);
        if to != from {
            let item = self.questions.remove(from);
            self.questions.insert(to, item);
        }
        to
    }

    pub fn add_choice(&mut self, question: usize) -> Option<usize> {
        let q = self.questions.get_mut(question)?;
        q.choices.push(Choice::default());
        Some(q.choices.len() - 1)
    }

    /// Remove a choice, keeping `correct_index` on the same choice when it survives.
    pub fn remove_choice(&mut self, question: usize, choice: usize) -> Option<Choice> {
        let q = self.questions.get_mut(question)?;
        if choice >= q.choices.len() {
            return None;
        }
        let removed = q.choices.remove(choice);
        if choice < q.correct_index {
            q.correct_index -= 1;
        } else if choice == q.correct_index {
            q.correct_index = 0;
        }
        Some(removed)
    }

    pub fn set_correct(&mut self, question: usize, choice: usize) -> bool {
        match self.questions.get_mut(question) {
            Some(q) if choice < q.choices.len() => {
                q.correct_index = choice;
                true
            }
            _ => false,
        }
    }

    pub fn add_message(&mut self) -> usize {
        self.messages.push(ScoreMessage::new(0, 0, ""));
        self.messages.len() - 1
    }

    pub fn remove_message(&mut self, idx: usize) -> Option<ScoreMessage> {
        if idx < self.messages.len() {
            Some(self.messages.remove(idx))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNBOUNDED;

    fn doc_with(texts: &[&str]) -> QuizDocument {
        let mut doc = QuizDocument::new();
        for t in texts {
            let idx = doc.add_question();
            doc.questions[idx].text = t.to_string();
        }
        doc
    }

    fn texts(doc: &QuizDocument) -> Vec<&str> {
        doc.questions.iter().map(|q| q.text.as_str()).collect()
    }

    #[test]
    fn fresh_document_defaults() {
        let doc = QuizDocument::new();
        assert_eq!(doc.title, "");
        assert!(doc.questions.is_empty());
        assert_eq!(doc.messages.len(), 2);
        assert_eq!((doc.messages[0].min, doc.messages[0].max), (0, 0));
        assert_eq!((doc.messages[1].min, doc.messages[1].max), (1, 2));
    }

    #[test]
    fn new_question_uses_template() {
        let mut doc = QuizDocument::new();
        let idx = doc.add_question();
        assert_eq!(doc.questions[idx].choices.len(), 4);
        assert_eq!(doc.questions[idx].correct_index, 0);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn move_question_preserves_relative_order() {
        let mut doc = doc_with(&["a", "b", "c", "d", "e"]);
        assert_eq!(doc.move_question(0, 3), 3);
        assert_eq!(texts(&doc), ["b", "c", "d", "a", "e"]);

        assert_eq!(doc.move_question(4, 1), 1);
        assert_eq!(texts(&doc), ["b", "e", "c", "d", "a"]);
    }

    #[test]
    fn move_question_clamps_target() {
        let mut doc = doc_with(&["a", "b", "c"]);
        assert_eq!(doc.move_question(0, 99), 2);
        assert_eq!(texts(&doc), ["b", "c", "a"]);

        assert_eq!(doc.move_question(1, 1), 1);
        assert_eq!(texts(&doc), ["b", "c", "a"]);

        assert_eq!(doc.move_question(7, 0), 7);
        assert_eq!(texts(&doc), ["b", "c", "a"]);
    }

    #[test]
    fn remove_choice_tracks_correct_answer() {
        let mut doc = doc_with(&["q"]);
        for (i, c) in doc.questions[0].choices.iter_mut().enumerate() {
            c.text = format!("c{}", i);
        }
        doc.set_correct(0, 2);

        doc.remove_choice(0, 0);
        assert_eq!(doc.questions[0].correct_index, 1);
        assert_eq!(doc.questions[0].choices[1].text, "c2");

        doc.remove_choice(0, 2);
        assert_eq!(doc.questions[0].correct_index, 1);

        doc.remove_choice(0, 1);
        assert_eq!(doc.questions[0].correct_index, 0);
        assert_eq!(doc.questions[0].choices.len(), 1);
    }

    #[test]
    fn removing_every_choice_is_caught_by_validate() {
        let mut doc = doc_with(&["q"]);
        while doc.remove_choice(0, 0).is_some() {}
        assert!(doc.questions[0].choices.is_empty());
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::CorrectIndexOutOfRange { number: 1, .. })
        ));
    }

    #[test]
    fn set_correct_rejects_out_of_range() {
        let mut doc = doc_with(&["q"]);
        assert!(doc.set_correct(0, 3));
        assert!(!doc.set_correct(0, 4));
        assert!(!doc.set_correct(1, 0));
        assert_eq!(doc.questions[0].correct_index, 3);
    }

    #[test]
    fn messages_add_and_remove() {
        let mut doc = QuizDocument::new();
        let idx = doc.add_message();
        assert_eq!(idx, 2);
        assert_eq!(doc.messages[2], ScoreMessage::new(0, 0, ""));
        assert!(doc.remove_message(0).is_some());
        assert!(doc.remove_message(5).is_none());
        assert_eq!(doc.messages.len(), 2);
    }

    #[test]
    fn import_without_questions_is_rejected() {
        let mut doc = doc_with(&["keep me"]);
        let before = doc.clone();
        let err = doc.import(r#"{"title":"x"}"#).unwrap_err();
        assert!(matches!(
            err,
            QuizError::ImportValidation(DocumentError::MissingQuestions)
        ));
        assert_eq!(doc, before);
    }

    #[test]
    fn import_rejects_garbage_and_bad_index() {
        let mut doc = doc_with(&["keep me"]);
        let before = doc.clone();

        assert!(doc.import("not json at all").is_err());
        assert!(doc.import(r#"{"questions": {}}"#).is_err());
        assert!(doc
            .import(r#"{"questions":[{"choices":["a"],"correctIndex":1}]}"#)
            .is_err());
        assert!(doc
            .import(r#"{"questions":[{"choices":["a"],"correctIndex":-1}]}"#)
            .is_err());
        assert_eq!(doc, before);
    }

    #[test]
    fn import_replaces_whole_document() {
        let mut doc = doc_with(&["old"]);
        doc.import(r#"{"title":"New","questions":[{"text":"n","choices":["x","y"],"correctIndex":1}]}"#)
            .unwrap();
        assert_eq!(doc.title, "New");
        assert_eq!(texts(&doc), ["n"]);
        assert!(doc.messages.is_empty());
    }

    #[test]
    fn choices_normalize_from_strings_and_objects() {
        let doc = parse_document(
            r#"{"questions":[{"choices":["plain",{"text":"full","comment":"why"},{"text":"bare","comment":""}],"correctIndex":0}]}"#,
        )
        .unwrap();
        let choices = &doc.questions[0].choices;
        assert_eq!(choices[0], Choice::new("plain"));
        assert_eq!(choices[1], Choice::new("full").with_comment("why"));
        assert_eq!(choices[2].comment, None);
    }

    #[test]
    fn empty_image_becomes_none() {
        let doc = parse_document(
            r#"{"questions":[{"image":"","choices":["a"],"correctIndex":0},{"image":"http://x/y.png","choices":["a"],"correctIndex":0}]}"#,
        )
        .unwrap();
        assert_eq!(doc.questions[0].image, None);
        assert_eq!(doc.questions[1].image.as_deref(), Some("http://x/y.png"));
    }

    #[test]
    fn message_bounds_default() {
        let doc = parse_document(r#"{"questions":[],"messages":[{"text":"any"}]}"#).unwrap();
        let m = &doc.messages[0];
        assert_eq!(m.min, 0);
        assert!(m.matches(0));
        assert!(m.matches(1000));
        assert!(!doc.export().unwrap().contains("\"max\""));
    }

    #[test]
    fn null_messages_read_as_empty() {
        let doc = parse_document(r#"{"questions":[],"messages":null}"#).unwrap();
        assert!(doc.messages.is_empty());
    }

    #[test]
    fn null_message_fields_take_defaults() {
        let doc = parse_document(
            r#"{"questions":[],"messages":[{"min":null,"max":null,"text":null},{"min":2,"max":null,"text":"top"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.messages[0], ScoreMessage::new(0, UNBOUNDED, ""));
        assert_eq!(doc.messages[1], ScoreMessage::new(2, UNBOUNDED, "top"));
        assert!(doc.messages[1].matches(7));
    }

    #[test]
    fn null_question_and_choice_text_read_as_empty() {
        let doc = parse_document(
            r#"{"questions":[{"text":null,"choices":[{"text":null,"comment":"c"},"b"],"correctIndex":1}]}"#,
        )
        .unwrap();
        let q = &doc.questions[0];
        assert_eq!(q.text, "");
        assert_eq!(q.choices[0], Choice::new("").with_comment("c"));
        assert_eq!(q.choices[1], Choice::new("b"));
    }

    #[test]
    fn export_then_import_reproduces_model() {
        let mut doc = doc_with(&["first", "second"]);
        doc.title = "Round".to_string();
        doc.questions[1].image = Some("https://example.org/frog.jpg".to_string());
        doc.questions[1].choices[2] = Choice::new("three").with_comment("because");
        doc.set_correct(1, 2);

        let json = doc.export().unwrap();
        assert!(json.contains("\"correctIndex\": 2"));

        let mut other = QuizDocument::new();
        other.import(&json).unwrap();
        assert_eq!(other, doc);
        assert_eq!(other.export().unwrap(), json);
        assert_eq!(other.fingerprint().unwrap(), doc.fingerprint().unwrap());
    }
}
