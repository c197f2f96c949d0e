use std::fs;
use std::path::Path;

use quizdesk::error::{DocumentError, LoadCause, QuizError};
use quizdesk::model::{QuizDocument, UNBOUNDED};
use quizdesk::source;

fn sample() -> QuizDocument {
    let content = fs::read_to_string("fixtures/sample_quiz.json").expect("Cannot read fixture");
    quizdesk::document::parse_document(&content).unwrap()
}

#[test]
fn test_load_sample_quiz() {
    let quiz = sample();

    assert_eq!(quiz.title, "Pond Life");
    assert_eq!(quiz.questions.len(), 3);

    // Mixed plain-string and object choices collapse to one shape
    let q1 = &quiz.questions[0];
    assert_eq!(q1.image.as_deref(), Some("https://example.org/pond.jpg"));
    assert_eq!(q1.choices.len(), 3);
    assert_eq!(q1.choices[0].text, "Carp");
    assert_eq!(q1.choices[0].comment, None);
    assert_eq!(q1.choices[1].text, "Frog");
    assert_eq!(
        q1.choices[1].comment.as_deref(),
        Some("Frogs live both in water and on land.")
    );
    assert_eq!(q1.choices[2].comment, None);
    assert_eq!(q1.correct_index, 1);

    // Empty image string means no image
    assert_eq!(quiz.questions[1].image, None);
    assert_eq!(quiz.questions[2].image, None);

    assert_eq!(quiz.messages.len(), 3);
    assert_eq!(quiz.messages[2].min, 3);
    assert_eq!(quiz.messages[2].max, UNBOUNDED);
}

#[test]
fn test_export_reimports_to_same_model() {
    let quiz = sample();
    let json = quiz.export().unwrap();

    // Canonical form: every choice is an object, absent fields are omitted
    assert!(json.contains("\"correctIndex\": 1"));
    assert!(!json.contains("\"image\": \"\""));
    assert!(!json.contains("\"comment\": null"));

    let mut other = QuizDocument::new();
    other.import(&json).unwrap();
    assert_eq!(other, quiz);
    assert_eq!(other.fingerprint().unwrap(), quiz.fingerprint().unwrap());
}

#[test]
fn test_out_of_range_answer_is_rejected_with_question_number() {
    let err = source::load_document(Path::new("fixtures/broken_index.json")).unwrap_err();
    match err {
        QuizError::Load {
            source: LoadCause::Document(DocumentError::CorrectIndexOutOfRange { number, index, choices }),
            ..
        } => {
            assert_eq!(number, 2);
            assert_eq!(index, 2);
            assert_eq!(choices, 2);
        }
        other => panic!("Expected CorrectIndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_a_load_failure() {
    let err = source::load_document(Path::new("fixtures/no_such_quiz.json")).unwrap_err();
    assert!(matches!(
        err,
        QuizError::Load {
            source: LoadCause::Io(_),
            ..
        }
    ));
    assert!(err.to_string().contains("no_such_quiz.json"));
}

#[test]
fn test_rejected_import_keeps_previous_document() {
    let mut quiz = sample();
    let before = quiz.clone();

    for payload in [r#"{"title":"x"}"#, "not json", r#"{"questions": 3}"#, r#"{"questions":[{"choices":["a"],"correctIndex":4}]}"#] {
        let err = quiz.import(payload).unwrap_err();
        assert!(matches!(err, QuizError::ImportValidation(_)), "{}", payload);
        assert_eq!(quiz, before);
    }
}

#[test]
fn test_directory_source_finds_quiz_json() {
    let path = source::resolve_source(Some(".")).unwrap();
    assert!(path.ends_with("data/quiz.json"));
    let quiz = source::load_document(&path).unwrap();
    assert!(!quiz.questions.is_empty());
}
