use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound used when a score message leaves `max` out.
pub const UNBOUNDED: i64 = i64::MAX;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDocument {
    #[serde(default)]
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<ScoreMessage>,
}

impl QuizDocument {
    /// A fresh document: no title, no questions, two starter messages.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            questions: Vec::new(),
            messages: vec![
                ScoreMessage::new(0, 0, "Not bad! Try again, you will do better."),
                ScoreMessage::new(1, 2, "Good result! A little more practice."),
            ],
        }
    }
}

impl Default for QuizDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    pub image: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub correct_index: usize,
}

impl Question {
    /// Number of choices the admin editor starts a new question with.
    pub const TEMPLATE_CHOICES: usize = 4;

    pub fn template() -> Self {
        Self {
            text: String::new(),
            image: None,
            choices: vec![Choice::default(); Self::TEMPLATE_CHOICES],
            correct_index: 0,
        }
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        self.correct_index == choice
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawChoice")]
pub struct Choice {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Choice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into()).filter(|c| !c.is_empty());
        self
    }
}

/// Authored choices are either a bare string or `{text, comment?}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoice {
    Plain(String),
    Full {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default)]
        comment: Option<String>,
    },
}

impl From<RawChoice> for Choice {
    fn from(raw: RawChoice) -> Self {
        match raw {
            RawChoice::Plain(text) => Choice::new(text),
            RawChoice::Full { text, comment } => Choice {
                text,
                comment: comment.filter(|c| !c.is_empty()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub min: i64,
    #[serde(
        default = "unbounded",
        skip_serializing_if = "is_unbounded",
        deserialize_with = "null_as_unbounded"
    )]
    pub max: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl ScoreMessage {
    pub fn new(min: i64, max: i64, text: impl Into<String>) -> Self {
        Self {
            min,
            max,
            text: text.into(),
        }
    }

    pub fn matches(&self, score: u32) -> bool {
        let score = i64::from(score);
        self.min <= score && score <= self.max
    }
}

/// `A`, `B`, ... for the first 26 choices, then the 1-based number.
pub fn choice_letter(idx: usize) -> String {
    if idx < 26 {
        ((b'A' + idx as u8) as char).to_string()
    } else {
        (idx + 1).to_string()
    }
}

fn unbounded() -> i64 {
    UNBOUNDED
}

fn is_unbounded(max: &i64) -> bool {
    *max == UNBOUNDED
}

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unbounded<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(UNBOUNDED))
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
