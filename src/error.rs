use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with the shape or content of a quiz document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("invalid quiz format: `questions` must be a list")]
    MissingQuestions,

    #[error("invalid quiz format: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("question {number}: correct answer #{index} is out of range ({choices} choices)")]
    CorrectIndexOutOfRange {
        number: usize,
        index: usize,
        choices: usize,
    },
}

#[derive(Debug, Error)]
pub enum LoadCause {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("cannot load quiz {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadCause,
    },

    #[error("{0}")]
    Source(String),

    #[error("import rejected: {0}")]
    ImportValidation(#[source] DocumentError),

    #[error("wrong admin password")]
    Auth,

    #[error("text buffer {}: {source}", path.display())]
    Buffer {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize quiz: {0}")]
    Export(#[from] serde_json::Error),

    #[error("editor: {0}")]
    Editor(String),

    #[error("terminal: {0}")]
    Terminal(#[from] io::Error),
}

impl QuizError {
    pub fn load(path: impl Into<PathBuf>, cause: impl Into<LoadCause>) -> Self {
        QuizError::Load {
            path: path.into(),
            source: cause.into(),
        }
    }
}
