use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;

use crate::error::QuizError;

/// A text buffer standing in for the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), QuizError>;
    fn read_text(&mut self) -> Result<String, QuizError>;

    /// Where the text ends up, for status messages.
    fn describe(&self) -> String;
}

/// Clipboard backed by a single file.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/buffer.json`, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "quizdesk")
            .map(|dirs| dirs.data_dir().join("buffer.json"))
            .unwrap_or_else(|| PathBuf::from("quizdesk-buffer.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn buffer_error(&self, source: io::Error) -> QuizError {
        QuizError::Buffer {
            path: self.path.clone(),
            source,
        }
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), QuizError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.buffer_error(e))?;
        }
        atomic_write(&self.path, text).map_err(|e| self.buffer_error(e))?;
        debug!("wrote {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }

    fn read_text(&mut self) -> Result<String, QuizError> {
        fs::read_to_string(&self.path).map_err(|e| self.buffer_error(e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), QuizError> {
        self.text = Some(text.to_string());
        Ok(())
    }

    fn read_text(&mut self) -> Result<String, QuizError> {
        self.text.clone().ok_or_else(|| QuizError::Buffer {
            path: PathBuf::from("<memory>"),
            source: io::Error::new(io::ErrorKind::NotFound, "clipboard is empty"),
        })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}
