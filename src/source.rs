use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::document::parse_document;
use crate::error::QuizError;
use crate::model::{choice_letter, QuizDocument};

/// Where the quiz lives when nothing is given on the command line.
pub const DEFAULT_QUIZ_PATH: &str = "data/quiz.json";

const CANDIDATES: [&str; 2] = ["quiz.json", "data/quiz.json"];

pub fn resolve_source(path: Option<&str>) -> Result<PathBuf, QuizError> {
    let path = Path::new(path.unwrap_or(DEFAULT_QUIZ_PATH)).to_path_buf();
    let path = if path.is_relative() {
        std::env::current_dir()
            .map_err(|e| QuizError::Source(format!("Cannot get cwd: {}", e)))?
            .join(path)
    } else {
        path
    };

    if path.is_dir() {
        find_quiz_file(&path)
    } else {
        // A missing file is reported by the load itself.
        Ok(path)
    }
}

fn find_quiz_file(dir: &Path) -> Result<PathBuf, QuizError> {
    CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .ok_or_else(|| {
            QuizError::Source(format!(
                "No quiz found in {} (looked for {})",
                dir.display(),
                CANDIDATES.join(", ")
            ))
        })
}

/// Read and validate the quiz at `path`. No retries.
pub fn load_document(path: &Path) -> Result<QuizDocument, QuizError> {
    let content = fs::read_to_string(path).map_err(|e| QuizError::load(path, e))?;
    let document = parse_document(&content).map_err(|e| QuizError::load(path, e))?;
    info!(
        "loaded {:?} from {} ({} questions, {} messages)",
        document.title,
        path.display(),
        document.questions.len(),
        document.messages.len()
    );
    Ok(document)
}

pub fn print_status(document: &QuizDocument, path: &Path) -> Result<(), QuizError> {
    println!("Quiz: {}", document.title);
    println!("Source: {}", path.display());
    println!("Questions: {}", document.questions.len());
    for (i, q) in document.questions.iter().enumerate() {
        println!(
            "  {:>2}. {} ({} choices, answer {})",
            i + 1,
            if q.text.is_empty() { "(no text)" } else { q.text.as_str() },
            q.choices.len(),
            choice_letter(q.correct_index)
        );
    }
    println!("Messages: {}", document.messages.len());
    for m in &document.messages {
        if m.max == crate::model::UNBOUNDED {
            println!("  {}+: {}", m.min, m.text);
        } else {
            println!("  {}..{}: {}", m.min, m.max, m.text);
        }
    }
    println!("Fingerprint: {}", document.fingerprint()?);
    Ok(())
}

pub fn export_document(document: &QuizDocument, path: &str) -> Result<(), QuizError> {
    let json = document.export()?;
    fs::write(path, json + "\n").map_err(|e| QuizError::Buffer {
        path: PathBuf::from(path),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadCause;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quizdesk_src_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn directory_resolves_to_nested_quiz() {
        let dir = scratch("dir");
        fs::create_dir_all(dir.join("data")).unwrap();
        fs::write(dir.join("data/quiz.json"), r#"{"questions":[]}"#).unwrap();

        let path = resolve_source(dir.to_str()).unwrap();
        assert_eq!(path, dir.join("data/quiz.json"));
        assert!(load_document(&path).unwrap().questions.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = scratch("empty");
        assert!(matches!(resolve_source(dir.to_str()), Err(QuizError::Source(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_failures_are_classified() {
        let dir = scratch("load");
        let missing = dir.join("nope.json");
        assert!(matches!(
            load_document(&missing),
            Err(QuizError::Load { source: LoadCause::Io(_), .. })
        ));

        let bad = dir.join("bad.json");
        fs::write(&bad, r#"{"title":"x"}"#).unwrap();
        assert!(matches!(
            load_document(&bad),
            Err(QuizError::Load { source: LoadCause::Document(_), .. })
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
