use std::fs;
use std::process::Command;

use log::debug;

use crate::error::QuizError;

/// Edit `initial_content` in `$EDITOR` (vim by default) and return the result.
pub fn open_editor(initial_content: &str) -> Result<String, QuizError> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

    let tmp_file = std::env::temp_dir().join(format!("quizdesk_{}.txt", std::process::id()));

    fs::write(&tmp_file, initial_content)
        .map_err(|e| QuizError::Editor(format!("Cannot write temp file: {}", e)))?;

    debug!("launching {} on {}", editor, tmp_file.display());
    let status = Command::new(&editor)
        .arg(&tmp_file)
        .status()
        .map_err(|e| QuizError::Editor(format!("Cannot open editor '{}': {}", editor, e)))?;

    if !status.success() {
        let _ = fs::remove_file(&tmp_file);
        return Err(QuizError::Editor("Editor exited with error".to_string()));
    }

    let result = fs::read_to_string(&tmp_file)
        .map_err(|e| QuizError::Editor(format!("Cannot read editor result: {}", e)))?;

    let _ = fs::remove_file(&tmp_file);
    Ok(trim_final_newline(result))
}

/// Editors append a newline on save; field values never end with one.
fn trim_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
