use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quizdesk", version, about = "Terminal multiple-choice quiz with a JSON editor")]
pub struct Cli {
    /// View to open: `/admin` (or `#/admin`) for the editor, anything else for the quiz
    #[arg(default_value = "/")]
    pub route: String,

    /// Quiz file, or a directory holding quiz.json [default: ./data/quiz.json]
    #[arg(long, value_name = "path")]
    pub file: Option<String>,

    /// Text buffer for export, import and share [default: platform data dir]
    #[arg(long, value_name = "path")]
    pub buffer: Option<String>,

    /// No terminal bell after answering
    #[arg(long)]
    pub quiet: bool,

    /// Validate the quiz and print a summary without entering the TUI
    #[arg(long)]
    pub check: bool,

    /// Write the quiz as canonical JSON to a file and exit
    #[arg(long, value_name = "path")]
    pub export: Option<String>,
}
