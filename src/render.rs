//! Text rendering of grade reports for terminal output

use crate::types::{AlignmentItem, GradeReport, WordStatus};

const RED_BOLD: &str = "\x1b[1;31m";
const YELLOW_UNDERLINE: &str = "\x1b[4;33m";
const RESET: &str = "\x1b[0m";

/// Renders the score line followed by the annotated words.
///
/// Without color, incorrect words are wrapped as `[word]` and missing words
/// as `(word)`. With color they are shown red/bold and yellow/underlined.
pub fn render_report(report: &GradeReport, color: bool) -> String {
    let words: Vec<String> = report
        .alignment
        .iter()
        .map(|item| render_item(item, color))
        .collect();
    format!(
        "Score: {:.2}%\n{}\ncorrect: {}  incorrect: {}  missing: {}\n",
        report.score,
        words.join(" "),
        report.correct_count(),
        report.incorrect_count(),
        report.missing_count()
    )
}

fn render_item(item: &AlignmentItem, color: bool) -> String {
    match (item.status, color) {
        (WordStatus::Correct, _) => item.word.clone(),
        (WordStatus::Incorrect, false) => format!("[{}]", item.word),
        (WordStatus::Missing, false) => format!("({})", item.word),
        (WordStatus::Incorrect, true) => format!("{RED_BOLD}{}{RESET}", item.word),
        (WordStatus::Missing, true) => format!("{YELLOW_UNDERLINE}{}{RESET}", item.word),
    }
}
