//! Core types for the dictation grading pipeline

use serde::{Deserialize, Serialize};

/// A lowercase word taken from reference or submission text
pub type Token = String;

/// Outcome assigned to a single word of the alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// Reference word typed exactly
    Correct,
    /// Student word that does not fit the reference at this position
    Incorrect,
    /// Reference word the student left out
    Missing,
}

/// A single word of the graded output.
///
/// `Correct` and `Missing` items carry the reference word, `Incorrect`
/// items carry the word the student typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentItem {
    pub word: Token,
    pub status: WordStatus,
}

impl AlignmentItem {
    pub fn correct(word: impl Into<Token>) -> Self {
        Self::new(word, WordStatus::Correct)
    }

    pub fn incorrect(word: impl Into<Token>) -> Self {
        Self::new(word, WordStatus::Incorrect)
    }

    pub fn missing(word: impl Into<Token>) -> Self {
        Self::new(word, WordStatus::Missing)
    }

    fn new(word: impl Into<Token>, status: WordStatus) -> Self {
        Self {
            word: word.into(),
            status,
        }
    }
}

/// Complete output of one grading call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub alignment: Vec<AlignmentItem>,
    /// Percentage of reference words typed correctly, in [0, 100]
    pub score: f64,
    /// Number of tokens in the reference text
    pub reference_len: usize,
}

impl GradeReport {
    pub fn correct_count(&self) -> usize {
        self.count(WordStatus::Correct)
    }

    pub fn incorrect_count(&self) -> usize {
        self.count(WordStatus::Incorrect)
    }

    pub fn missing_count(&self) -> usize {
        self.count(WordStatus::Missing)
    }

    fn count(&self, status: WordStatus) -> usize {
        self.alignment
            .iter()
            .filter(|item| item.status == status)
            .count()
    }
}

/// Exercise record as stored by the surrounding application
#[derive(Debug, Clone, Deserialize)]
pub struct Exercise {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(alias = "answerKey", alias = "answer_key", alias = "reference")]
    pub answer_key: String,
    #[serde(default, alias = "studentInput", alias = "student_input")]
    pub submission: String,
}

impl Exercise {
    /// Short label used as a header when rendering, e.g. `unit-1 #7`
    pub fn label(&self) -> Option<String> {
        let id = self.id.as_ref().map(|id| match id {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        });
        match (self.folder.as_deref(), id) {
            (Some(folder), Some(id)) => Some(format!("{folder} #{id}")),
            (Some(folder), None) => Some(folder.to_string()),
            (None, Some(id)) => Some(format!("#{id}")),
            (None, None) => None,
        }
    }
}
