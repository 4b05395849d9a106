pub mod alignment;
pub mod metrics;
pub mod tokenizer;

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::config::GraderConfig;
use crate::types::{AlignmentItem, GradeReport, Token};

use alignment::{Aligner, AlignmentStrategy, LcsAligner, LookaheadAligner};

/// Convenient alias for results returned by grading modules.
pub type Result<T> = std::result::Result<T, GradeError>;

#[derive(Debug, Error)]
pub enum GradeError {
    #[error("reference text contains no words; an answer key is required for grading")]
    EmptyReference,
    #[error("lookahead window must be at least 1, got {0}")]
    InvalidLookahead(usize),
    #[error("failed to read grader config {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse grader config {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Grades student transcriptions against an answer key.
#[derive(Debug, Clone)]
pub struct Grader {
    strategy: AlignmentStrategy,
    lookahead: LookaheadAligner,
}

impl Grader {
    pub fn new(config: &GraderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            strategy: config.strategy,
            lookahead: LookaheadAligner::new(config.lookahead),
        })
    }

    pub fn strategy(&self) -> AlignmentStrategy {
        self.strategy
    }

    /// Tokenizes both texts, aligns them and scores the result.
    ///
    /// Fails with [`GradeError::EmptyReference`] when `reference_text` holds no words.
    pub fn grade(&self, reference_text: &str, submission_text: &str) -> Result<GradeReport> {
        let reference = tokenizer::tokenize(reference_text);
        let submission = tokenizer::tokenize(submission_text);
        if reference.is_empty() {
            return Err(GradeError::EmptyReference);
        }

        let alignment = self.align(&reference, &submission);
        let score = metrics::score(&alignment, reference.len())?;
        debug!(
            strategy = %self.strategy,
            reference_words = reference.len(),
            submission_words = submission.len(),
            score,
            "graded submission"
        );
        Ok(GradeReport {
            alignment,
            score,
            reference_len: reference.len(),
        })
    }

    fn align(&self, reference: &[Token], submission: &[Token]) -> Vec<AlignmentItem> {
        match self.strategy {
            AlignmentStrategy::Lookahead => self.lookahead.align(reference, submission),
            AlignmentStrategy::Lcs => LcsAligner::new().align(reference, submission),
        }
    }
}

impl Default for Grader {
    fn default() -> Self {
        Self {
            strategy: AlignmentStrategy::default(),
            lookahead: LookaheadAligner::default(),
        }
    }
}

/// Grades with the default bounded-lookahead aligner.
pub fn grade(reference_text: &str, submission_text: &str) -> Result<GradeReport> {
    Grader::default().grade(reference_text, submission_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_uses_lookahead_by_default() {
        let report = grade("a b c d e f", "a f").unwrap();
        assert_eq!(report.correct_count(), 1);
        assert_eq!(report.reference_len, 6);
    }

    #[test]
    fn configured_lcs_strategy_finds_long_skips() {
        let config = GraderConfig {
            strategy: AlignmentStrategy::Lcs,
            ..GraderConfig::default()
        };
        let report = Grader::new(&config).unwrap().grade("a b c d e f", "a f").unwrap();
        assert_eq!(report.correct_count(), 2);
    }

    #[test]
    fn blank_reference_is_an_error() {
        let err = grade(" \n\t", "hi").unwrap_err();
        assert!(matches!(err, GradeError::EmptyReference));
    }

    #[test]
    fn zero_lookahead_is_rejected() {
        let config = GraderConfig {
            lookahead: 0,
            ..GraderConfig::default()
        };
        assert!(matches!(
            Grader::new(&config),
            Err(GradeError::InvalidLookahead(0))
        ));
    }
}
