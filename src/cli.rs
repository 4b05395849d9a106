use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, ValueEnum};

use crate::config::GraderConfig;
use crate::grading::alignment::AlignmentStrategy;
use crate::types::Exercise;

/// Dictation grader - compares a learner's transcription with the answer key
///
/// Aligns the two word sequences, marks every word as correct, incorrect or
/// missing, and reports the percentage of answer-key words typed correctly.
#[derive(Parser, Debug)]
#[command(name = "dictation-grader", version)]
#[command(about = "Grade a dictation transcript against its answer key", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Path to a JSON grader config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Alignment strategy, overrides the config file
    #[arg(long, value_enum)]
    pub strategy: Option<AlignmentStrategy>,

    /// Recovery window for the lookahead strategy, overrides the config file
    #[arg(long, value_name = "N")]
    pub lookahead: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Answer key text
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["reference_file", "exercise"])]
    pub reference: Option<String>,

    /// Learner submission text
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["submission_file", "exercise"])]
    pub submission: Option<String>,

    /// File containing the answer key
    #[arg(long, value_name = "PATH", conflicts_with = "exercise")]
    pub reference_file: Option<PathBuf>,

    /// File containing the learner submission
    #[arg(long, value_name = "PATH", conflicts_with = "exercise")]
    pub submission_file: Option<PathBuf>,

    /// JSON exercise record with `answerKey` and `submission` fields
    #[arg(long, value_name = "PATH")]
    pub exercise: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Color,
    Json,
}

/// Texts to grade, resolved from the command line.
#[derive(Debug, Clone)]
pub struct GradingInput {
    pub label: Option<String>,
    pub reference: String,
    pub submission: String,
}

impl Cli {
    /// Merges the optional config file with command-line overrides.
    pub fn grader_config(&self) -> Result<GraderConfig> {
        let mut config = GraderConfig::from_override(self.config.clone())?;
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(lookahead) = self.lookahead {
            config.lookahead = lookahead;
        }
        config.validate()?;
        Ok(config)
    }
}

impl SourceArgs {
    pub fn resolve(&self) -> Result<GradingInput> {
        if let Some(path) = &self.exercise {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read exercise file {:?}", path))?;
            let exercise: Exercise = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse exercise file {:?}", path))?;
            return Ok(GradingInput {
                label: exercise.label(),
                reference: exercise.answer_key,
                submission: exercise.submission,
            });
        }

        let reference = match (&self.reference, &self.reference_file) {
            (Some(text), None) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("failed to read reference file {:?}", path))?,
            (None, None) => bail!("provide --reference, --reference-file or --exercise"),
            (Some(_), Some(_)) => bail!("use either --reference or --reference-file, not both"),
        };
        let submission = match (&self.submission, &self.submission_file) {
            (Some(text), None) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("failed to read submission file {:?}", path))?,
            (None, None) => String::new(),
            (Some(_), Some(_)) => bail!("use either --submission or --submission-file, not both"),
        };
        Ok(GradingInput {
            label: None,
            reference,
            submission,
        })
    }
}
