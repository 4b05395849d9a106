//! Dictation grading: aligns a learner's transcription with the answer key
//! and scores the share of answer-key words typed correctly.

pub mod cli;
pub mod config;
pub mod grading;
pub mod render;
pub mod types;

pub use config::GraderConfig;
pub use grading::alignment::{Aligner, AlignmentStrategy, LcsAligner, LookaheadAligner};
pub use grading::{grade, GradeError, Grader};
pub use types::{AlignmentItem, GradeReport, Token, WordStatus};
