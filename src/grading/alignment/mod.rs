pub mod lcs;
pub mod lookahead;

use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::{AlignmentItem, Token};

pub use lcs::LcsAligner;
pub use lookahead::{LookaheadAligner, DEFAULT_LOOKAHEAD};

/// Pairs reference and submission tokens into an ordered list of graded words.
///
/// Implementations must account for every reference token exactly once, as
/// either a correct or a missing item, and for every submission token that is
/// not matched as an incorrect item.
pub trait Aligner {
    fn align(&self, reference: &[Token], submission: &[Token]) -> Vec<AlignmentItem>;
}

/// Selects which [`Aligner`] a grader runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentStrategy {
    /// Greedy single pass with a bounded recovery window.
    #[default]
    Lookahead,
    /// Longest-common-subsequence alignment.
    Lcs,
}

impl Display for AlignmentStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentStrategy::Lookahead => write!(f, "lookahead"),
            AlignmentStrategy::Lcs => write!(f, "lcs"),
        }
    }
}
