use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::grading::alignment::{AlignmentStrategy, DEFAULT_LOOKAHEAD};
use crate::grading::{GradeError, Result};

/// Grader settings, optionally read from a JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraderConfig {
    pub strategy: AlignmentStrategy,
    #[serde(alias = "lookaheadWindow", alias = "window")]
    pub lookahead: usize,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            strategy: AlignmentStrategy::default(),
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl GraderConfig {
    /// Loads `path` when given, otherwise returns the defaults.
    pub fn from_override(path: Option<PathBuf>) -> Result<Self> {
        let config = match path {
            Some(custom) => load_file(&custom)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lookahead == 0 {
            return Err(GradeError::InvalidLookahead(self.lookahead));
        }
        Ok(())
    }
}

fn load_file(path: &Path) -> Result<GraderConfig> {
    let raw = fs::read_to_string(path).map_err(|source| GradeError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| GradeError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
