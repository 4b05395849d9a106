use crate::grading::{GradeError, Result};
use crate::types::{AlignmentItem, WordStatus};

/// Percentage of reference words marked correct.
///
/// Not clamped: alignments from this crate never hold more correct items than
/// reference words, so the result already lies in `[0, 100]`.
pub fn score(alignment: &[AlignmentItem], reference_len: usize) -> Result<f64> {
    if reference_len == 0 {
        return Err(GradeError::EmptyReference);
    }
    let correct = alignment
        .iter()
        .filter(|item| item.status == WordStatus::Correct)
        .count();
    Ok(100.0 * correct as f64 / reference_len as f64)
}
