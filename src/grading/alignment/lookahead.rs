use tracing::trace;

use super::Aligner;
use crate::types::{AlignmentItem, Token};

/// Number of reference words scanned ahead when a student word does not match.
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Single-pass greedy aligner with a bounded forward recovery scan.
///
/// Both cursors only move forward. On a mismatch the student word is looked
/// up in the next `window` reference words; a hit marks the skipped reference
/// words as missing, otherwise the student word is marked incorrect. Work per
/// mismatch is bounded by the window, so the whole pass is linear, at the cost
/// of misclassifying omissions longer than the window.
#[derive(Debug, Clone, Copy)]
pub struct LookaheadAligner {
    window: usize,
}

impl LookaheadAligner {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Offset `k` in `1..=window` of the first reference word equal to `word`.
    fn recover(&self, reference: &[Token], ref_idx: usize, word: &str) -> Option<usize> {
        (1..=self.window)
            .take_while(|offset| ref_idx + offset < reference.len())
            .find(|offset| reference[ref_idx + offset] == word)
    }
}

impl Default for LookaheadAligner {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD)
    }
}

impl Aligner for LookaheadAligner {
    fn align(&self, reference: &[Token], submission: &[Token]) -> Vec<AlignmentItem> {
        let mut items = Vec::with_capacity(reference.len().max(submission.len()));
        let mut ref_idx = 0;
        let mut sub_idx = 0;

        while ref_idx < reference.len() {
            let Some(word) = submission.get(sub_idx) else {
                items.push(AlignmentItem::missing(reference[ref_idx].as_str()));
                ref_idx += 1;
                continue;
            };

            if *word == reference[ref_idx] {
                items.push(AlignmentItem::correct(reference[ref_idx].as_str()));
                ref_idx += 1;
                sub_idx += 1;
                continue;
            }

            match self.recover(reference, ref_idx, word) {
                Some(offset) => {
                    trace!(ref_idx, sub_idx, offset, "recovered after skipped words");
                    items.extend(
                        reference[ref_idx..ref_idx + offset]
                            .iter()
                            .map(|skipped| AlignmentItem::missing(skipped.as_str())),
                    );
                    ref_idx += offset;
                    items.push(AlignmentItem::correct(reference[ref_idx].as_str()));
                    ref_idx += 1;
                    sub_idx += 1;
                }
                None => {
                    items.push(AlignmentItem::incorrect(word.as_str()));
                    sub_idx += 1;
                }
            }
        }

        items.extend(
            submission[sub_idx..]
                .iter()
                .map(|extra| AlignmentItem::incorrect(extra.as_str())),
        );
        items
    }
}
