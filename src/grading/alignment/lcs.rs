use super::Aligner;
use crate::types::{AlignmentItem, Token};

/// Optimal aligner maximizing the number of correct words.
///
/// Fills a longest-common-subsequence table over suffixes and walks it from
/// the front. Unlike [`super::LookaheadAligner`] it has no window limit, but it
/// needs `O(n * m)` time and memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsAligner;

impl LcsAligner {
    pub fn new() -> Self {
        Self
    }
}

impl Aligner for LcsAligner {
    fn align(&self, reference: &[Token], submission: &[Token]) -> Vec<AlignmentItem> {
        let table = suffix_table(reference, submission);
        let mut items = Vec::with_capacity(reference.len() + submission.len());
        let (mut i, mut j) = (0, 0);

        while i < reference.len() && j < submission.len() {
            if reference[i] == submission[j] {
                items.push(AlignmentItem::correct(reference[i].as_str()));
                i += 1;
                j += 1;
            } else if table[i][j + 1] >= table[i + 1][j] {
                // Wrong student words are reported before the reference words they displaced.
                items.push(AlignmentItem::incorrect(submission[j].as_str()));
                j += 1;
            } else {
                items.push(AlignmentItem::missing(reference[i].as_str()));
                i += 1;
            }
        }

        items.extend(
            submission[j..]
                .iter()
                .map(|extra| AlignmentItem::incorrect(extra.as_str())),
        );
        items.extend(
            reference[i..]
                .iter()
                .map(|left| AlignmentItem::missing(left.as_str())),
        );
        items
    }
}

/// `table[i][j]` holds the LCS length of `reference[i..]` and `submission[j..]`.
fn suffix_table(reference: &[Token], submission: &[Token]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0usize; submission.len() + 1]; reference.len() + 1];
    for i in (0..reference.len()).rev() {
        for j in (0..submission.len()).rev() {
            table[i][j] = if reference[i] == submission[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }
    table
}
