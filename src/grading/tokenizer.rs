use crate::types::Token;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Lowercases `text` and splits it on runs of whitespace, dropping empty fragments.
///
/// A byte-order mark counts as whitespace so text read from BOM-prefixed files
/// tokenizes the same as typed text.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == BYTE_ORDER_MARK
}
