//! Digraph segmentation. Normalized ciphertext is split into two-symbol
//! groups; a doubled symbol or a trailing odd symbol is padded with the
//! filler letter.

use crate::cipher::alphabet::{merge_symbol, FILLER};

/// An ordered pair of merged-alphabet symbols, the atomic unit of both
/// segmentation and substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph(pub char, pub char);

/// Uppercases the text, strips every character outside the 26 Latin letters,
/// and folds `J` into `I`.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(merge_symbol)
        .collect()
}

/// Splits text into digraphs by scanning left to right, advancing one or two
/// symbols per step:
/// - current equals next: emit (current, filler) and advance 1, so the
///   repeated symbol is re-examined against whatever follows it
/// - next exists: emit (current, next) and advance 2
/// - trailing symbol: emit (current, filler) and advance 1
///
/// The result is always even in symbol count and never pairs two equal
/// symbols, except when the input doubles the filler letter itself; `XX`
/// pads `X` with `X`, an accepted edge case of the classical scheme.
pub fn segment(text: &str) -> Vec<Digraph> {
    let symbols: Vec<char> = normalize_text(text).chars().collect();
    let mut digraphs = Vec::with_capacity(symbols.len() / 2 + 1);

    let mut cursor = 0;
    while cursor < symbols.len() {
        let current = symbols[cursor];
        let step = match symbols.get(cursor + 1) {
            Some(&next) if next == current => {
                digraphs.push(Digraph(current, FILLER));
                1
            }
            Some(&next) => {
                digraphs.push(Digraph(current, next));
                2
            }
            None => {
                digraphs.push(Digraph(current, FILLER));
                1
            }
        };
        cursor += step;
    }
    digraphs
}
