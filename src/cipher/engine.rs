//! Pair substitution and decryption orchestration. This engine only runs the
//! decrypting direction: row pairs shift left and column pairs shift up,
//! undoing the right/down shifts applied at encryption time.

use crate::cipher::alphabet::{FILLER, GRID_SIZE};
use crate::cipher::key_square::{CipherError, KeySquare, Position};
use crate::cipher::segment::{segment, Digraph};

/// Index one step left or up, wrapping within the grid. Written as `+ 4`
/// rather than `- 1` to stay in unsigned arithmetic.
fn shift_back(index: usize) -> usize {
    (index + GRID_SIZE - 1) % GRID_SIZE
}

/// Applies the Playfair positional rule to one digraph, in priority order:
/// same row shifts both symbols one column left, same column shifts both one
/// row up, otherwise each symbol keeps its row and takes the other symbol's
/// column.
pub fn decipher_pair(digraph: Digraph, grid: &KeySquare) -> Result<Digraph, CipherError> {
    let first = grid.locate(digraph.0)?;
    let second = grid.locate(digraph.1)?;

    let (out_first, out_second) = if first.row == second.row {
        (
            Position { row: first.row, col: shift_back(first.col) },
            Position { row: second.row, col: shift_back(second.col) },
        )
    } else if first.col == second.col {
        (
            Position { row: shift_back(first.row), col: first.col },
            Position { row: shift_back(second.row), col: second.col },
        )
    } else {
        (
            Position { row: first.row, col: second.col },
            Position { row: second.row, col: first.col },
        )
    };

    Ok(Digraph(grid.symbol_at(out_first), grid.symbol_at(out_second)))
}

/// Decrypts ciphertext with the keyword: builds the key square, segments the
/// ciphertext into digraphs, deciphers each in order, and strips every filler
/// letter from the concatenated result.
///
/// The final stripping is lossy by design: an `X` that was genuinely part of
/// the plaintext is removed along with the inserted padding. That is the
/// classical scheme's accepted limitation, preserved here unchanged.
pub fn decrypt(ciphertext: &str, keyword: &str) -> Result<String, CipherError> {
    let grid = KeySquare::build(keyword);

    let mut plaintext = String::new();
    for digraph in segment(ciphertext) {
        let deciphered = decipher_pair(digraph, &grid)?;
        plaintext.push(deciphered.0);
        plaintext.push(deciphered.1);
    }

    Ok(plaintext.chars().filter(|&c| c != FILLER).collect())
}
