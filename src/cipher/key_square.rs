//! Key-square construction and symbol lookup. The square is built once per
//! decryption call from the keyword and is immutable afterward.

use thiserror::Error;

use crate::cipher::alphabet::{merge_symbol, ALPHABET, GRID_SIZE};

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("symbol '{symbol}' is not present in the key square")]
    SymbolNotInGrid { symbol: char },
}

/// Zero-based (row, column) location of a symbol in the key square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A 5×5 grid holding each of the 25 merged-alphabet symbols exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

/// Uppercases the keyword, folds `J` into `I`, drops non-alphabetic
/// characters, and removes duplicates preserving first-occurrence order.
///
/// Stripping non-letters is a deliberate policy choice: the reference left
/// their handling undefined, and passing them through would displace real
/// letters from the grid. With stripping, `KeySquare::build` stays total over
/// every keyword, including the empty one.
pub fn normalize_keyword(keyword: &str) -> String {
    let mut normalized = String::new();
    for c in keyword.chars() {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        let symbol = merge_symbol(c);
        if !normalized.contains(symbol) {
            normalized.push(symbol);
        }
    }
    normalized
}

impl KeySquare {
    /// Builds the key square for a keyword: the normalized keyword followed by
    /// the canonical alphabet, deduplicated preserving order, fills the grid
    /// row-major. Total over any keyword; an empty keyword yields the
    /// canonical alphabet grid.
    pub fn build(keyword: &str) -> Self {
        let mut ordering = normalize_keyword(keyword);
        for c in ALPHABET.chars() {
            if !ordering.contains(c) {
                ordering.push(c);
            }
        }

        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for (index, symbol) in ordering.chars().take(GRID_SIZE * GRID_SIZE).enumerate() {
            cells[index / GRID_SIZE][index % GRID_SIZE] = symbol;
        }
        Self { cells }
    }

    /// Returns the symbol stored at a position. Positions come from `locate`,
    /// so the indices are always in range.
    pub fn symbol_at(&self, position: Position) -> char {
        self.cells[position.row][position.col]
    }

    /// Linear scan for a symbol's coordinates. The 25-cell grid makes a
    /// lookup table unnecessary. A miss means the grid is malformed or a
    /// non-alphabet symbol slipped past normalization; it must surface as an
    /// error rather than a guessed position.
    pub fn locate(&self, symbol: char) -> Result<Position, CipherError> {
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell == symbol {
                    return Ok(Position { row, col });
                }
            }
        }
        Err(CipherError::SymbolNotInGrid { symbol })
    }

    /// The grid's rows, for display.
    pub fn rows(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_keyword, CipherError, KeySquare, Position};
    use crate::cipher::alphabet::ALPHABET;
    use std::collections::HashSet;

    #[test]
    fn normalizes_superspy_keyword() {
        assert_eq!(normalize_keyword("SUPERSPY"), "SUPERY");
    }

    #[test]
    fn normalization_merges_j_and_strips_non_letters() {
        assert_eq!(normalize_keyword("jazz band!"), "IAZBND");
        assert_eq!(normalize_keyword("123 %"), "");
    }

    #[test]
    fn superspy_grid_starts_with_key_letters() {
        let grid = KeySquare::build("SUPERSPY");
        assert_eq!(grid.rows()[0], "SUPER");
        assert_eq!(grid.rows()[1], "YABCD");
    }

    #[test]
    fn every_grid_contains_each_symbol_exactly_once() {
        for keyword in ["", "SUPERSPY", "PLAYFAIREXAMPLE", "zzz", "jjjj", "a1b2!"] {
            let grid = KeySquare::build(keyword);
            let symbols: HashSet<char> = grid.rows().concat().chars().collect();
            assert_eq!(symbols, ALPHABET.chars().collect(), "keyword {keyword:?}");
        }
    }

    #[test]
    fn empty_keyword_yields_canonical_grid() {
        let grid = KeySquare::build("");
        assert_eq!(grid.rows().concat(), ALPHABET);
    }

    #[test]
    fn locates_every_symbol() {
        let grid = KeySquare::build("SUPERSPY");
        assert_eq!(
            grid.locate('S').expect("S is in the grid"),
            Position { row: 0, col: 0 }
        );
        assert_eq!(
            grid.locate('Z').expect("Z is in the grid"),
            Position { row: 4, col: 4 }
        );
        for symbol in ALPHABET.chars() {
            let position = grid.locate(symbol).expect("all 25 symbols present");
            assert_eq!(grid.symbol_at(position), symbol);
        }
    }

    #[test]
    fn merged_letter_is_not_locatable() {
        let grid = KeySquare::build("SUPERSPY");
        let err = grid.locate('J').unwrap_err();
        assert!(matches!(err, CipherError::SymbolNotInGrid { symbol: 'J' }));
    }
}
