//! Fixed cipher parameters shared by every component. The values are
//! centralized so the merge rule and filler never drift between the keyword
//! path and the ciphertext path.

/// The 25-letter Playfair alphabet in canonical order.
/// - `J` is absent: the classical scheme folds it into `I` to fit a 5×5 grid
/// - every grid is this sequence reordered by the keyword, never a subset
pub const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// The letter removed by the merge. Every occurrence in keyword or ciphertext
/// becomes [`MERGE_TARGET`] before any other processing.
pub const MERGED_LETTER: char = 'J';

/// The letter that absorbs [`MERGED_LETTER`].
pub const MERGE_TARGET: char = 'I';

/// Padding letter inserted between doubled symbols and after a trailing odd
/// symbol. Also the letter stripped from the final plaintext, so a genuine
/// plaintext `X` is lost; that is the classical scheme's accepted limitation.
pub const FILLER: char = 'X';

/// Side length of the key square.
pub const GRID_SIZE: usize = 5;

/// Uppercases a letter and applies the J→I merge. Callers are responsible for
/// filtering out non-letters first.
pub fn merge_symbol(c: char) -> char {
    let upper = c.to_ascii_uppercase();
    if upper == MERGED_LETTER {
        MERGE_TARGET
    } else {
        upper
    }
}

#[cfg(test)]
mod tests {
    use super::{merge_symbol, ALPHABET, GRID_SIZE, MERGED_LETTER};

    #[test]
    fn alphabet_has_25_distinct_symbols_without_the_merged_letter() {
        assert_eq!(ALPHABET.len(), GRID_SIZE * GRID_SIZE);
        assert!(!ALPHABET.contains(MERGED_LETTER));
        let mut seen = std::collections::HashSet::new();
        assert!(ALPHABET.chars().all(|c| seen.insert(c)));
    }

    #[test]
    fn merges_and_uppercases() {
        assert_eq!(merge_symbol('j'), 'I');
        assert_eq!(merge_symbol('J'), 'I');
        assert_eq!(merge_symbol('a'), 'A');
        assert_eq!(merge_symbol('Z'), 'Z');
    }
}
