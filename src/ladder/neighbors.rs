//! Single-substitution neighbor generation.
//!
//! Two tokens are adjacent in the ladder graph iff they have equal length and
//! differ in exactly one position (Hamming distance 1). [`substitutions`]
//! enumerates every token adjacent to its input over a given alphabet, in a
//! fixed order: position-major, then alphabet order within each position.
//! The generator is pure; it never consults a lexicon.

use crate::ladder::alphabet::Alphabet;

/// Lazily produce every token reachable from `token` by substituting exactly
/// one character with a different alphabet symbol.
///
/// For a token of length `L` over an alphabet of `n` symbols this yields at
/// most `L * (n - 1)` candidates. The production order is deterministic and
/// is part of the search contract. An empty token has no neighbors.
pub fn substitutions<'a>(
    token: &'a str,
    alphabet: &'a Alphabet,
) -> impl Iterator<Item = String> + 'a {
    let chars: Vec<char> = token.chars().collect();
    let positions = chars.len();

    (0..positions).flat_map(move |i| {
        let chars = chars.clone();
        alphabet.symbols().iter().copied().filter_map(move |c| {
            if c == chars[i] {
                return None;
            }
            let mut candidate = chars.clone();
            candidate[i] = c;
            Some(candidate.into_iter().collect())
        })
    })
}

/// Check whether two tokens have equal length and differ in exactly one
/// position.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut differences = 0;

    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(ca), Some(cb)) => {
                if ca != cb {
                    differences += 1;
                    if differences > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return differences == 1,
            // Length mismatch, never adjacent.
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_count() {
        let alphabet = Alphabet::lowercase();
        let neighbors: Vec<String> = substitutions("cat", &alphabet).collect();
        assert_eq!(neighbors.len(), 3 * 25);
    }

    #[test]
    fn test_substitution_order_is_position_major() {
        let alphabet = Alphabet::from_symbols("abc".chars());
        let neighbors: Vec<String> = substitutions("ab", &alphabet).collect();
        assert_eq!(neighbors, vec!["bb", "cb", "aa", "ac"]);
    }

    #[test]
    fn test_all_neighbors_are_adjacent() {
        let alphabet = Alphabet::lowercase();
        for neighbor in substitutions("word", &alphabet) {
            assert!(is_adjacent("word", &neighbor), "{neighbor} not adjacent");
        }
    }

    #[test]
    fn test_never_yields_original_token() {
        let alphabet = Alphabet::lowercase();
        assert!(substitutions("dog", &alphabet).all(|n| n != "dog"));
    }

    #[test]
    fn test_empty_token_has_no_neighbors() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(substitutions("", &alphabet).count(), 0);
    }

    #[test]
    fn test_empty_alphabet_has_no_neighbors() {
        let alphabet = Alphabet::from_symbols(std::iter::empty());
        assert_eq!(substitutions("cat", &alphabet).count(), 0);
    }

    #[test]
    fn test_is_adjacent() {
        assert!(is_adjacent("cat", "bat"));
        assert!(is_adjacent("cat", "cot"));
        assert!(!is_adjacent("cat", "cat"));
        assert!(!is_adjacent("cat", "bot"));
        assert!(!is_adjacent("cat", "cats"));
        assert!(!is_adjacent("", ""));
    }

    #[test]
    fn test_determinism() {
        let alphabet = Alphabet::lowercase();
        let first: Vec<String> = substitutions("cold", &alphabet).collect();
        let second: Vec<String> = substitutions("cold", &alphabet).collect();
        assert_eq!(first, second);
    }
}
