//! Substitution alphabets for neighbor generation.
//!
//! An [`Alphabet`] fixes which symbols may replace a token position and, just
//! as importantly, the order in which replacements are tried. That order is
//! part of the search contract: together with FIFO frontier discipline it
//! determines which of several equally short ladders is returned.

use serde::{Deserialize, Serialize};

/// An ordered, deduplicated set of symbols used for single-character
/// substitutions.
///
/// Symbol order is first-occurrence order of the constructing iterator and is
/// never re-sorted, so callers control tie-breaking by controlling
/// construction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet of the ASCII lowercase letters `a` through `z`.
    pub fn lowercase() -> Self {
        Alphabet {
            symbols: ('a'..='z').collect(),
        }
    }

    /// Create an alphabet from arbitrary symbols.
    ///
    /// Duplicates are dropped; the first occurrence of each symbol fixes its
    /// position in the substitution order.
    pub fn from_symbols<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        let mut seen = Vec::new();
        for c in symbols {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        Alphabet { symbols: seen }
    }

    /// The symbols in substitution order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check whether a symbol belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::lowercase()
    }
}
