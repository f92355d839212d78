//! Lexicon management for ladder search.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;

/// An immutable, deduplicated set of tokens admissible as intermediate and
/// final hops of a ladder.
///
/// Membership queries are O(1). A `Lexicon` is never mutated after
/// construction; a search that needs the start token admitted borrows the
/// lexicon through a [`WorkingLexicon`] overlay instead of copying or
/// modifying it.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    tokens: AHashSet<String>,
}

impl Lexicon {
    /// Create a lexicon from an iterator of tokens. Duplicates collapse.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Lexicon {
            tokens: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a lexicon from a plain text file with one token per line.
    ///
    /// Lines are trimmed of surrounding whitespace; blank lines are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut tokens = AHashSet::new();
        for line in reader.lines() {
            let line = line?;
            let token = line.trim();
            if !token.is_empty() {
                tokens.insert(token.to_string());
            }
        }

        Ok(Lexicon { tokens })
    }

    /// Check if a token exists in the lexicon.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Borrow this lexicon with one extra token unioned in for the duration
    /// of a search call.
    pub fn with_start<'a>(&'a self, start: &'a str) -> WorkingLexicon<'a> {
        WorkingLexicon {
            base: self,
            start,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Lexicon::from_words(iter)
    }
}

/// A call-scoped union view over a borrowed [`Lexicon`] plus the search's
/// start token.
///
/// The working set of a ladder search must admit the start token even when
/// the caller's lexicon does not contain it. This overlay provides that union
/// without copying the set or mutating caller-owned data; it lives only as
/// long as the search call that created it.
#[derive(Debug, Clone, Copy)]
pub struct WorkingLexicon<'a> {
    base: &'a Lexicon,
    start: &'a str,
}

impl WorkingLexicon<'_> {
    /// Check if a token is admissible: either the start token or a member of
    /// the underlying lexicon.
    pub fn contains(&self, token: &str) -> bool {
        token == self.start || self.base.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_words() {
        let lexicon = Lexicon::from_words(["hot", "dot", "dog", "dot"]);
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("hot"));
        assert!(lexicon.contains("dog"));
        assert!(!lexicon.contains("cog"));
    }

    #[test]
    fn test_from_iterator() {
        let lexicon: Lexicon = ["cold", "cord"].into_iter().collect();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("cord"));
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn test_working_lexicon_unions_start() {
        let lexicon = Lexicon::from_words(["bat"]);
        let working = lexicon.with_start("cat");

        assert!(working.contains("cat"));
        assert!(working.contains("bat"));
        assert!(!working.contains("hat"));

        // The overlay never leaks into the base lexicon.
        assert!(!lexicon.contains("cat"));
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hot").unwrap();
        writeln!(temp_file, "  dot  ").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "hot").unwrap();
        temp_file.flush().unwrap();

        let lexicon = Lexicon::load_from_file(temp_file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("hot"));
        assert!(lexicon.contains("dot"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Lexicon::load_from_file("/nonexistent/lexicon.txt");
        assert!(result.is_err());
    }
}
