//! Shortest-transformation-path search for Hashigo.
//!
//! This module implements the word-ladder core: an immutable [`Lexicon`]
//! acting as the membership oracle, a deterministic single-substitution
//! neighbor generator, and a breadth-first [`LadderSearcher`] that composes
//! the two into a shortest-path search over the implicit Hamming-distance-1
//! graph.

pub mod alphabet;
pub mod lexicon;
pub mod neighbors;
pub mod search;

// Re-export commonly used types
pub use alphabet::*;
pub use lexicon::*;
pub use neighbors::*;
pub use search::*;
