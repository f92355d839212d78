//! # Hashigo
//!
//! A small, fast word-ladder search library for Rust.
//!
//! Given a start token, a target token, and a lexicon of valid intermediate
//! tokens, Hashigo finds the shortest sequence of single-character
//! substitutions that transforms the start into the target, where every hop
//! after the first must be a lexicon member.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Breadth-first search with parent-pointer path reconstruction
//! - Deterministic results (position-major, then alphabet-order tie-breaking)
//! - Pluggable substitution alphabets
//! - Cooperative cancellation for pathological lexicons
//! - Parallel batch execution over a shared lexicon
//!
//! ## Quick start
//!
//! ```
//! use hashigo::ladder::shortest_ladder;
//!
//! let words = ["hot", "dot", "dog", "lot", "log", "cog"];
//! let path = shortest_ladder("hit", "cog", words);
//! assert_eq!(path, vec!["hit", "hot", "dot", "dog", "cog"]);
//! ```

pub mod error;
pub mod ladder;
pub mod parallel;

pub mod prelude {
    pub use crate::error::{HashigoError, Result};
    pub use crate::ladder::alphabet::Alphabet;
    pub use crate::ladder::lexicon::Lexicon;
    pub use crate::ladder::search::{LadderSearcher, SearchConfig};
    pub use crate::ladder::shortest_ladder;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
