//! Breadth-first ladder search.
//!
//! The engine explores the implicit graph whose vertices are tokens and whose
//! edges connect tokens at Hamming distance 1, admitting intermediate hops
//! through the lexicon. FIFO frontier discipline guarantees that the first
//! contact with the target token happens at minimum depth, so the search
//! returns as soon as any candidate equals the target rather than finishing
//! the current level.
//!
//! Instead of storing a full path snapshot in every frontier entry, the
//! engine records each enqueued token's predecessor in a parent-pointer map
//! and reconstructs the path once, backward from the match. Memory stays
//! O(V) in the number of tokens ever enqueued.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{HashigoError, Result};
use crate::ladder::alphabet::Alphabet;
use crate::ladder::lexicon::{Lexicon, WorkingLexicon};
use crate::ladder::neighbors::substitutions;

/// Configuration for ladder search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Alphabet used for substitutions. Its symbol order, combined with
    /// position-major generation, fixes which of several equally short
    /// ladders is returned.
    pub alphabet: Alphabet,
}

/// How a search run terminated.
enum Termination {
    /// The target was produced as a candidate; the predecessor map contains
    /// a complete chain from target back to start.
    Found,
    /// The frontier drained without producing the target.
    Exhausted,
}

/// Breadth-first shortest-ladder searcher.
///
/// A searcher is cheap to construct, holds no per-call state, and may be
/// shared freely across threads; each call owns its frontier and visited
/// set, and the lexicon is only read.
#[derive(Debug, Clone, Default)]
pub struct LadderSearcher {
    config: SearchConfig,
}

impl LadderSearcher {
    /// Create a searcher over the lowercase alphabet.
    pub fn new() -> Self {
        LadderSearcher {
            config: SearchConfig::default(),
        }
    }

    /// Create a searcher with a custom configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        LadderSearcher { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the shortest ladder from `start` to `end`.
    ///
    /// Returns the full token sequence including both endpoints, or an empty
    /// vector when no ladder exists. If `start == end` the result is the
    /// single-element ladder `[start]` regardless of lexicon membership.
    pub fn search(&self, start: &str, end: &str, lexicon: &Lexicon) -> Vec<String> {
        match self.run(start, end, lexicon, None) {
            Ok(path) => path,
            // Unreachable without a cancellation flag.
            Err(_) => Vec::new(),
        }
    }

    /// Find the shortest ladder, checking a cancellation flag once per
    /// dequeued token.
    ///
    /// # Errors
    ///
    /// Returns [`HashigoError::OperationCancelled`] if the flag is observed
    /// set. Cancellation is distinct from "no ladder exists", which is still
    /// reported as `Ok` with an empty vector.
    pub fn search_with_cancel(
        &self,
        start: &str,
        end: &str,
        lexicon: &Lexicon,
        cancel: &AtomicBool,
    ) -> Result<Vec<String>> {
        self.run(start, end, lexicon, Some(cancel))
    }

    fn run(
        &self,
        start: &str,
        end: &str,
        lexicon: &Lexicon,
        cancel: Option<&AtomicBool>,
    ) -> Result<Vec<String>> {
        // Zero-edit ladder, valid even when `end` is not a lexicon member.
        if start == end {
            return Ok(vec![start.to_string()]);
        }

        // The target must be admissible as the final hop; if it is not,
        // no expansion can ever produce a valid ladder.
        if !lexicon.contains(end) {
            return Ok(Vec::new());
        }

        let working = lexicon.with_start(start);

        let mut frontier: VecDeque<String> = VecDeque::new();
        let mut predecessors: AHashMap<String, String> = AHashMap::new();
        frontier.push_back(start.to_string());

        let termination =
            self.expand(start, end, &working, &mut frontier, &mut predecessors, cancel)?;

        match termination {
            Termination::Found => Ok(reconstruct_path(start, end, &predecessors)),
            Termination::Exhausted => Ok(Vec::new()),
        }
    }

    fn expand(
        &self,
        start: &str,
        end: &str,
        working: &WorkingLexicon<'_>,
        frontier: &mut VecDeque<String>,
        predecessors: &mut AHashMap<String, String>,
        cancel: Option<&AtomicBool>,
    ) -> Result<Termination> {
        while let Some(current) = frontier.pop_front() {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(HashigoError::cancelled("ladder search aborted"));
                }
            }

            for candidate in substitutions(&current, &self.config.alphabet) {
                if candidate == end {
                    predecessors.insert(candidate, current.clone());
                    return Ok(Termination::Found);
                }

                let visited = candidate == start || predecessors.contains_key(&candidate);
                if !visited && working.contains(&candidate) {
                    predecessors.insert(candidate.clone(), current.clone());
                    frontier.push_back(candidate);
                }
            }
        }

        Ok(Termination::Exhausted)
    }
}

/// Walk the predecessor chain backward from `end` to `start` and return the
/// ladder in forward order.
fn reconstruct_path(
    start: &str,
    end: &str,
    predecessors: &AHashMap<String, String>,
) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        match predecessors.get(current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            // A found termination always leaves a complete chain.
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Find the shortest ladder from `start` to `end` over the lowercase
/// alphabet.
///
/// Convenience entry point that builds a [`Lexicon`] from `words` and runs a
/// default [`LadderSearcher`]. Returns the full token sequence, or an empty
/// vector when no ladder exists.
pub fn shortest_ladder<I>(start: &str, end: &str, words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let lexicon = Lexicon::from_words(words);
    LadderSearcher::new().search(start, end, &lexicon)
}
