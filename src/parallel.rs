//! Parallel batch execution of independent ladder searches.
//!
//! A single search is fully synchronous, but independent searches share no
//! mutable state: each call owns its frontier and visited set, and the
//! lexicon is only read. Batches of queries therefore parallelize directly
//! with rayon over one shared lexicon.

use rayon::prelude::*;

use crate::error::Result;
use crate::ladder::lexicon::Lexicon;
use crate::ladder::search::LadderSearcher;

/// A single batch query: a start token and a target token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderQuery {
    /// Starting token.
    pub start: String,
    /// Target token.
    pub end: String,
}

impl LadderQuery {
    /// Create a new query.
    pub fn new<S: Into<String>, E: Into<String>>(start: S, end: E) -> Self {
        LadderQuery {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Execute a batch of ladder searches in parallel over a shared lexicon.
///
/// Results are returned in input order; each entry is the ladder for the
/// corresponding query, empty when no ladder exists. Output is identical to
/// running every query sequentially with the same searcher.
pub fn search_batch(
    searcher: &LadderSearcher,
    queries: &[LadderQuery],
    lexicon: &Lexicon,
) -> Vec<Vec<String>> {
    queries
        .par_iter()
        .map(|query| searcher.search(&query.start, &query.end, lexicon))
        .collect()
}

/// Execute a batch of ladder searches in parallel, checking a shared
/// cancellation flag once per dequeued token in every search.
///
/// # Errors
///
/// Any search observing the flag set fails the whole batch with
/// [`crate::error::HashigoError::OperationCancelled`].
pub fn search_batch_with_cancel(
    searcher: &LadderSearcher,
    queries: &[LadderQuery],
    lexicon: &Lexicon,
    cancel: &std::sync::atomic::AtomicBool,
) -> Result<Vec<Vec<String>>> {
    queries
        .par_iter()
        .map(|query| searcher.search_with_cancel(&query.start, &query.end, lexicon, cancel))
        .collect()
}
