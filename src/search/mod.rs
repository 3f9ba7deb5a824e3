//! Search pipeline: tokenize, score, filter, rank.
//!
//! Every query re-scores the whole index. Nothing is memoized between
//! queries.

use chrono::{DateTime, Utc};

use crate::index::{Entry, Index};

pub mod highlight;
pub mod scorer;
pub mod tokenizer;

pub use highlight::{HighlightMode, Highlighter, highlight};
pub use scorer::{Scorer, Weights};
pub use tokenizer::tokenize;

/// An entry paired with its score for one render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a Entry,
    pub score: u32,
}

/// Score every entry and return the visible ones, best first.
///
/// Entries with a zero score are dropped unless the term list is empty, in
/// which case everything passes (the renderer shows a prompt instead). The
/// sort is stable, so equal scores keep index order.
#[must_use]
pub fn rank<'a>(
    index: &'a Index,
    terms: &[String],
    scorer: &Scorer,
    now: DateTime<Utc>,
) -> Vec<ScoredEntry<'a>> {
    let mut scored: Vec<ScoredEntry<'a>> = index
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: scorer.score(entry, terms, now),
        })
        .filter(|scored| scored.score > 0 || terms.is_empty())
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
