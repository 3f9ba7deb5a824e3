//! Additive substring scorer.
//!
//! Each term is checked independently against the lowercased fields of an
//! entry; contributions add up with no cap or normalization. This is a linear
//! scan by construction, there is no inverted index behind it.

use chrono::{DateTime, Duration, Utc};

use crate::config::ScoringConfig;
use crate::index::Entry;

/// Per-field score contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub title: u32,
    pub summary: u32,
    pub content: u32,
    /// Added at most once per term, however many tags match.
    pub tags: u32,
    pub recency_bonus: u32,
    pub recency_days: i64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            title: 3,
            summary: 2,
            content: 1,
            tags: 2,
            recency_bonus: 1,
            recency_days: 60,
        }
    }
}

impl From<&ScoringConfig> for Weights {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            title: config.title,
            summary: config.summary,
            content: config.content,
            tags: config.tags,
            recency_bonus: config.recency_bonus,
            recency_days: config.recency_days,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: Weights,
}

impl Scorer {
    #[must_use]
    pub const fn new(weights: Weights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Score one entry against a term list at time `now`.
    ///
    /// An empty term list scores 0. Otherwise the recency bonus is added once
    /// when `date_iso` is less than `recency_days` before `now`, whether or not
    /// any term matched. Unparseable dates never earn the bonus. The total
    /// saturates at `u32::MAX`.
    #[must_use]
    pub fn score(&self, entry: &Entry, terms: &[String], now: DateTime<Utc>) -> u32 {
        if terms.is_empty() {
            return 0;
        }

        let title = entry.title.to_lowercase();
        let summary = entry.summary.to_lowercase();
        let content = entry.content.to_lowercase();
        let tags: Vec<String> = entry.tags.iter().map(|tag| tag.to_lowercase()).collect();

        let mut score = 0u32;
        for term in terms {
            if title.contains(term.as_str()) {
                score = score.saturating_add(self.weights.title);
            }
            if summary.contains(term.as_str()) {
                score = score.saturating_add(self.weights.summary);
            }
            if content.contains(term.as_str()) {
                score = score.saturating_add(self.weights.content);
            }
            if tags.iter().any(|tag| tag.contains(term.as_str())) {
                score = score.saturating_add(self.weights.tags);
            }
        }

        if self.is_recent(entry, now) {
            score = score.saturating_add(self.weights.recency_bonus);
        }
        score
    }

    fn is_recent(&self, entry: &Entry, now: DateTime<Utc>) -> bool {
        let window = Duration::try_days(self.weights.recency_days).unwrap_or(Duration::MAX);
        entry
            .published_at()
            .is_some_and(|published| now - published < window)
    }
}
