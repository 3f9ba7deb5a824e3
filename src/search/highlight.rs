//! Match highlighting.
//!
//! Terms are matched as literal, case-insensitive substrings and wrapped in
//! an emphasis element (`<mark>` by default).

use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SiteError;

pub const DEFAULT_TAG: &str = "mark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// Apply terms one after another, each over the previous output.
    /// Overlapping terms may nest or double-wrap.
    #[default]
    Sequential,
    /// Wrap all terms in one pass; wrappers never nest.
    SinglePass,
}

impl FromStr for HighlightMode {
    type Err = SiteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "single_pass" | "single-pass" | "singlepass" => Ok(Self::SinglePass),
            _ => Err(SiteError::Config(format!(
                "invalid highlight mode {value} (expected sequential|single_pass)"
            ))),
        }
    }
}

impl fmt::Display for HighlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::SinglePass => f.write_str("single_pass"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    mode: HighlightMode,
    tag: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(HighlightMode::default(), DEFAULT_TAG)
    }
}

impl Highlighter {
    #[must_use]
    pub fn new(mode: HighlightMode, tag: impl Into<String>) -> Self {
        Self {
            mode,
            tag: tag.into(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> HighlightMode {
        self.mode
    }

    /// Wrap every occurrence of every term. Empty text yields empty output.
    #[must_use]
    pub fn highlight(&self, text: &str, terms: &[String]) -> String {
        self.highlight_with(text, terms, |matched| self.wrap_tag(matched))
    }

    /// Like [`Highlighter::highlight`] but with a caller-supplied wrapper,
    /// used for non-markup output such as terminal colors.
    pub fn highlight_with<F>(&self, text: &str, terms: &[String], wrap: F) -> String
    where
        F: Fn(&str) -> String,
    {
        if text.is_empty() {
            return String::new();
        }
        match self.mode {
            HighlightMode::Sequential => sequential(text, terms, &wrap),
            HighlightMode::SinglePass => single_pass(text, terms, &wrap),
        }
    }

    /// Single-pass highlighting over the raw text, with every unmatched run
    /// passed through `plain` and every match through `wrap`.
    ///
    /// Matching never sees transformed output, so `plain` and `wrap` may
    /// emit escapes or control sequences without affecting later matches.
    /// The mode is ignored.
    pub fn highlight_segments<P, W>(&self, text: &str, terms: &[String], plain: P, wrap: W) -> String
    where
        P: Fn(&str) -> String,
        W: Fn(&str) -> String,
    {
        let Some(re) = alternation(terms) else {
            return plain(text);
        };

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for found in re.find_iter(text) {
            out.push_str(&plain(&text[last..found.start()]));
            out.push_str(&wrap(found.as_str()));
            last = found.end();
        }
        out.push_str(&plain(&text[last..]));
        out
    }

    /// Wrap `matched` in this highlighter's element.
    #[must_use]
    pub fn wrap_tag(&self, matched: &str) -> String {
        format!("<{tag}>{matched}</{tag}>", tag = self.tag)
    }
}

fn sequential(text: &str, terms: &[String], wrap: &dyn Fn(&str) -> String) -> String {
    let mut out = text.to_string();
    for term in terms.iter().filter(|term| !term.is_empty()) {
        if let Some(re) = literal_regex(&regex::escape(term)) {
            out = wrap_all(&re, &out, wrap);
        }
    }
    out
}

fn single_pass(text: &str, terms: &[String], wrap: &dyn Fn(&str) -> String) -> String {
    match alternation(terms) {
        Some(re) => wrap_all(&re, text, wrap),
        None => text.to_string(),
    }
}

/// One case-insensitive regex matching any non-empty term, longest first.
fn alternation(terms: &[String]) -> Option<Regex> {
    let mut literals: Vec<&str> = terms
        .iter()
        .map(String::as_str)
        .filter(|term| !term.is_empty())
        .collect();
    if literals.is_empty() {
        return None;
    }
    // Longest first so the alternation prefers the widest match.
    literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    literals.dedup();

    let pattern = literals
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    literal_regex(&pattern)
}

fn wrap_all(re: &Regex, text: &str, wrap: &dyn Fn(&str) -> String) -> String {
    re.replace_all(text, |caps: &Captures| wrap(&caps[0])).into_owned()
}

/// Sequential highlighting with the default `<mark>` wrapper.
#[must_use]
pub fn highlight(text: &str, terms: &[String]) -> String {
    Highlighter::default().highlight(text, terms)
}

fn literal_regex(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(err) => {
            debug!(error = %err, "skipping unhighlightable term");
            None
        }
    }
}
