//! Search index data model.
//!
//! The index is a flat JSON array of entries produced by the site build. It is
//! loaded once and never mutated; entries have no identity beyond position.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SiteError, UnavailableReason};

pub mod loader;

pub use loader::IndexLoader;

/// Default location of the index document relative to the site root.
pub const DEFAULT_INDEX_PATH: &str = "/search_index.json";

/// One searchable record.
///
/// Every field is present after deserialization: absent or `null` values
/// become empty strings or an empty tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Human-readable date, shown as-is.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// ISO-8601 date used for the recency bonus.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_iso: String,
}

impl Entry {
    /// Parsed `date_iso`, or `None` when absent or unparseable.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_date_iso(&self.date_iso)
    }

    /// Date to display: `date`, then `date_iso`, else empty.
    #[must_use]
    pub fn display_date(&self) -> &str {
        if self.date.is_empty() {
            &self.date_iso
        } else {
            &self.date
        }
    }

    /// Snippet source text: the summary, otherwise the first `max_chars`
    /// characters of the content.
    #[must_use]
    pub fn snippet_source(&self, max_chars: usize) -> String {
        if self.summary.is_empty() {
            self.content.chars().take(max_chars).collect()
        } else {
            self.summary.clone()
        }
    }
}

/// The full ordered set of entries for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: Vec<Entry>,
}

impl Index {
    #[must_use]
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Parse an index document. The top-level value must be an array.
    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        let entries: Vec<Entry> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Where the index document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    Remote(Url),
    Local(PathBuf),
}

impl IndexSource {
    /// Resolve the index path against a site root.
    ///
    /// `site` is either an `http(s)://` base URL or a local directory holding
    /// the built site. URLs use join semantics, so an absolute `path` replaces
    /// the base path as a browser would.
    pub fn resolve(site: &str, path: &str) -> Result<Self> {
        let site = site.trim();
        if site.starts_with("http://") || site.starts_with("https://") {
            let base = Url::parse(site)
                .map_err(|err| SiteError::Config(format!("invalid site url {site}: {err}")))?;
            let url = base.join(path).map_err(|err| {
                SiteError::Config(format!("invalid index path {path} for {site}: {err}"))
            })?;
            return Ok(Self::Remote(url));
        }

        let root = if site.is_empty() { "." } else { site };
        Ok(Self::Local(
            Path::new(root).join(path.trim_start_matches('/')),
        ))
    }

    #[must_use]
    pub fn location(&self) -> String {
        self.to_string()
    }

    pub(crate) fn unavailable(&self, reason: UnavailableReason) -> SiteError {
        SiteError::unavailable(self.location(), reason)
    }
}

impl fmt::Display for IndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse an ISO-8601 date or date-time.
///
/// Accepts RFC 3339, a naive date-time or a bare date (midnight). Values
/// without an offset are taken as UTC, not the host's local time as a
/// browser `new Date(...)` would, so the recency window can shift by up to
/// the local UTC offset compared with the search page. Anything else yields
/// `None`.
#[must_use]
pub fn parse_date_iso(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
