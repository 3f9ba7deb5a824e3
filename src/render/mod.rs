//! Results rendering.
//!
//! HTML is the canonical format and reproduces the search page markup. JSON
//! and plain text are provided for scripts and terminals.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Config, RenderConfig};
use crate::error::SiteError;
use crate::search::{Highlighter, ScoredEntry};

pub mod container;
pub mod html;
pub mod json;
pub mod plain;

pub use container::{FileContainer, MemoryContainer, ResultsContainer, StdoutContainer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Plain,
}

impl FromStr for OutputFormat {
    type Err = SiteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "plain" | "text" => Ok(Self::Plain),
            _ => Err(SiteError::Config(format!(
                "invalid output format {value} (expected html|json|plain)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Json => f.write_str("json"),
            Self::Plain => f.write_str("plain"),
        }
    }
}

/// Fixed messages shown instead of a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// No terms typed yet.
    Prompt,
    /// Terms typed, nothing matched.
    NoMatches,
    /// The index failed to load.
    Unavailable,
}

impl Notice {
    #[must_use]
    pub const fn status(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::NoMatches => "no_matches",
            Self::Unavailable => "index_unavailable",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    highlighter: Highlighter,
    options: RenderConfig,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OutputFormat::Html, Highlighter::default(), RenderConfig::default())
    }
}

impl Renderer {
    #[must_use]
    pub const fn new(format: OutputFormat, highlighter: Highlighter, options: RenderConfig) -> Self {
        Self {
            format,
            highlighter,
            options,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.render.format,
            Highlighter::new(config.highlight.mode, config.highlight.tag.clone()),
            config.render.clone(),
        )
    }

    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    #[must_use]
    pub const fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    #[must_use]
    pub const fn options(&self) -> &RenderConfig {
        &self.options
    }

    /// Render a ranked result list for the given terms.
    ///
    /// An empty term list always renders the prompt, whatever the entries.
    #[must_use]
    pub fn render(&self, ranked: &[ScoredEntry<'_>], terms: &[String]) -> String {
        if terms.is_empty() {
            return self.notice(Notice::Prompt, terms);
        }
        if ranked.is_empty() {
            return self.notice(Notice::NoMatches, terms);
        }

        debug!(format = %self.format, results = ranked.len(), "rendering results");
        match self.format {
            OutputFormat::Html => html::results(self, ranked, terms),
            OutputFormat::Json => json::results(self, ranked, terms),
            OutputFormat::Plain => plain::results(self, ranked, terms),
        }
    }

    /// Render the static "index not found" message.
    #[must_use]
    pub fn render_unavailable(&self) -> String {
        self.notice(Notice::Unavailable, &[])
    }

    #[must_use]
    pub fn notice(&self, notice: Notice, terms: &[String]) -> String {
        let message = self.message(notice);
        match self.format {
            OutputFormat::Html => html::notice(message),
            OutputFormat::Json => json::notice(notice, message, terms),
            OutputFormat::Plain => plain::notice(message),
        }
    }

    fn message(&self, notice: Notice) -> &str {
        match notice {
            Notice::Prompt => &self.options.prompt_message,
            Notice::NoMatches => &self.options.no_matches_message,
            Notice::Unavailable => &self.options.unavailable_message,
        }
    }

    /// Snippet source for an entry, honoring the configured length.
    pub(crate) fn snippet_source(&self, ranked: &ScoredEntry<'_>) -> String {
        ranked.entry.snippet_source(self.options.snippet_chars)
    }
}
