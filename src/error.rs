//! Error types for sitesearch.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    /// The search index could not be retrieved or parsed.
    ///
    /// This is the only failure the search pipeline distinguishes; callers
    /// turn it into the static "index not found" message.
    #[error("search index unavailable at {location}: {reason}")]
    IndexUnavailable {
        location: String,
        reason: UnavailableReason,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("output error: {0}")]
    Output(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why an index load failed.
#[derive(Debug, Error)]
pub enum UnavailableReason {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("malformed index: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl SiteError {
    pub(crate) fn unavailable(location: impl Into<String>, reason: UnavailableReason) -> Self {
        Self::IndexUnavailable {
            location: location.into(),
            reason,
        }
    }

    /// Process exit status: 2 for configuration problems, 1 otherwise.
    ///
    /// An unavailable index never reaches here from the commands, which
    /// render it as a message instead.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Config(_) | Self::MissingConfig(_) => 2,
            _ => 1,
        }
    }

    /// Stable machine-readable code for robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IndexUnavailable { .. } => "index_unavailable",
            Self::Config(_) | Self::MissingConfig(_) => "config",
            Self::Output(_) => "output",
            Self::Io(_) => "io",
        }
    }
}
