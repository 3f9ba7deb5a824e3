use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::index::DEFAULT_INDEX_PATH;
use crate::render::OutputFormat;
use crate::search::HighlightMode;
use crate::search::highlight::DEFAULT_TAG;

/// Project-level config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "sitesearch.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SITESEARCH_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Parse a full config document, filling gaps with defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| SiteError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|err| SiteError::Config(format!("serialize config: {err}")))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("sitesearch/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SiteError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SiteError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.index {
            self.index.merge(patch);
        }
        if let Some(patch) = patch.scoring {
            self.scoring.merge(patch);
        }
        if let Some(patch) = patch.highlight {
            self.highlight.merge(patch);
        }
        if let Some(patch) = patch.render {
            self.render.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("SITESEARCH_SITE") {
            self.index.site = value;
        }
        if let Some(value) = env_string("SITESEARCH_INDEX_PATH") {
            self.index.path = value;
        }

        if let Some(value) = env_i64("SITESEARCH_RECENCY_DAYS")? {
            self.scoring.recency_days = value;
        }

        if let Some(value) = env_string("SITESEARCH_HIGHLIGHT_MODE") {
            self.highlight.mode = value.parse()?;
        }
        if let Some(value) = env_string("SITESEARCH_HIGHLIGHT_TAG") {
            self.highlight.tag = value;
        }

        if let Some(value) = env_string("SITESEARCH_FORMAT") {
            self.render.format = value.parse()?;
        }
        if let Some(value) = env_usize("SITESEARCH_SNIPPET_CHARS")? {
            self.render.snippet_chars = value;
        }
        if let Some(value) = env_bool("SITESEARCH_ESCAPE_HTML") {
            self.render.escape_html = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Site root: an `http(s)://` base URL or a local directory.
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub path: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            site: ".".to_string(),
            path: DEFAULT_INDEX_PATH.to_string(),
        }
    }
}

impl IndexConfig {
    fn merge(&mut self, patch: IndexPatch) {
        if let Some(value) = patch.site {
            self.site = value;
        }
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub title: u32,
    #[serde(default)]
    pub summary: u32,
    #[serde(default)]
    pub content: u32,
    #[serde(default)]
    pub tags: u32,
    #[serde(default)]
    pub recency_bonus: u32,
    #[serde(default)]
    pub recency_days: i64,
}

impl Default for ScoringConfig {
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

impl ScoringConfig {
    fn merge(&mut self, patch: ScoringPatch) {
        if let Some(value) = patch.title {
            self.title = value;
        }
        if let Some(value) = patch.summary {
            self.summary = value;
        }
        if let Some(value) = patch.content {
            self.content = value;
        }
        if let Some(value) = patch.tags {
            self.tags = value;
        }
        if let Some(value) = patch.recency_bonus {
            self.recency_bonus = value;
        }
        if let Some(value) = patch.recency_days {
            self.recency_days = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default)]
    pub mode: HighlightMode,
    #[serde(default)]
    pub tag: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            mode: HighlightMode::Sequential,
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl HighlightConfig {
    fn merge(&mut self, patch: HighlightPatch) {
        if let Some(value) = patch.mode {
            self.mode = value;
        }
        if let Some(value) = patch.tag {
            self.tag = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub snippet_chars: usize,
    /// Escape entry text before it is placed in markup. Off by default: the
    /// index is trusted site content and is inserted verbatim.
    #[serde(default)]
    pub escape_html: bool,
    #[serde(default)]
    pub prompt_message: String,
    #[serde(default)]
    pub no_matches_message: String,
    #[serde(default)]
    pub unavailable_message: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            snippet_chars: 200,
            escape_html: false,
            prompt_message: "Type to search posts…".to_string(),
            no_matches_message: "No matches.".to_string(),
            unavailable_message: "Search index not found. Add /search_index.json.".to_string(),
        }
    }
}

impl RenderConfig {
    fn merge(&mut self, patch: RenderPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.snippet_chars {
            self.snippet_chars = value;
        }
        if let Some(value) = patch.escape_html {
            self.escape_html = value;
        }
        if let Some(value) = patch.prompt_message {
            self.prompt_message = value;
        }
        if let Some(value) = patch.no_matches_message {
            self.no_matches_message = value;
        }
        if let Some(value) = patch.unavailable_message {
            self.unavailable_message = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub index: Option<IndexPatch>,
    pub scoring: Option<ScoringPatch>,
    pub highlight: Option<HighlightPatch>,
    pub render: Option<RenderPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct IndexPatch {
    pub site: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ScoringPatch {
    pub title: Option<u32>,
    pub summary: Option<u32>,
    pub content: Option<u32>,
    pub tags: Option<u32>,
    pub recency_bonus: Option<u32>,
    pub recency_days: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HighlightPatch {
    pub mode: Option<HighlightMode>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RenderPatch {
    pub format: Option<OutputFormat>,
    pub snippet_chars: Option<usize>,
    pub escape_html: Option<bool>,
    pub prompt_message: Option<String>,
    pub no_matches_message: Option<String>,
    pub unavailable_message: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| SiteError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_i64(key: &str) -> Result<Option<i64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|err| SiteError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
