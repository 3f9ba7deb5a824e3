use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::index::{IndexLoader, IndexSource};
use crate::render::{OutputFormat, Renderer};
use crate::search::{Scorer, Weights};

pub struct AppContext {
    /// Directory searched for the project config file.
    pub project_root: PathBuf,
    pub config: Config,
    pub robot: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;

        Ok(Self {
            project_root,
            config,
            robot: cli.robot,
            verbosity: cli.verbose,
        })
    }

    /// Build a context from an already resolved config.
    #[must_use]
    pub const fn with_config(config: Config, project_root: PathBuf, robot: bool) -> Self {
        Self {
            project_root,
            config,
            robot,
            verbosity: 0,
        }
    }

    /// Output format: an explicit flag wins, then robot mode, then config.
    #[must_use]
    pub const fn output_format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        match explicit {
            Some(format) => format,
            None if self.robot => OutputFormat::Json,
            None => self.config.render.format,
        }
    }

    /// Index source from config, with per-command overrides.
    pub fn index_source(&self, site: Option<&str>, path: Option<&str>) -> Result<IndexSource> {
        IndexSource::resolve(
            site.unwrap_or(&self.config.index.site),
            path.unwrap_or(&self.config.index.path),
        )
    }

    pub fn loader(&self, site: Option<&str>, path: Option<&str>) -> Result<IndexLoader> {
        IndexLoader::new(self.index_source(site, path)?)
    }

    #[must_use]
    pub fn scorer(&self) -> Scorer {
        Scorer::new(Weights::from(&self.config.scoring))
    }

    #[must_use]
    pub fn renderer(&self, format: Option<OutputFormat>) -> Renderer {
        let mut config = self.config.clone();
        config.render.format = self.output_format(format);
        Renderer::from_config(&config)
    }
}
