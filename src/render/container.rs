//! Results containers.
//!
//! A container is the one place rendered output goes. Each render replaces
//! its entire contents; there is no incremental update.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SiteError};

pub trait ResultsContainer {
    /// Replace everything in the container with `markup`.
    fn replace_contents(&mut self, markup: &str) -> Result<()>;
}

impl<C: ResultsContainer + ?Sized> ResultsContainer for Box<C> {
    fn replace_contents(&mut self, markup: &str) -> Result<()> {
        (**self).replace_contents(markup)
    }
}

/// Prints every render to stdout.
#[derive(Debug, Default)]
pub struct StdoutContainer;

impl ResultsContainer for StdoutContainer {
    fn replace_contents(&mut self, markup: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{markup}")
            .and_then(|()| stdout.flush())
            .map_err(|err| SiteError::Output(format!("write stdout: {err}")))
    }
}

/// Overwrites a file on every render.
#[derive(Debug)]
pub struct FileContainer {
    path: PathBuf,
}

impl FileContainer {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultsContainer for FileContainer {
    fn replace_contents(&mut self, markup: &str) -> Result<()> {
        std::fs::write(&self.path, markup)
            .map_err(|err| SiteError::Output(format!("write {}: {err}", self.path.display())))
    }
}

/// Keeps the latest contents in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryContainer {
    contents: Option<String>,
    renders: usize,
}

impl MemoryContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, `None` until the first render.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    #[must_use]
    pub const fn renders(&self) -> usize {
        self.renders
    }
}

impl ResultsContainer for MemoryContainer {
    fn replace_contents(&mut self, markup: &str) -> Result<()> {
        self.contents = Some(markup.to_string());
        self.renders += 1;
        Ok(())
    }
}
