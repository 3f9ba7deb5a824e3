//! Search controller.
//!
//! Loads the index once, then runs the full search cycle on every input
//! event. There are two outcomes at startup (index ready or unavailable) and
//! no state carried between cycles beyond the loaded index.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, error};

use crate::error::Result;
use crate::index::{Index, IndexLoader};
use crate::render::{Renderer, ResultsContainer};
use crate::search::{Scorer, rank, tokenize};

/// Result of starting a controller.
pub enum Startup<C> {
    Ready(Controller<C>),
    /// The index failed to load; the container already shows the message.
    Unavailable(C),
}

impl<C> Startup<C> {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

pub struct Controller<C> {
    index: Index,
    scorer: Scorer,
    renderer: Renderer,
    container: C,
}

impl<C: ResultsContainer> Controller<C> {
    /// Load the index and take ownership of the container.
    ///
    /// A load failure is logged and rendered as the unavailable message; it
    /// is never returned as an error. `Err` means the container itself could
    /// not be written.
    pub fn start(
        loader: &IndexLoader,
        scorer: Scorer,
        renderer: Renderer,
        mut container: C,
    ) -> Result<Startup<C>> {
        match loader.load() {
            Ok(index) => Ok(Startup::Ready(Self::with_index(
                index, scorer, renderer, container,
            ))),
            Err(err) => {
                error!(location = %loader.source(), error = %err, "search index unavailable");
                container.replace_contents(&renderer.render_unavailable())?;
                Ok(Startup::Unavailable(container))
            }
        }
    }

    /// Build a controller around an index that is already loaded.
    #[must_use]
    pub const fn with_index(index: Index, scorer: Scorer, renderer: Renderer, container: C) -> Self {
        Self {
            index,
            scorer,
            renderer,
            container,
        }
    }

    #[must_use]
    pub const fn index(&self) -> &Index {
        &self.index
    }

    #[must_use]
    pub const fn container(&self) -> &C {
        &self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }

    /// Run one search cycle for the current value of the input.
    ///
    /// Returns the number of entries rendered (0 for the prompt and the
    /// no-matches message).
    pub fn handle_input(&mut self, raw: &str) -> Result<usize> {
        self.handle_input_at(raw, Utc::now())
    }

    pub fn handle_input_at(&mut self, raw: &str, now: DateTime<Utc>) -> Result<usize> {
        let start = Instant::now();
        let terms = tokenize(raw);
        let ranked = rank(&self.index, &terms, &self.scorer, now);
        let markup = self.renderer.render(&ranked, &terms);
        self.container.replace_contents(&markup)?;

        let shown = if terms.is_empty() { 0 } else { ranked.len() };
        debug!(
            terms = terms.len(),
            matches = shown,
            duration_us = start.elapsed().as_micros() as u64,
            "search cycle"
        );
        Ok(shown)
    }

    /// Render once with the initial input value, then once per event.
    ///
    /// Each event carries the full current value of the input. Events are
    /// processed as they arrive, without coalescing.
    pub fn bind<I>(&mut self, initial: &str, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        self.handle_input(initial)?;
        for event in events {
            self.handle_input(&event?)?;
        }
        Ok(())
    }
}
