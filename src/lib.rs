//! sitesearch - client-side full-text search over a static site's index.
//!
//! The site build publishes a JSON array of entries. This crate loads that
//! index once, then scores, ranks, highlights and renders entries for every
//! query the reader types.

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod render;
pub mod search;
pub mod test_utils;

pub use error::{Result, SiteError};
