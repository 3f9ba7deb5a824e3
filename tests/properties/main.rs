//! Property test suite entry point.

mod highlight_tests;
mod scoring_tests;
