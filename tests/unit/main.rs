//! Unit test suite entry point.

mod config_tests;
