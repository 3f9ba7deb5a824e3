//! E2E test suite entry point.

mod remote_workflow;
mod search_workflow;
