//! Command line interface module
//!
//! This module provides the entry point for parsing command-line arguments and running the cleanup.
//! It includes argument parsing, environment overrides, and the runner that maps results to exit codes.

pub mod args;
pub mod runner;

pub use args::Args;
pub use runner::{RunStatus, Runner};
