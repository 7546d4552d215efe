//! Registry Cleanup Library
//!
//! This file serves as the library root for the registry-cleanup crate,
//! organizing and exposing the modules that inspect a registry repository,
//! classify its tags and delete the expired ones.

pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod image;
pub mod lifecycle;
pub mod logging;
pub mod registry;

pub use common::traits::{RegistryApi, ReportSink};
pub use config::{CleanupConfig, RunMode};
pub use error::{RegistryError, Result};
pub use lifecycle::{LifecycleOrchestrator, RunOutcome, SweepReport};
pub use logging::Logger;
pub use registry::{RegistryClient, RepositoryRef};
