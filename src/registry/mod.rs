//! Registry module for Docker registry interactions
//!
//! This module provides the client logic for the Docker Registry HTTP API v2 calls the
//! cleanup pipeline needs: tag listing, manifest and blob reads, and manifest deletion.
//! Every call is a single HTTP exchange; nothing is retried.

pub mod client;
pub mod operations;
pub mod repository;

pub use client::{RegistryClient, RegistryClientBuilder};
pub use operations::DeleteResponse;
pub use repository::{RepositoryRef, TagList};
