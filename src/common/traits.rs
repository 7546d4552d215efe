//! Common traits and interfaces
//!
//! The orchestrator only talks to the registry and to the console through these traits,
//! so it can be driven by the HTTP client in production and by in-memory doubles in tests.

use crate::error::Result;
use crate::image::manifest::{ConfigBlob, ManifestDescriptor};
use crate::lifecycle::report::LifecycleEvent;
use crate::registry::operations::DeleteResponse;
use crate::registry::repository::{RepositoryRef, TagList};
use async_trait::async_trait;

/// The four registry operations the cleanup pipeline needs
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// List every tag of the repository
    async fn list_tags(&self, repository: &RepositoryRef) -> Result<TagList>;

    /// Resolve a tag to its manifest
    async fn get_manifest(&self, repository: &RepositoryRef, tag: &str)
    -> Result<ManifestDescriptor>;

    /// Fetch the image configuration blob addressed by `digest`
    async fn get_blob(&self, repository: &RepositoryRef, digest: &str) -> Result<ConfigBlob>;

    /// Delete the manifest addressed by `digest`.
    ///
    /// An HTTP error status is returned as data; only transport failures are errors.
    async fn delete_manifest(
        &self,
        repository: &RepositoryRef,
        digest: &str,
    ) -> Result<DeleteResponse>;
}

/// Receives lifecycle events for display
pub trait ReportSink {
    fn report(&self, event: &LifecycleEvent);
}
