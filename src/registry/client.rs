// This file contains the implementation of the RegistryClient struct,
// which handles communication with the Docker registry API for inspecting
// repository tags and deleting manifests.

use crate::common::traits::RegistryApi;
use crate::error::handlers::ValidationErrorHandler;
use crate::error::{RegistryError, Result};
use crate::image::manifest::{ConfigBlob, ManifestDescriptor};
use crate::logging::Logger;
use crate::registry::operations::{
    BlobOperations, DeleteResponse, ManifestOperations, RepositoryOperations,
};
use crate::registry::repository::{RepositoryRef, TagList};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct RegistryClientBuilder {
    timeout: Option<u64>,
    skip_tls: bool,
    output: Logger,
}

impl RegistryClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: None,
            skip_tls: false,
            output: Logger::new(false),
        }
    }

    /// Per-request timeout in seconds; `None` keeps the transport default
    pub fn with_timeout(mut self, timeout: Option<u64>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_skip_tls(mut self, skip_tls: bool) -> Self {
        self.skip_tls = skip_tls;
        self
    }

    pub fn with_logger(mut self, output: Logger) -> Self {
        self.output = output;
        self
    }

    pub fn build(self) -> Result<RegistryClient> {
        let mut builder = Client::builder();

        if let Some(timeout) = self.timeout {
            ValidationErrorHandler::validate_timeout(timeout)?;
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        if self.skip_tls {
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        let client = builder
            .build()
            .map_err(|e| RegistryError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(RegistryClient {
            repository_ops: RepositoryOperations::new(client.clone(), self.output.clone()),
            manifest_ops: ManifestOperations::new(client.clone(), self.output.clone()),
            blob_ops: BlobOperations::new(client, self.output),
        })
    }
}

impl Default for RegistryClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct RegistryClient {
    repository_ops: RepositoryOperations,
    manifest_ops: ManifestOperations,
    blob_ops: BlobOperations,
}

impl RegistryClient {
    pub fn builder() -> RegistryClientBuilder {
        RegistryClientBuilder::new()
    }
}

#[async_trait]
impl RegistryApi for RegistryClient {
    async fn list_tags(&self, repository: &RepositoryRef) -> Result<TagList> {
        self.repository_ops.list_tags(repository).await
    }

    async fn get_manifest(
        &self,
        repository: &RepositoryRef,
        tag: &str,
    ) -> Result<ManifestDescriptor> {
        self.manifest_ops.pull_manifest(repository, tag).await
    }

    async fn get_blob(&self, repository: &RepositoryRef, digest: &str) -> Result<ConfigBlob> {
        self.blob_ops.pull_config_blob(repository, digest).await
    }

    async fn delete_manifest(
        &self,
        repository: &RepositoryRef,
        digest: &str,
    ) -> Result<DeleteResponse> {
        self.manifest_ops.delete_manifest(repository, digest).await
    }
}
