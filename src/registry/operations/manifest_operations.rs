//! Manifest operations for registry client
//!
//! Implements Docker Registry v2 manifest operations:
//! - Manifest download (GET /v2/{name}/manifests/{reference})
//! - Manifest deletion (DELETE /v2/{name}/manifests/{digest})

use super::read_json;
use crate::error::Result;
use crate::error::handlers::NetworkErrorHandler;
use crate::image::manifest::{DOCKER_MANIFEST_V2, ManifestDescriptor};
use crate::logging::Logger;
use crate::registry::repository::RepositoryRef;
use reqwest::{Client, StatusCode};

/// Registry answer to a manifest deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    pub status: StatusCode,
    /// Status line as reported, e.g. `202 Accepted`
    pub status_text: String,
}

impl DeleteResponse {
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            status,
            status_text: status.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[derive(Clone)]
pub struct ManifestOperations {
    client: Client,
    output: Logger,
}

impl ManifestOperations {
    pub fn new(client: Client, output: Logger) -> Self {
        Self { client, output }
    }

    /// Download a manifest, asking for Docker schema 2
    pub async fn pull_manifest(
        &self,
        repository: &RepositoryRef,
        reference: &str,
    ) -> Result<ManifestDescriptor> {
        let url = repository.manifest_url(reference);
        self.output.trace(&format!("GET {}", url));

        let request = self.client.get(&url).header("Accept", DOCKER_MANIFEST_V2);
        read_json(request, &format!("manifest fetch for {}", reference)).await
    }

    /// Delete a manifest by digest.
    ///
    /// Whatever status the registry answers with is handed back to the caller;
    /// only a failed exchange is an error.
    pub async fn delete_manifest(
        &self,
        repository: &RepositoryRef,
        digest: &str,
    ) -> Result<DeleteResponse> {
        let url = repository.manifest_url(digest);
        self.output.trace(&format!("DELETE {}", url));

        let response = self
            .client
            .delete(&url)
            .header("Accept", DOCKER_MANIFEST_V2)
            .send()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "manifest deletion"))?;

        let deleted = DeleteResponse::from_status(response.status());
        if !deleted.is_success() {
            self.output.verbose(&format!(
                "Registry refused deletion of {}: {}",
                digest, deleted.status_text
            ));
        }

        Ok(deleted)
    }
}
