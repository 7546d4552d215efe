//! Blob operations for registry client
//!
//! Implements the Docker Registry v2 blob read used to resolve image configuration:
//! - Config blob download (GET /v2/{name}/blobs/{digest})

use super::read_json;
use crate::error::Result;
use crate::image::manifest::{ConfigBlob, DOCKER_MANIFEST_V2};
use crate::logging::Logger;
use crate::registry::repository::RepositoryRef;
use reqwest::Client;

#[derive(Clone)]
pub struct BlobOperations {
    client: Client,
    output: Logger,
}

impl BlobOperations {
    pub fn new(client: Client, output: Logger) -> Self {
        Self { client, output }
    }

    /// Download and decode an image configuration blob.
    ///
    /// `digest` goes into the path as-is (`sha256:<hex>`).
    pub async fn pull_config_blob(
        &self,
        repository: &RepositoryRef,
        digest: &str,
    ) -> Result<ConfigBlob> {
        let url = repository.blob_url(digest);
        self.output.trace(&format!("GET {}", url));

        let request = self.client.get(&url).header("Accept", DOCKER_MANIFEST_V2);
        read_json(request, &format!("config blob fetch for {}", digest)).await
    }
}
