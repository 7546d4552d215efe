//! Repository operations for registry client
//!
//! Implements Docker Registry v2 repository-level operations:
//! - Tag listing (GET /v2/{name}/tags/list)

use super::read_json;
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::repository::{RepositoryRef, TagList};
use reqwest::Client;

#[derive(Clone)]
pub struct RepositoryOperations {
    client: Client,
    output: Logger,
}

impl RepositoryOperations {
    pub fn new(client: Client, output: Logger) -> Self {
        Self { client, output }
    }

    /// List all tags in repository using Docker Registry v2 API.
    ///
    /// Only the first response is read; `Link` pagination is not followed.
    pub async fn list_tags(&self, repository: &RepositoryRef) -> Result<TagList> {
        self.output
            .verbose(&format!("Listing tags for repository: {}", repository.name()));

        let url = repository.tags_url();
        self.output.trace(&format!("GET {}", url));

        let tags: TagList = read_json(self.client.get(&url), "tag listing").await?;

        self.output.detail(&format!(
            "Found {} tags for repository {}",
            tags.tags.len(),
            repository.name()
        ));

        Ok(tags)
    }
}
