//! Repository addressing and the tag list response

use serde::{Deserialize, Deserializer};

/// A repository inside one registry, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    registry: String,
    name: String,
}

impl RepositoryRef {
    pub fn new(registry: impl Into<String>, name: impl Into<String>) -> Self {
        let registry: String = registry.into();
        Self {
            registry: registry.trim_end_matches('/').to_string(),
            name: name.into(),
        }
    }

    /// Registry base URL, without a trailing slash
    pub fn registry(&self) -> &str {
        &self.registry
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags_url(&self) -> String {
        format!("{}/v2/{}/tags/list", self.registry, self.name)
    }

    /// `reference` is a tag or a digest
    pub fn manifest_url(&self, reference: &str) -> String {
        format!("{}/v2/{}/manifests/{}", self.registry, self.name, reference)
    }

    pub fn blob_url(&self, digest: &str) -> String {
        format!("{}/v2/{}/blobs/{}", self.registry, self.name, digest)
    }

    /// Pullable reference for a tag, e.g. `registry.example.com/app:v1`
    pub fn display_reference(&self, tag: &str) -> String {
        let full = format!("{}/{}:{}", self.registry, self.name, tag);
        match full.strip_prefix("https://") {
            Some(stripped) => stripped.to_string(),
            None => full,
        }
    }
}

/// Body of `GET /v2/{name}/tags/list`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagList {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

// Registries answer `"tags": null` for a repository whose tags were all deleted
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
