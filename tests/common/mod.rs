//! In-memory registry and recording sink shared by the integration tests

use async_trait::async_trait;
use registry_cleanup::error::{RegistryError, Result};
use registry_cleanup::image::{ConfigBlob, ManifestDescriptor};
use registry_cleanup::lifecycle::LifecycleEvent;
use registry_cleanup::registry::{DeleteResponse, RepositoryRef, TagList};
use registry_cleanup::{RegistryApi, ReportSink};
use reqwest::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

pub const REGISTRY: &str = "https://registry.example.com";
pub const REPOSITORY: &str = "team/app";

pub fn repository() -> RepositoryRef {
    RepositoryRef::new(REGISTRY, REPOSITORY)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTags,
    GetManifest(String),
    GetBlob(String),
    Delete(String),
}

#[derive(Default)]
pub struct FakeRegistry {
    tags: Vec<String>,
    manifests: HashMap<String, ManifestDescriptor>,
    blobs: HashMap<String, ConfigBlob>,
    failing_manifests: HashSet<String>,
    failing_deletes: HashSet<String>,
    refused_deletes: HashSet<String>,
    manifest_delays: HashMap<String, u64>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digest_for(tag: &str) -> String {
        format!("sha256:config-{}", tag)
    }

    /// Schema 2 image created at `created`
    pub fn with_image(self, tag: &str, created: &str) -> Self {
        self.with_schema(tag, 2, created)
    }

    pub fn with_schema(mut self, tag: &str, schema_version: u32, created: &str) -> Self {
        let digest = Self::digest_for(tag);
        let config_digest = (schema_version != 1).then(|| digest.clone());

        self.tags.push(tag.to_string());
        self.manifests.insert(
            tag.to_string(),
            ManifestDescriptor {
                schema_version,
                media_type: String::new(),
                config_digest,
                layer_digests: vec![format!("sha256:layer-{}", tag)],
            },
        );
        self.blobs.insert(
            digest,
            ConfigBlob {
                created: created.to_string(),
            },
        );
        self
    }

    pub fn with_failing_manifest(mut self, tag: &str) -> Self {
        self.failing_manifests.insert(tag.to_string());
        self
    }

    /// Delete of this tag's digest fails before a response arrives
    pub fn with_failing_delete(mut self, tag: &str) -> Self {
        self.failing_deletes.insert(Self::digest_for(tag));
        self
    }

    /// Delete of this tag's digest is answered with 404
    pub fn with_refused_delete(mut self, tag: &str) -> Self {
        self.refused_deletes.insert(Self::digest_for(tag));
        self
    }

    pub fn with_manifest_delay(mut self, tag: &str, millis: u64) -> Self {
        self.manifest_delays.insert(tag.to_string(), millis);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete(digest) => Some(digest),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn not_found(operation: String, code: &str) -> RegistryError {
        RegistryError::HttpStatus {
            operation,
            status: StatusCode::NOT_FOUND,
            body: code.to_string(),
        }
    }
}

#[async_trait]
impl RegistryApi for FakeRegistry {
    async fn list_tags(&self, repository: &RepositoryRef) -> Result<TagList> {
        self.record(Call::ListTags);
        Ok(TagList {
            name: repository.name().to_string(),
            tags: self.tags.clone(),
        })
    }

    async fn get_manifest(
        &self,
        _repository: &RepositoryRef,
        tag: &str,
    ) -> Result<ManifestDescriptor> {
        self.record(Call::GetManifest(tag.to_string()));

        if let Some(millis) = self.manifest_delays.get(tag) {
            tokio::time::sleep(Duration::from_millis(*millis)).await;
        }

        if self.failing_manifests.contains(tag) {
            return Err(Self::not_found(
                format!("manifest fetch for {}", tag),
                "MANIFEST_UNKNOWN",
            ));
        }

        self.manifests.get(tag).cloned().ok_or_else(|| {
            Self::not_found(format!("manifest fetch for {}", tag), "MANIFEST_UNKNOWN")
        })
    }

    async fn get_blob(&self, _repository: &RepositoryRef, digest: &str) -> Result<ConfigBlob> {
        self.record(Call::GetBlob(digest.to_string()));
        self.blobs.get(digest).cloned().ok_or_else(|| {
            Self::not_found(format!("config blob fetch for {}", digest), "BLOB_UNKNOWN")
        })
    }

    async fn delete_manifest(
        &self,
        _repository: &RepositoryRef,
        digest: &str,
    ) -> Result<DeleteResponse> {
        self.record(Call::Delete(digest.to_string()));

        if self.failing_deletes.contains(digest) {
            return Err(RegistryError::Transport(
                "Connection error during manifest deletion: connection reset".to_string(),
            ));
        }

        if self.refused_deletes.contains(digest) {
            return Ok(DeleteResponse::from_status(StatusCode::NOT_FOUND));
        }

        Ok(DeleteResponse::from_status(StatusCode::ACCEPTED))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LifecycleEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Tags of every `Deleting` event, in order
    pub fn deleting(&self) -> Vec<(String, bool)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                LifecycleEvent::Deleting { tag, dry_run, .. } => Some((tag, dry_run)),
                _ => None,
            })
            .collect()
    }

    pub fn classified_tags(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                LifecycleEvent::Classified { tag, .. } => Some(tag),
                _ => None,
            })
            .collect()
    }

    pub fn schema_v1_references(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                LifecycleEvent::SchemaV1 { reference } => Some(reference),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn report(&self, event: &LifecycleEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
