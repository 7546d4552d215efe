//! Events handed to the reporting sink

use crate::image::record::ImageRecord;
use crate::lifecycle::classifier::Classification;
use crate::registry::operations::DeleteResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    TagsListed {
        repository: String,
        count: usize,
    },
    ManifestFetched {
        tag: String,
        schema_version: u32,
        config_digest: Option<String>,
    },
    Classified {
        tag: String,
        digest: String,
        created: String,
        classification: Classification,
    },
    /// A schema 1 tag, rendered as a pullable reference
    SchemaV1 {
        reference: String,
    },
    /// An expired tag is about to be deleted, or skipped in dry-run mode
    Deleting {
        tag: String,
        created: String,
        dry_run: bool,
    },
    Deleted(DeletionOutcome),
}

/// Result of one delete attempt. Never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub tag: String,
    pub digest: String,
    pub created: String,
    /// Status line from the registry, absent when the exchange itself failed
    pub status_text: Option<String>,
    pub accepted: bool,
    pub error: Option<String>,
}

impl DeletionOutcome {
    pub fn completed(record: &ImageRecord, response: &DeleteResponse) -> Self {
        Self {
            tag: record.tag.clone(),
            digest: record.digest.clone(),
            created: record.created.clone(),
            status_text: Some(response.status_text.clone()),
            accepted: response.is_success(),
            error: None,
        }
    }

    pub fn failed(record: &ImageRecord, error: impl Into<String>) -> Self {
        Self {
            tag: record.tag.clone(),
            digest: record.digest.clone(),
            created: record.created.clone(),
            status_text: None,
            accepted: false,
            error: Some(error.into()),
        }
    }

    /// Transport failure or a non-success status
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || !self.accepted
    }
}
