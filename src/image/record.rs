use crate::image::manifest::{ConfigBlob, ManifestDescriptor};

/// A tag joined with the metadata needed to classify it.
///
/// `digest` is the config digest and is the key used for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub tag: String,
    pub digest: String,
    pub created: String,
    pub schema_version: u32,
}

impl ImageRecord {
    pub fn new(
        tag: impl Into<String>,
        digest: impl Into<String>,
        manifest: &ManifestDescriptor,
        blob: ConfigBlob,
    ) -> Self {
        Self {
            tag: tag.into(),
            digest: digest.into(),
            created: blob.created,
            schema_version: manifest.schema_version,
        }
    }
}
