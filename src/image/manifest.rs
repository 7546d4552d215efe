use serde::Deserialize;

/// Media type requested on manifest and blob reads
pub const DOCKER_MANIFEST_V2: &str = "application/vnd.docker.distribution.manifest.v2+json";

/// Manifest metadata for one tag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawManifest")]
pub struct ManifestDescriptor {
    pub schema_version: u32,
    pub media_type: String,
    /// Digest of the image configuration blob. Schema 1 manifests have none.
    pub config_digest: Option<String>,
    pub layer_digests: Vec<String>,
}

impl ManifestDescriptor {
    pub fn is_schema_v1(&self) -> bool {
        self.schema_version == 1
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawManifest {
    schema_version: u32,
    #[serde(default)]
    media_type: String,
    #[serde(default)]
    config: Option<RawDescriptor>,
    #[serde(default)]
    layers: Vec<RawDescriptor>,
    #[serde(default)]
    fs_layers: Vec<RawFsLayer>,
}

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    #[serde(default)]
    digest: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFsLayer {
    #[serde(default)]
    blob_sum: String,
}

impl From<RawManifest> for ManifestDescriptor {
    fn from(raw: RawManifest) -> Self {
        let layer_digests = if raw.layers.is_empty() {
            raw.fs_layers.into_iter().map(|l| l.blob_sum).collect()
        } else {
            raw.layers.into_iter().map(|l| l.digest).collect()
        };

        Self {
            schema_version: raw.schema_version,
            media_type: raw.media_type,
            config_digest: raw
                .config
                .map(|c| c.digest)
                .filter(|digest| !digest.is_empty()),
            layer_digests,
        }
    }
}

/// Image configuration blob; only the creation date matters here
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigBlob {
    /// RFC3339 timestamp as stored by the builder, not validated on decode
    #[serde(default)]
    pub created: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_schema2_manifest() {
        let body = r#"{
            "schemaVersion": 2,
            "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
            "config": {
                "mediaType": "application/vnd.docker.container.image.v1+json",
                "size": 1470,
                "digest": "sha256:aaaa"
            },
            "layers": [
                {"mediaType": "application/vnd.docker.image.rootfs.diff.tar.gzip", "size": 10, "digest": "sha256:l1"},
                {"mediaType": "application/vnd.docker.image.rootfs.diff.tar.gzip", "size": 20, "digest": "sha256:l2"}
            ],
            "annotations": {"ignored": "yes"}
        }"#;

        let manifest: ManifestDescriptor = serde_json::from_str(body).unwrap();
        assert_eq!(manifest.schema_version, 2);
        assert_eq!(manifest.media_type, DOCKER_MANIFEST_V2);
        assert_eq!(manifest.config_digest.as_deref(), Some("sha256:aaaa"));
        assert_eq!(manifest.layer_digests, vec!["sha256:l1", "sha256:l2"]);
        assert!(!manifest.is_schema_v1());
    }

    #[test]
    fn test_decode_schema1_manifest() {
        let body = r#"{
            "schemaVersion": 1,
            "name": "app",
            "tag": "old",
            "architecture": "amd64",
            "fsLayers": [{"blobSum": "sha256:b1"}, {"blobSum": "sha256:b2"}],
            "history": []
        }"#;

        let manifest: ManifestDescriptor = serde_json::from_str(body).unwrap();
        assert!(manifest.is_schema_v1());
        assert_eq!(manifest.config_digest, None);
        assert_eq!(manifest.layer_digests, vec!["sha256:b1", "sha256:b2"]);
    }

    #[test]
    fn test_decode_manifest_without_schema_version_fails() {
        let result: Result<ManifestDescriptor, _> =
            serde_json::from_str(r#"{"errors": [{"code": "MANIFEST_UNKNOWN"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_config_blob() {
        let body = r#"{"architecture": "amd64", "created": "2015-01-01T00:00:00Z", "os": "linux"}"#;
        let blob: ConfigBlob = serde_json::from_str(body).unwrap();
        assert_eq!(blob.created, "2015-01-01T00:00:00Z");

        let blob: ConfigBlob = serde_json::from_str("{}").unwrap();
        assert_eq!(blob.created, "");
    }
}
