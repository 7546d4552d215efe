//! Image metadata module
//!
//! This module provides the types a tag resolves to while it is being evaluated:
//! the [`ManifestDescriptor`] returned by the manifest endpoint, the [`ConfigBlob`]
//! carrying the image creation date, and the ephemeral [`ImageRecord`] that joins them.
//!
//! # Overview
//!
//! Registry responses are decoded leniently: unknown fields are ignored, and both
//! schema 1 and schema 2 manifests decode into the same descriptor so the schema
//! version can be inspected before anything else is fetched.

pub mod manifest;
pub mod record;

pub use manifest::{ConfigBlob, DOCKER_MANIFEST_V2, ManifestDescriptor};
pub use record::ImageRecord;
