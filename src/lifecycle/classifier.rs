//! Retention policies applied to a single tag

use crate::error::{RegistryError, Result};
use crate::image::manifest::ManifestDescriptor;
use crate::image::record::ImageRecord;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Two years of 365 days each, not calendar years
pub const DEFAULT_RETENTION_DAYS: u32 = 365 * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Retained,
    Expired,
    SchemaV1,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Retained => write!(f, "retained"),
            Classification::Expired => write!(f, "expired"),
            Classification::SchemaV1 => write!(f, "schema v1"),
        }
    }
}

/// Schema policy: only the manifest is needed
pub fn classify_schema(manifest: &ManifestDescriptor) -> Classification {
    if manifest.is_schema_v1() {
        Classification::SchemaV1
    } else {
        Classification::Retained
    }
}

/// Expiration policy with a cutoff fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    cutoff: DateTime<Utc>,
}

impl ExpirationPolicy {
    /// Cutoff is `now - retention_days * 24h`
    pub fn from_now(retention_days: u32) -> Self {
        Self::relative_to(Utc::now(), retention_days)
    }

    pub fn relative_to(now: DateTime<Utc>, retention_days: u32) -> Self {
        let window = TimeDelta::hours(24 * i64::from(retention_days));
        let cutoff = now
            .checked_sub_signed(window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { cutoff }
    }

    pub fn with_cutoff(cutoff: DateTime<Utc>) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    /// `Expired` when created strictly before the cutoff
    pub fn classify(&self, record: &ImageRecord) -> Result<Classification> {
        let created = parse_created(&record.tag, &record.created)?;
        if created < self.cutoff {
            Ok(Classification::Expired)
        } else {
            Ok(Classification::Retained)
        }
    }
}

/// Parse a config blob creation date as RFC3339
pub fn parse_created(tag: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|created| created.with_timezone(&Utc))
        .map_err(|e| RegistryError::TimestampParse {
            tag: tag.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
