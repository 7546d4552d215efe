//! Run configuration handed to the lifecycle orchestrator

use crate::error::handlers::ValidationErrorHandler;
use crate::error::{RegistryError, Result};
use crate::lifecycle::classifier::DEFAULT_RETENTION_DAYS;
use crate::registry::repository::RepositoryRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Print schema 1 tags, delete nothing
    ListSchemaV1,
    /// Delete tags whose image is older than the retention window
    ExpirationSweep,
}

impl RunMode {
    pub fn description(&self) -> &'static str {
        match self {
            RunMode::ListSchemaV1 => "List schema v1 tags",
            RunMode::ExpirationSweep => "Delete expired tags",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub repository: RepositoryRef,
    pub mode: RunMode,
    pub dry_run: bool,
    pub retention_days: u32,
    /// Number of tags resolved at once during the read phase
    pub concurrency: usize,
    /// Per-request timeout in seconds
    pub timeout: Option<u64>,
    pub skip_tls: bool,
}

impl CleanupConfig {
    pub fn new(repository: RepositoryRef) -> Self {
        Self {
            repository,
            mode: RunMode::ExpirationSweep,
            dry_run: false,
            retention_days: DEFAULT_RETENTION_DAYS,
            concurrency: 1,
            timeout: None,
            skip_tls: false,
        }
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_retention_days(mut self, retention_days: u32) -> Self {
        self.retention_days = retention_days;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<u64>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_skip_tls(mut self, skip_tls: bool) -> Self {
        self.skip_tls = skip_tls;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ValidationErrorHandler::validate_registry_url(self.repository.registry())?;
        ValidationErrorHandler::validate_repository(self.repository.name())?;

        if self.retention_days == 0 {
            return Err(RegistryError::Validation(
                "Retention must be at least one day".to_string(),
            ));
        }

        if self.concurrency == 0 {
            return Err(RegistryError::Validation(
                "Concurrency must be greater than 0".to_string(),
            ));
        }

        if let Some(timeout) = self.timeout {
            ValidationErrorHandler::validate_timeout(timeout)?;
        }

        Ok(())
    }
}
