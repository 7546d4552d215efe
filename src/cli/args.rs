//! Command-line argument parsing

use crate::config::{CleanupConfig, RunMode};
use crate::error::{RegistryError, Result};
use crate::lifecycle::classifier::DEFAULT_RETENTION_DAYS;
use crate::logging::Logger;
use crate::registry::repository::RepositoryRef;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "registry-cleanup")]
#[command(about = "Delete expired tags from a Docker registry repository")]
#[command(version)]
pub struct Args {
    /// Registry URL
    #[arg(
        long = "registry",
        short = 'r',
        help = "Registry base URL, e.g. https://registry.example.com"
    )]
    pub registry: Option<String>,

    /// Repository name
    #[arg(
        long = "repo",
        short = 'R',
        help = "Repository to clean up, e.g. team/app"
    )]
    pub repo: Option<String>,

    /// Dry run mode (report without deleting)
    #[arg(
        long = "dry-run",
        short = 'n',
        help = "Report expired tags without deleting them"
    )]
    pub dry_run: bool,

    /// Verbose output
    #[arg(long = "verbose", short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    /// Quiet output
    #[arg(
        long = "quiet",
        short = 'q',
        help = "Only print results and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Schema v1 listing mode
    #[arg(
        long = "list-schema-v1",
        help = "List tags whose manifest uses schema version 1 instead of deleting expired tags"
    )]
    pub list_schema_v1: bool,

    /// Retention window
    #[arg(
        long = "retention-days",
        help = "Tags whose image is older than this many days are deleted [default: 730]"
    )]
    pub retention_days: Option<u32>,

    /// Timeout in seconds for network operations
    #[arg(
        long = "timeout",
        short = 't',
        help = "Timeout for each registry request in seconds"
    )]
    pub timeout: Option<u64>,

    /// Number of tags resolved in parallel
    #[arg(
        long = "concurrency",
        short = 'j',
        default_value = "1",
        help = "Number of tags whose metadata is fetched concurrently"
    )]
    pub concurrency: usize,

    /// Skip TLS verification
    #[arg(
        long = "skip-tls",
        short = 'k',
        help = "Skip TLS certificate verification"
    )]
    pub skip_tls: bool,
}

impl Args {
    pub fn parse_args() -> std::result::Result<Self, clap::Error> {
        Args::try_parse()
    }

    /// Load configuration from environment variables
    pub fn from_env(self) -> Result<Self> {
        self.with_env(|key| std::env::var(key).ok())
    }

    /// Fill unset options from `lookup`; flags given on the command line win
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.registry.is_none() {
            self.registry = lookup("REGISTRY_CLEANUP_REGISTRY");
        }

        if self.repo.is_none() {
            self.repo = lookup("REGISTRY_CLEANUP_REPO");
        }

        if self.timeout.is_none() {
            self.timeout = env_number(&lookup, "REGISTRY_CLEANUP_TIMEOUT")?;
        }

        if self.retention_days.is_none() {
            self.retention_days = env_number(&lookup, "REGISTRY_CLEANUP_RETENTION_DAYS")?;
        }

        if env_flag(&lookup, "REGISTRY_CLEANUP_DRY_RUN")? {
            self.dry_run = true;
        }

        if env_flag(&lookup, "REGISTRY_CLEANUP_VERBOSE")? && !self.quiet {
            self.verbose = true;
        }

        if env_flag(&lookup, "REGISTRY_CLEANUP_SKIP_TLS")? {
            self.skip_tls = true;
        }

        Ok(self)
    }

    /// Build the validated run configuration
    pub fn to_config(&self) -> Result<CleanupConfig> {
        let registry = self.registry.clone().ok_or_else(|| {
            RegistryError::Config("Registry URL is not specified (--registry)".to_string())
        })?;
        let repo = self.repo.clone().ok_or_else(|| {
            RegistryError::Config("Repository is not specified (--repo)".to_string())
        })?;

        let mode = if self.list_schema_v1 {
            RunMode::ListSchemaV1
        } else {
            RunMode::ExpirationSweep
        };

        let config = CleanupConfig::new(RepositoryRef::new(registry, repo))
            .with_mode(mode)
            .with_dry_run(self.dry_run)
            .with_retention_days(self.retention_days.unwrap_or(DEFAULT_RETENTION_DAYS))
            .with_concurrency(self.concurrency)
            .with_timeout(self.timeout)
            .with_skip_tls(self.skip_tls);

        config.validate()?;
        Ok(config)
    }

    pub fn logger(&self) -> Logger {
        if self.quiet {
            Logger::new_quiet()
        } else {
            Logger::new(self.verbose)
        }
    }
}

fn env_number<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            RegistryError::Config(format!("{} must be a whole number, got {:?}", key, value))
        }),
    }
}

fn env_flag<F>(lookup: &F, key: &str) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        _ => Err(RegistryError::Config(format!(
            "{} must be one of 1/true/yes or 0/false/no, got {:?}",
            key, value
        ))),
    }
}
