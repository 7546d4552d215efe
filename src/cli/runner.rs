//! Runner wiring configuration, registry client and orchestrator together

use crate::common::traits::RegistryApi;
use crate::config::{CleanupConfig, RunMode};
use crate::error::Result;
use crate::lifecycle::orchestrator::{LifecycleOrchestrator, RunOutcome, SweepReport};
use crate::logging::Logger;
use crate::registry::RegistryClient;
use clap::error::ErrorKind;

/// Exit code for configuration errors and aborted reads
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for a command line clap refused to parse.
///
/// Usage errors share the configuration failure code so they never read as
/// a sweep with failed deletions; help and version output are successes.
pub fn usage_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => EXIT_FAILURE,
    }
}

/// How a run that did not abort ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    /// The sweep finished but some deletions failed
    DeletionFailures(usize),
}

impl RunStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunStatus::Completed => 0,
            RunStatus::DeletionFailures(_) => 2,
        }
    }
}

pub struct Runner {
    config: CleanupConfig,
    output: Logger,
}

impl Runner {
    pub fn new(config: CleanupConfig, output: Logger) -> Self {
        Self { config, output }
    }

    pub async fn run(&self) -> Result<RunStatus> {
        self.output.section("Registry Cleanup");
        self.output.info(&format!(
            "{} in {}/{}",
            self.config.mode.description(),
            self.config.repository.registry(),
            self.config.repository.name()
        ));
        if self.config.dry_run && self.config.mode == RunMode::ExpirationSweep {
            self.output.info("Dry run mode - nothing will be deleted");
        }

        let client = RegistryClient::builder()
            .with_timeout(self.config.timeout)
            .with_skip_tls(self.config.skip_tls)
            .with_logger(self.output.clone())
            .build()?;

        self.run_with(&client).await
    }

    /// Run against any registry implementation
    pub async fn run_with<R>(&self, registry: &R) -> Result<RunStatus>
    where
        R: RegistryApi + ?Sized,
    {
        let orchestrator = LifecycleOrchestrator::new(registry, &self.output);
        let outcome = orchestrator.run(&self.config).await?;

        Ok(match outcome {
            RunOutcome::SchemaV1(references) => {
                self.output.verbose(&format!(
                    "{} schema v1 tags found",
                    references.len()
                ));
                RunStatus::Completed
            }
            RunOutcome::Sweep(report) => self.summarize_sweep(&report),
        })
    }

    fn summarize_sweep(&self, report: &SweepReport) -> RunStatus {
        let mut items = vec![
            ("Tags scanned", report.scanned.to_string()),
            ("Expired", report.expired.len().to_string()),
        ];
        if !report.dry_run {
            items.push(("Deleted", report.deleted().to_string()));
            items.push(("Failed", report.failed_deletions().to_string()));
        }
        items.push((
            "Elapsed",
            self.output.format_duration(self.output.elapsed()),
        ));
        self.output.summary_kv("Summary", &items);

        match report.failed_deletions() {
            0 => {
                self.output.success("Cleanup completed");
                RunStatus::Completed
            }
            failed => {
                self.output
                    .warning(&format!("{} of {} deletions failed", failed, report.outcomes.len()));
                RunStatus::DeletionFailures(failed)
            }
        }
    }
}
