//! Logging and output control
//!
//! This module provides the [`Logger`] for controlling output verbosity and formatting
//! user-visible lines. It supports quiet, normal and verbose output, and doubles as the
//! [`ReportSink`] that renders lifecycle events on the console.

use crate::common::traits::ReportSink;
use crate::lifecycle::report::LifecycleEvent;
use std::time::{Duration, Instant};

/// Logger responsible for all user-visible output
#[derive(Debug, Clone)]
pub struct Logger {
    pub verbose: bool,
    pub quiet: bool,
    pub start_time: Option<Instant>,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            quiet: false,
            start_time: Some(Instant::now()),
        }
    }

    pub fn new_quiet() -> Self {
        Self {
            verbose: false,
            quiet: true,
            start_time: Some(Instant::now()),
        }
    }

    /// Main section heading
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("\n=== {} ===", title);
        }
    }

    pub fn trace(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("🔍 TRACE: {}", message);
        }
    }

    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("📝 {}", message);
        }
    }

    /// Information message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("ℹ️  {}", message);
        }
    }

    /// Success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("✅ {}", message);
        }
    }

    /// Warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("⚠️  WARNING: {}", message);
        }
    }

    /// Error message
    pub fn error(&self, message: &str) {
        eprintln!("❌ ERROR: {}", message);
    }

    /// Detailed information (only shown in verbose mode)
    pub fn detail(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("   {}", message);
        }
    }

    /// Result line, printed bare so it can be piped even in quiet mode
    pub fn result(&self, message: &str) {
        println!("{}", message);
    }

    /// Key-value pair summary display
    pub fn summary_kv(&self, title: &str, items: &[(&str, String)]) {
        if !self.quiet {
            println!("\n--- {} ---", title);
            for (key, value) in items {
                println!("  {}: {}", key, value);
            }
        }
    }

    /// Time since the logger was created
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|start| start.elapsed())
            .unwrap_or_default()
    }

    /// Format duration in human-readable format
    pub fn format_duration(&self, duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m{}s", secs / 60, secs % 60)
        } else {
            format!("{}h{}m{}s", secs / 3600, (secs % 3600) / 60, secs % 60)
        }
    }
}

impl ReportSink for Logger {
    fn report(&self, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::TagsListed { repository, count } => {
                self.verbose(&format!("Found {} tags in {}", count, repository));
            }
            LifecycleEvent::ManifestFetched {
                tag,
                schema_version,
                config_digest,
            } => {
                self.trace(&format!(
                    "Tag: {} Schema: {} Config: {}",
                    tag,
                    schema_version,
                    config_digest.as_deref().unwrap_or("-")
                ));
            }
            LifecycleEvent::Classified {
                tag,
                digest,
                created,
                classification,
            } => {
                self.trace(&format!(
                    "Tag: {} Digest: {} Created: {} Status: {}",
                    tag, digest, created, classification
                ));
            }
            LifecycleEvent::SchemaV1 { reference } => self.result(reference),
            LifecycleEvent::Deleting {
                tag,
                created,
                dry_run,
            } => {
                if *dry_run {
                    self.result(&format!("Deleting: {} ({}) [dry run]", tag, created));
                } else {
                    self.detail(&format!("Deleting {} ({})", tag, created));
                }
            }
            LifecycleEvent::Deleted(outcome) => {
                let status = outcome.status_text.as_deref().unwrap_or("failed");
                self.result(&format!(
                    "Deleting: {} ({}) {}",
                    outcome.tag, outcome.created, status
                ));
                if let Some(error) = &outcome.error {
                    self.error(&format!("Failed to delete {}: {}", outcome.tag, error));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        let logger = Logger::new(false);
        assert_eq!(logger.format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(logger.format_duration(Duration::from_secs(125)), "2m5s");
        assert_eq!(logger.format_duration(Duration::from_secs(3725)), "1h2m5s");
    }

    #[test]
    fn test_quiet_logger_is_not_verbose() {
        let logger = Logger::new_quiet();
        assert!(logger.quiet);
        assert!(!logger.verbose);
    }
}
