//! Tag lifecycle evaluation
//!
//! Walks a repository's tags, resolves each to manifest and config metadata, classifies
//! it against the retention policy and drives deletion of what expired.
//!
//! Reads are fail-fast: the first manifest, blob or timestamp error ends the run before
//! anything is deleted. Deletions are isolated: a failed delete is reported and the
//! remaining ones still run.

pub mod classifier;
pub mod orchestrator;
pub mod report;

pub use classifier::{Classification, DEFAULT_RETENTION_DAYS, ExpirationPolicy, classify_schema};
pub use orchestrator::{LifecycleOrchestrator, RunOutcome, SweepReport};
pub use report::{DeletionOutcome, LifecycleEvent};
