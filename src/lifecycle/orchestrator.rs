//! Sequencing of registry reads, classification and deletion

use crate::common::traits::{RegistryApi, ReportSink};
use crate::config::{CleanupConfig, RunMode};
use crate::error::{RegistryError, Result};
use crate::image::manifest::ManifestDescriptor;
use crate::image::record::ImageRecord;
use crate::lifecycle::classifier::{Classification, ExpirationPolicy, classify_schema};
use crate::lifecycle::report::{DeletionOutcome, LifecycleEvent};
use crate::registry::repository::RepositoryRef;
use futures::stream::{self, StreamExt};
use std::pin::pin;

/// What a run produced, depending on its mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    SchemaV1(Vec<String>),
    Sweep(SweepReport),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Tags resolved and classified
    pub scanned: usize,
    /// Expired records in tag-list order
    pub expired: Vec<ImageRecord>,
    /// One entry per delete call; empty in dry-run mode
    pub outcomes: Vec<DeletionOutcome>,
    pub dry_run: bool,
}

impl SweepReport {
    pub fn deleted(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failure()).count()
    }

    pub fn failed_deletions(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }
}

pub struct LifecycleOrchestrator<'a, R: ?Sized, S: ?Sized> {
    registry: &'a R,
    sink: &'a S,
}

impl<'a, R, S> LifecycleOrchestrator<'a, R, S>
where
    R: RegistryApi + ?Sized,
    S: ReportSink + ?Sized,
{
    pub fn new(registry: &'a R, sink: &'a S) -> Self {
        Self { registry, sink }
    }

    /// Run the mode selected by `config`
    pub async fn run(&self, config: &CleanupConfig) -> Result<RunOutcome> {
        match config.mode {
            RunMode::ListSchemaV1 => self
                .list_schema_v1(&config.repository, config.concurrency)
                .await
                .map(RunOutcome::SchemaV1),
            RunMode::ExpirationSweep => {
                let policy = ExpirationPolicy::from_now(config.retention_days);
                self.sweep(
                    &config.repository,
                    &policy,
                    config.dry_run,
                    config.concurrency,
                )
                .await
                .map(RunOutcome::Sweep)
            }
        }
    }

    /// References of every schema 1 tag, in tag-list order.
    ///
    /// The first manifest that cannot be fetched aborts the listing; nothing is
    /// reported unless every manifest was read.
    pub async fn list_schema_v1(
        &self,
        repository: &RepositoryRef,
        concurrency: usize,
    ) -> Result<Vec<String>> {
        let tags = self.list_tags(repository).await?;
        let registry = self.registry;

        let mut manifests = pin!(
            stream::iter(tags.iter())
                .map(move |tag| async move {
                    registry
                        .get_manifest(repository, tag)
                        .await
                        .map(|manifest| (tag, manifest))
                })
                .buffered(concurrency.max(1))
        );

        let mut found = Vec::new();
        while let Some(item) = manifests.next().await {
            let (tag, manifest) = item?;
            self.report_manifest(tag, &manifest);

            if classify_schema(&manifest) == Classification::SchemaV1 {
                found.push(repository.display_reference(tag));
            }
        }

        for reference in &found {
            self.sink.report(&LifecycleEvent::SchemaV1 {
                reference: reference.clone(),
            });
        }

        Ok(found)
    }

    /// Delete every tag whose image was created before the policy cutoff.
    ///
    /// All tags are resolved and classified before the first deletion. Any read
    /// or timestamp error aborts the sweep with nothing deleted; delete failures
    /// are recorded and the loop moves on.
    pub async fn sweep(
        &self,
        repository: &RepositoryRef,
        policy: &ExpirationPolicy,
        dry_run: bool,
        concurrency: usize,
    ) -> Result<SweepReport> {
        let tags = self.list_tags(repository).await?;
        let registry = self.registry;

        let mut resolved = pin!(
            stream::iter(tags.iter())
                .map(move |tag| async move { resolve_record(registry, repository, tag).await })
                .buffered(concurrency.max(1))
        );

        let mut expired = Vec::new();
        while let Some(item) = resolved.next().await {
            let (manifest, record) = item?;
            self.report_manifest(&record.tag, &manifest);

            let classification = policy.classify(&record)?;
            self.sink.report(&LifecycleEvent::Classified {
                tag: record.tag.clone(),
                digest: record.digest.clone(),
                created: record.created.clone(),
                classification,
            });

            if classification == Classification::Expired {
                expired.push(record);
            }
        }

        let mut outcomes = Vec::new();
        for record in &expired {
            self.sink.report(&LifecycleEvent::Deleting {
                tag: record.tag.clone(),
                created: record.created.clone(),
                dry_run,
            });

            if dry_run {
                continue;
            }

            let outcome = match self.registry.delete_manifest(repository, &record.digest).await {
                Ok(response) => DeletionOutcome::completed(record, &response),
                Err(err) => DeletionOutcome::failed(record, err.to_string()),
            };

            self.sink.report(&LifecycleEvent::Deleted(outcome.clone()));
            outcomes.push(outcome);
        }

        Ok(SweepReport {
            scanned: tags.len(),
            expired,
            outcomes,
            dry_run,
        })
    }

    async fn list_tags(&self, repository: &RepositoryRef) -> Result<Vec<String>> {
        let list = self.registry.list_tags(repository).await?;
        self.sink.report(&LifecycleEvent::TagsListed {
            repository: repository.name().to_string(),
            count: list.tags.len(),
        });
        Ok(list.tags)
    }

    fn report_manifest(&self, tag: &str, manifest: &ManifestDescriptor) {
        self.sink.report(&LifecycleEvent::ManifestFetched {
            tag: tag.to_string(),
            schema_version: manifest.schema_version,
            config_digest: manifest.config_digest.clone(),
        });
    }
}

/// Manifest, then the config blob it points at
async fn resolve_record<R>(
    registry: &R,
    repository: &RepositoryRef,
    tag: &str,
) -> Result<(ManifestDescriptor, ImageRecord)>
where
    R: RegistryApi + ?Sized,
{
    let manifest = registry.get_manifest(repository, tag).await?;
    let digest = manifest
        .config_digest
        .clone()
        .ok_or_else(|| RegistryError::MissingConfig(tag.to_string()))?;

    let blob = registry.get_blob(repository, &digest).await?;
    let record = ImageRecord::new(tag, digest, &manifest, blob);
    Ok((manifest, record))
}
