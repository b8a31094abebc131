use indicatif::ProgressBar;
use log::{error, info};

use crate::catalog;
use crate::errors::PipelineResult;
use crate::models::artifact::StoredArtifact;
use crate::models::classification::ContractClassification;
use crate::models::contract::GeneratedContract;
use crate::traits::{ArtifactStore, ContractGenerator, ContractValidator};

/// Aggregate outcome of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub requested: usize,
    pub completed: usize,
    pub skipped: usize,
}

/// Drives N sequential iterations of sample -> generate -> validate -> save.
///
/// Iterations are isolated: any failure is logged with its classification and
/// counted as a skip, and the batch always runs to the requested count.
pub struct PipelineOrchestrator<G, V, S> {
    generator: G,
    validator: V,
    store: S,
    max_compile_retries: u32,
}

impl<G, V, S> PipelineOrchestrator<G, V, S>
where
    G: ContractGenerator,
    V: ContractValidator,
    S: ArtifactStore,
{
    pub fn new(generator: G, validator: V, store: S, max_compile_retries: u32) -> Self {
        Self {
            generator,
            validator,
            store,
            max_compile_retries,
        }
    }

    /// Run `count` iterations and return the aggregate counts. The optional
    /// progress bar ticks once per iteration, success or skip.
    pub async fn run(&self, count: usize, progress: Option<&ProgressBar>) -> RunSummary {
        let mut summary = RunSummary {
            requested: count,
            ..Default::default()
        };

        for iteration in 1..=count {
            let classification = catalog::sample_classification();
            info!(
                "Iteration {}/{}: classification {}",
                iteration, count, classification
            );

            match self.run_iteration(&classification).await {
                Ok(artifact) => {
                    summary.completed += 1;
                    info!(
                        "Iteration {} stored contract at {}",
                        iteration,
                        artifact.contract_path.display()
                    );
                }
                Err(e) => {
                    summary.skipped += 1;
                    error!("Iteration {} skipped ({}): {}", iteration, classification, e);
                }
            }

            if let Some(bar) = progress {
                bar.inc(1);
            }
        }

        info!(
            "Batch finished: {} completed, {} skipped of {} requested",
            summary.completed, summary.skipped, summary.requested
        );
        summary
    }

    pub(crate) async fn run_iteration(
        &self,
        classification: &ContractClassification,
    ) -> PipelineResult<StoredArtifact> {
        let source = self.generator.generate(classification).await?;
        let report = self
            .validator
            .validate_with_retry(&source, self.max_compile_retries)
            .await?;
        let contract = GeneratedContract::new(source, classification.clone());
        self.store.save(&contract, &report)
    }
}
