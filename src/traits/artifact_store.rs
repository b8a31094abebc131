use crate::errors::PipelineResult;
use crate::models::artifact::StoredArtifact;
use crate::models::contract::GeneratedContract;
use crate::models::validation::AnalysisReport;

/// Trait for persisting one validated contract and its analysis report
pub trait ArtifactStore: Send + Sync {
    /// Write the contract, its report and its label metadata, returning
    /// where they landed. Filesystem failures are fatal to the iteration
    /// only, never to the batch.
    fn save(
        &self,
        contract: &GeneratedContract,
        report: &AnalysisReport,
    ) -> PipelineResult<StoredArtifact>;
}
