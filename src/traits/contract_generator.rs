use async_trait::async_trait;

use crate::errors::PipelineResult;
use crate::models::classification::ContractClassification;

/// Main trait for turning a classification into contract source text
#[async_trait]
pub trait ContractGenerator: Send + Sync {
    /// Generate contract source for the given classification.
    ///
    /// On success the raw text of the first returned candidate is handed
    /// back untouched. A failure (network error, malformed response, zero
    /// candidates) is an error the orchestrator treats as a skipped
    /// iteration; this layer never retries.
    async fn generate(&self, classification: &ContractClassification) -> PipelineResult<String>;
}
