use async_trait::async_trait;
use log::{error, info};

use crate::errors::{PipelineError, PipelineResult};
use crate::models::validation::{AnalysisReport, CompilationResult};

/// Trait for running the external compiler and static analyzer over a
/// contract source string.
#[async_trait]
pub trait ContractValidator: Send + Sync {
    /// One compiler invocation. An `Err` means the tool itself could not be
    /// run; a failed compile is a `CompilationResult` with failure status.
    async fn compile(&self, source: &str) -> PipelineResult<CompilationResult>;

    /// One analyzer invocation over a contract that is expected to compile
    async fn analyze(&self, source: &str) -> PipelineResult<AnalysisReport>;

    /// Compile with a bounded retry, then analyze.
    ///
    /// The same unmodified source is re-submitted on every attempt; the
    /// retry masks transient tool faults only. Against a deterministic
    /// compiler every attempt produces the same outcome and the loop runs
    /// to exhaustion. Callers wanting a fresh contract on failure must
    /// regenerate at their own layer.
    async fn validate_with_retry(
        &self,
        source: &str,
        max_retries: u32,
    ) -> PipelineResult<AnalysisReport> {
        let mut attempts = 0;
        while attempts < max_retries {
            attempts += 1;
            info!("Compile attempt {}/{}", attempts, max_retries);

            let result = self.compile(source).await?;
            if result.succeeded() {
                info!("Compilation succeeded on attempt {}", attempts);
                return self.analyze(source).await;
            }

            error!(
                "Compilation failed on attempt {}/{}: {}",
                attempts,
                max_retries,
                result.stderr_text().trim()
            );
        }

        Err(PipelineError::CompileFailed {
            attempts: max_retries,
        })
    }
}
