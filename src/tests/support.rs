use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::{PipelineError, PipelineResult};
use crate::models::classification::{Complexity, ContractClassification};
use crate::models::validation::{AnalysisReport, CompilationResult, CompileStatus};
use crate::traits::{ContractGenerator, ContractValidator};

/// Generator double: returns a fixed source, or fails every call
pub struct FixedGenerator {
    pub source: Option<String>,
}

impl FixedGenerator {
    pub fn returning(source: &str) -> Self {
        Self {
            source: Some(source.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { source: None }
    }
}

#[async_trait]
impl ContractGenerator for FixedGenerator {
    async fn generate(&self, _classification: &ContractClassification) -> PipelineResult<String> {
        match &self.source {
            Some(source) => Ok(source.clone()),
            None => Err(PipelineError::Generation(
                "simulated network error".to_string(),
            )),
        }
    }
}

/// Validator double: the compiler fails a scripted number of times before
/// succeeding, and the analyzer returns a fixed report. Call counts are
/// recorded so tests can assert the retry policy.
pub struct ScriptedValidator {
    failures_before_success: usize,
    pub compile_calls: AtomicUsize,
    pub analyze_calls: AtomicUsize,
    report_text: String,
}

impl ScriptedValidator {
    pub fn new(failures_before_success: usize, report_text: &str) -> Self {
        Self {
            failures_before_success,
            compile_calls: AtomicUsize::new(0),
            analyze_calls: AtomicUsize::new(0),
            report_text: report_text.to_string(),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(usize::MAX, "")
    }
}

#[async_trait]
impl ContractValidator for ScriptedValidator {
    async fn compile(&self, _source: &str) -> PipelineResult<CompilationResult> {
        let call = self.compile_calls.fetch_add(1, Ordering::SeqCst);
        let status = if call < self.failures_before_success {
            CompileStatus::Failure
        } else {
            CompileStatus::Success
        };
        Ok(CompilationResult {
            status,
            stdout: Vec::new(),
            stderr: b"scripted compile diagnostics".to_vec(),
        })
    }

    async fn analyze(&self, _source: &str) -> PipelineResult<AnalysisReport> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        let issues_found = !self
            .report_text
            .to_lowercase()
            .contains("no issues detected");
        Ok(AnalysisReport {
            raw_text: self.report_text.clone(),
            issues_found,
        })
    }
}

// Lets a test keep a handle on the validator it hands to an orchestrator.
#[async_trait]
impl ContractValidator for std::sync::Arc<ScriptedValidator> {
    async fn compile(&self, source: &str) -> PipelineResult<CompilationResult> {
        self.as_ref().compile(source).await
    }

    async fn analyze(&self, source: &str) -> PipelineResult<AnalysisReport> {
        self.as_ref().analyze(source).await
    }
}

/// A fixed classification for tests that do not care about sampling
pub fn reentrancy_classification() -> ContractClassification {
    ContractClassification::new(Complexity::High, vec!["reentrancy-eth".to_string()])
        .expect("valid classification")
}
