use std::process::Output;

use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

use crate::config::ExternalToolsConfig;
use crate::errors::{PipelineError, PipelineResult};
use crate::models::validation::{AnalysisReport, CompilationResult, CompileStatus};
use crate::traits::contract_validator::ContractValidator;

/// Phrase the analyzer prints when a contract comes back clean
const NO_ISSUES_SENTINEL: &str = "no issues detected";

/// Implementation of the ContractValidator trait that shells out to the
/// Solidity compiler and the Slither static analyzer.
pub struct SolidityValidator {
    tools: ExternalToolsConfig,
}

impl SolidityValidator {
    pub fn new(tools: ExternalToolsConfig) -> Self {
        Self { tools }
    }

    /// Write the source to a fresh scratch file and run one tool over it
    /// under the configured timeout. The scratch file is uniquely named per
    /// invocation and removed when its guard drops, on every path.
    async fn run_tool(
        &self,
        tool: &str,
        program: &str,
        extra_args: &[&str],
        source: &str,
    ) -> PipelineResult<Output> {
        let scratch = tempfile::Builder::new()
            .prefix("vulnsmith_contract_")
            .suffix(".sol")
            .tempfile()
            .map_err(|e| PipelineError::ToolError {
                tool: tool.to_string(),
                message: format!("failed to create scratch file: {}", e),
            })?;

        std::fs::write(scratch.path(), source).map_err(|e| PipelineError::ToolError {
            tool: tool.to_string(),
            message: format!("failed to write scratch file: {}", e),
        })?;

        debug!("Running {} on {}", tool, scratch.path().display());

        let mut command = Command::new(program);
        command.args(extra_args).arg(scratch.path());
        // The child must not outlive an expired timeout.
        command.kill_on_drop(true);

        let output = tokio::time::timeout(self.tools.timeout, command.output())
            .await
            .map_err(|_| PipelineError::ToolError {
                tool: tool.to_string(),
                message: format!("timed out after {:?}", self.tools.timeout),
            })?
            .map_err(|e| PipelineError::ToolError {
                tool: tool.to_string(),
                message: format!("failed to invoke {}: {}", program, e),
            })?;

        Ok(output)
    }

    /// Turn raw analyzer output into a report. Empty output from a failed
    /// run means the tool itself broke, which is distinct from the analyzer
    /// reporting issues.
    pub(crate) fn classify_analyzer_output(
        stdout: &str,
        exit_ok: bool,
    ) -> PipelineResult<AnalysisReport> {
        if stdout.trim().is_empty() && !exit_ok {
            return Err(PipelineError::ToolError {
                tool: "slither".to_string(),
                message: "analyzer exited with an error and produced no output".to_string(),
            });
        }

        let issues_found = !stdout.to_lowercase().contains(NO_ISSUES_SENTINEL);
        Ok(AnalysisReport {
            raw_text: stdout.to_string(),
            issues_found,
        })
    }
}

#[async_trait]
impl ContractValidator for SolidityValidator {
    async fn compile(&self, source: &str) -> PipelineResult<CompilationResult> {
        let mut args: Vec<&str> = Vec::new();
        if self.tools.optimize {
            args.push("--optimize");
        }
        args.push("--bin");

        let output = self
            .run_tool("solc", &self.tools.solc_path, &args, source)
            .await?;

        let status = if output.status.success() {
            CompileStatus::Success
        } else {
            CompileStatus::Failure
        };
        debug!("Compiler exited with {:?}", output.status.code());

        Ok(CompilationResult {
            status,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    async fn analyze(&self, source: &str) -> PipelineResult<AnalysisReport> {
        let output = self
            .run_tool("slither", &self.tools.slither_path, &[], source)
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Self::classify_analyzer_output(&stdout, output.status.success())
    }
}
