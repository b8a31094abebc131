/// Outcome of a single compiler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    Success,
    Failure,
}

/// Captured output of one compile attempt. Ephemeral: it is embedded in logs
/// but never persisted on its own.
#[derive(Debug, Clone)]
pub struct CompilationResult {
    pub status: CompileStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CompilationResult {
    pub fn succeeded(&self) -> bool {
        self.status == CompileStatus::Success
    }

    /// Compiler diagnostics for log messages, lossily decoded
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// The static analyzer's verdict on a successfully compiled contract
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Raw analyzer output, persisted verbatim as the report artifact
    pub raw_text: String,
    pub issues_found: bool,
}
