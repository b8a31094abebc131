use thiserror::Error;

/// Custom error types for the vulnsmith pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Compilation failed after {attempts} attempts")]
    CompileFailed { attempts: u32 },

    #[error("Error in external tool {tool}: {message}")]
    ToolError { tool: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    /// Only configuration errors abort the whole run; every other error
    /// terminates the current iteration and the batch continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PipelineError::Config(_))
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Storage(err.to_string())
    }
}

/// Result type specific to pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
