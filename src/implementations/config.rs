use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the generation-service credential
pub const API_KEY_ENV_VAR: &str = "COHERE_API_KEY";

const DEFAULT_API_ENDPOINT: &str = "https://api.cohere.ai/v1/generate";
const DEFAULT_MODEL: &str = "command-r-plus-08-2024";
const DEFAULT_MAX_TOKENS: usize = 3900;
const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_STOP_SEQUENCE: &str = "END";

/// Base instruction prepended to every generation prompt. The complexity
/// level and vulnerability list are appended per request.
const DEFAULT_PROMPT_TEMPLATE: &str = r#"You are a Solidity engineer producing samples for a smart-contract security research corpus.

Write one complete Solidity contract that compiles under a recent solc release.
The contract must genuinely contain the requested weaknesses in its logic, not
as comments. Output only Solidity source code with no surrounding explanation,
and finish your answer with END on its own line."#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required API key: set {0} in the environment or api_key in the config file")]
    MissingApiKey(String),
}

/// Configuration for the contract generation service
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GeneratorConfig {
    /// API key for the generation service; falls back to the environment
    pub api_key: Option<String>,

    /// Endpoint of the generate API
    pub api_endpoint: Option<String>,

    /// Model to request
    pub model: Option<String>,

    /// Maximum tokens per generated contract
    pub max_tokens: Option<usize>,

    /// Temperature for generation (0.0-1.0)
    pub temperature: Option<f32>,

    /// Deterministic stop condition for the generation
    pub stop_sequences: Option<Vec<String>>,

    /// Base prompt template; a built-in template is used when absent
    pub prompt_template: Option<String>,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Get the API key, checking the environment if not in config
    pub fn get_api_key(&self) -> Result<String, ConfigError> {
        use log::debug;

        if let Some(api_key) = &self.api_key {
            debug!("Using API key from config");
            return Ok(api_key.clone());
        }

        match std::env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.is_empty() => {
                debug!("Using API key from {}", API_KEY_ENV_VAR);
                Ok(key)
            }
            _ => Err(ConfigError::MissingApiKey(API_KEY_ENV_VAR.to_string())),
        }
    }

    pub fn api_endpoint(&self) -> String {
        self.api_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string())
    }

    pub fn model(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn stop_sequences(&self) -> Vec<String> {
        self.stop_sequences
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_STOP_SEQUENCE.to_string()])
    }

    pub fn prompt_template(&self) -> String {
        self.prompt_template
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT_TEMPLATE.to_string())
    }
}
