use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::{PipelineError, PipelineResult};
use crate::implementations::config::{ConfigError, GeneratorConfig};
use crate::models::classification::ContractClassification;
use crate::traits::contract_generator::ContractGenerator;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("API error: {0}")] Api(String),

    #[error("Network error: {0}")] Network(String),

    #[error("HTTP error: {status} - {message}")] Http {
        status: u16,
        message: String,
    },

    #[error("Failed to parse API response: {0}")] Parse(String),

    #[error("Configuration error: {0}")] Config(#[from] ConfigError),
}

impl From<GenError> for PipelineError {
    fn from(err: GenError) -> Self {
        match err {
            GenError::Config(e) => PipelineError::Config(e.to_string()),
            other => PipelineError::Generation(other.to_string()),
        }
    }
}

/// Cohere generate API request and response types
#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    max_tokens: usize,
    temperature: f32,
    stop_sequences: Vec<String>,
    return_likelihoods: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerationCandidate {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generations: Vec<GenerationCandidate>,
}

/// Implementation of the ContractGenerator trait backed by the Cohere
/// generate API.
///
/// # API Keys
/// The credential is taken from the `api_key` config field, or from the
/// COHERE_API_KEY environment variable when the config does not carry one.
pub struct CohereContractGenerator {
    config: GeneratorConfig,
    http_client: reqwest::Client,
}

impl CohereContractGenerator {
    /// Create a new generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Initialize with default configuration
    pub fn new_with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Assemble the generation prompt: base template, complexity level and
    /// comma-joined vulnerability list.
    pub(crate) fn build_prompt(&self, classification: &ContractClassification) -> String {
        format!(
            "{}\n\nComplexity level: {}\nGenerate a Solidity contract with the following vulnerabilities: {}.",
            self.config.prompt_template(),
            classification.complexity,
            classification.joined_tags()
        )
    }

    async fn call_generate_api(&self, prompt: &str) -> Result<String, GenError> {
        let api_key = self.config.get_api_key()?;
        let api_endpoint = self.config.api_endpoint();

        let request = GenerateRequest {
            model: self.config.model(),
            prompt: prompt.to_string(),
            max_tokens: self.config.max_tokens(),
            temperature: self.config.temperature(),
            stop_sequences: self.config.stop_sequences(),
            return_likelihoods: "NONE",
        };

        info!("Making generation request to {}", api_endpoint);
        debug!("Model: {}", request.model);
        debug!("Prompt length: {} characters", prompt.len());

        let response = self.http_client
            .post(&api_endpoint)
            .header("Content-Type", "application/json")
            .bearer_auth(&api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Network error while generating contract: {}", e);
                warn!("{}", error_msg);
                if e.is_timeout() {
                    warn!("Request timed out");
                }
                if e.is_connect() {
                    warn!("Connection error - check network connectivity");
                }
                GenError::Network(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error message".to_string());

            warn!("API error: HTTP {} - {}", status, error_text);
            return Err(GenError::Http {
                status,
                message: error_text,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            warn!("Failed to get response text: {}", e);
            GenError::Parse(e.to_string())
        })?;

        debug!("Response length: {} characters", response_text.len());

        let response_json: GenerateResponse = serde_json::from_str(&response_text).map_err(|e| {
            warn!("Failed to parse API response: {}", e);
            GenError::Parse(e.to_string())
        })?;

        // The pipeline only depends on the first candidate's text.
        match response_json.generations.into_iter().next() {
            Some(candidate) => {
                info!("Generation request completed successfully");
                debug!("Contract length: {} characters", candidate.text.len());
                Ok(candidate.text)
            }
            None => {
                warn!("API returned zero generation candidates");
                Err(GenError::Api("no generation candidates returned".to_string()))
            }
        }
    }
}

#[async_trait]
impl ContractGenerator for CohereContractGenerator {
    async fn generate(&self, classification: &ContractClassification) -> PipelineResult<String> {
        if classification.vulnerabilities.is_empty() {
            return Err(PipelineError::InvalidInput(
                "classification carries no vulnerability tags".to_string(),
            ));
        }

        let prompt = self.build_prompt(classification);
        let contract_text = self.call_generate_api(&prompt).await?;
        Ok(contract_text)
    }
}
