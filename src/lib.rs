pub mod catalog;
pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod pipeline;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ExternalToolsConfig, PipelineConfig, StorageConfig};
pub use errors::{PipelineError, PipelineResult};
pub use implementations::cohere_generator::CohereContractGenerator;
pub use implementations::config::GeneratorConfig;
pub use implementations::fs_store::FsArtifactStore;
pub use implementations::solidity_validator::SolidityValidator;
pub use models::{
    artifact::StoredArtifact,
    classification::{Complexity, ContractClassification},
    contract::GeneratedContract,
    validation::{AnalysisReport, CompilationResult, CompileStatus},
};
pub use pipeline::{PipelineOrchestrator, RunSummary};
pub use traits::{ArtifactStore, ContractGenerator, ContractValidator};
