use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the whole pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub storage: StorageConfig,
    pub tools: ExternalToolsConfig,
    /// Compile attempts per contract before the iteration is skipped
    pub max_compile_retries: u32,
}

/// Where contract, report and label files land
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub contracts_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl StorageConfig {
    /// Both artifact directories under a single output root
    pub fn under_root(root: &std::path::Path) -> Self {
        Self {
            contracts_dir: root.join("contracts"),
            reports_dir: root.join("reports"),
        }
    }
}

/// Configuration for the external compile/analyze tools
#[derive(Debug, Clone)]
pub struct ExternalToolsConfig {
    pub solc_path: String,
    pub slither_path: String,
    /// Pass --optimize to the compiler
    pub optimize: bool,
    /// Bound on each tool invocation; expiry surfaces as a tool error
    pub timeout: Duration,
}

impl Default for ExternalToolsConfig {
    fn default() -> Self {
        Self {
            solc_path: "solc".to_string(),
            slither_path: "slither".to_string(),
            optimize: false,
            timeout: Duration::from_secs(120),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::under_root(std::path::Path::new("output_contracts")),
            tools: ExternalToolsConfig::default(),
            max_compile_retries: 3,
        }
    }
}
