use clap::Parser;
use std::path::PathBuf;

pub mod ui;

#[derive(Parser)]
#[command(
    name = "vulnsmith",
    about = "Generates a labeled corpus of vulnerable Solidity contracts",
    version,
    author,
    long_about = None
)]
pub struct VulnsmithCli {
    /// Number of contracts to generate
    #[arg(short, long, default_value_t = 1)]
    pub contracts: usize,

    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Root directory for generated artifacts
    #[arg(short, long, default_value = "output_contracts")]
    pub output: PathBuf,

    /// Path to a generator configuration file (YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pass --optimize to the Solidity compiler
    #[arg(long, default_value_t = false)]
    pub optimize: bool,

    /// Compile attempts per contract before the iteration is skipped
    #[arg(long, default_value_t = 3)]
    pub max_retries: u32,
}
