use anyhow::{anyhow, Result};
use clap::Parser;
use dotenv::dotenv;
use log::info;

use vulnsmith::config::{ExternalToolsConfig, PipelineConfig, StorageConfig};
use vulnsmith::implementations::config::GeneratorConfig;
use vulnsmith::implementations::{CohereContractGenerator, FsArtifactStore, SolidityValidator};
use vulnsmith::pipeline::PipelineOrchestrator;

mod cli;
use cli::{ui, VulnsmithCli};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up COHERE_API_KEY from a local .env when present
    dotenv().ok();

    let cli = VulnsmithCli::parse();

    setup_logging(&cli.log_level);

    println!("vulnsmith - labeled vulnerable-contract corpus generator");

    let generator_config = match &cli.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ui::print_error(&e.to_string());
                return Err(anyhow!(e));
            }
        },
        None => GeneratorConfig::default(),
    };

    // Startup precondition: the credential must be present before any
    // iteration runs. Per-iteration failures are logged, never surfaced
    // through the exit code.
    if let Err(e) = generator_config.get_api_key() {
        ui::print_error(&e.to_string());
        return Err(anyhow!(e));
    }

    let pipeline_config = PipelineConfig {
        storage: StorageConfig::under_root(&cli.output),
        tools: ExternalToolsConfig {
            optimize: cli.optimize,
            ..Default::default()
        },
        max_compile_retries: cli.max_retries,
    };

    info!(
        "Generating {} contract(s) into {}",
        cli.contracts,
        cli.output.display()
    );

    let generator = CohereContractGenerator::new(generator_config);
    let validator = SolidityValidator::new(pipeline_config.tools.clone());
    let store = FsArtifactStore::new(pipeline_config.storage.clone());
    let orchestrator = PipelineOrchestrator::new(
        generator,
        validator,
        store,
        pipeline_config.max_compile_retries,
    );

    let progress = ui::create_progress_bar(cli.contracts as u64, "Generating contracts...");
    let summary = orchestrator.run(cli.contracts, Some(&progress)).await;
    progress.finish_with_message("Batch finished");

    ui::print_result("Requested", &summary.requested.to_string());
    ui::print_result("Completed", &summary.completed.to_string());
    ui::print_result("Skipped", &summary.skipped.to_string());

    if summary.completed > 0 {
        ui::print_success("Corpus generation completed!");
    } else if summary.requested > 0 {
        ui::print_warning("No contracts were stored; see the log for per-iteration failures.");
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
