mod config;
mod logging;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use pharmagen_core::{catalog_json_schema, product_json_schema};
use pharmagen_generate::{GenerationEngine, GenerationError};
use thiserror::Error;

use config::resolve_options;
use logging::{LogFormat, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "pharmagen", version, about = "Synthetic pharmacy catalog generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate products, seed SQL, transactions and the search index.
    Generate(GenerateArgs),
    /// Print the JSON Schema of generated records.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML file with generation options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory (overrides the config file).
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,
    /// Console log format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Emit the schema of the full `products.json` document instead of a
    /// single product.
    #[arg(long, default_value_t = false)]
    catalog: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Schema(args) => run_schema(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        config,
        out_dir,
        seed,
        log_format,
    } = args;

    let options = resolve_options(config.as_deref(), out_dir, seed)?;

    std::fs::create_dir_all(&options.out_dir)?;
    init_logging(&options.out_dir.join("logs.ndjson"), log_format)?;

    tracing::info!(
        event = "run_started",
        config = %config
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        out_dir = %options.out_dir.display()
    );

    let timer = Instant::now();
    let engine = GenerationEngine::new(options);
    let result = match engine.run() {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(event = "run_finished", status = "failed", error = %err);
            return Err(err.into());
        }
    };

    for file in &result.report.files {
        tracing::info!(event = "file_created", path = %file.path.display(), bytes = file.bytes);
    }
    tracing::info!(
        event = "run_finished",
        status = "success",
        seed = result.report.seed,
        products = result.report.products_total,
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let json = if args.catalog {
        serde_json::to_string_pretty(&catalog_json_schema())?
    } else {
        serde_json::to_string_pretty(&product_json_schema())?
    };
    println!("{json}");
    Ok(())
}
