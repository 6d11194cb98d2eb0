//! Object Validator CLI
//!
//! Validates a JSON document against a schema descriptor and prints the
//! path-keyed error report.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use object_validator::{OutputFormat, Schema, Validator, ValidatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "object-validator")]
#[command(about = "Validate structured data against a declarative schema")]
struct Cli {
    /// Config file to load (optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document against a schema descriptor
    Check {
        /// Schema descriptor (JSON)
        #[arg(short, long)]
        schema: PathBuf,
        /// Document to validate (JSON)
        #[arg(short, long)]
        document: PathBuf,
        /// Print the error report on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Show the effective configuration as TOML
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = ValidatorConfig::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Check {
            schema,
            document,
            compact,
        } => {
            let descriptor = read_json(&schema)?;
            let schema = Schema::from_value(&descriptor)
                .with_context(|| format!("loading schema {}", schema.display()))?;
            let document = read_json(&document)?;

            let validator = Validator::with_config(config.validation.clone());
            validator.validate_schema(&schema)?;
            let validation = validator.validate(&document, &schema)?;

            let compact = compact || config.output.format == OutputFormat::Compact;
            let report = if compact {
                serde_json::to_string(validation.errors())?
            } else {
                serde_json::to_string_pretty(validation.errors())?
            };

            if validation.is_valid() {
                eprintln!("✅ Document is valid");
            } else {
                eprintln!("❌ {} path(s) with errors", validation.errors().len());
                println!("{}", report);
            }
            Ok(validation.is_valid())
        }

        Commands::Config { output } => {
            if let Some(path) = output {
                config.save(&path)?;
                eprintln!("✅ Configuration written to {}", path.display());
            } else {
                print!("{}", config.to_toml()?);
            }
            Ok(true)
        }
    }
}
