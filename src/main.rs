//! Userverse Models - command-line entry point
//!
//! Validates JSON payloads against the Userverse models and prints their JSON
//! Schemas. Output goes to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use userverse_models::{
    json_schema, validate_json, AppErrorResponseModel, Config, GenericResponseModel, ModelKind,
};

#[derive(Debug, Parser)]
#[command(name = "userverse-models", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a JSON payload and print its canonical form
    Validate {
        /// Model to validate against
        #[arg(value_enum)]
        model: ModelKind,

        /// Read input from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the JSON Schema of a model
    Schema {
        #[arg(value_enum)]
        model: ModelKind,
    },
}

fn main() -> Result<ExitCode> {
    // Seed LOG_LEVEL from .env before the subscriber reads it
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr only so stdout stays machine-readable)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { model, input } => {
            let raw = read_input(input.as_ref())?;
            info!(model = model.type_name(), bytes = raw.len(), "Validating input");

            match validate_json(model, &raw) {
                Ok(data) => {
                    let message = format!("{} is valid", model.type_name());
                    print_json(&GenericResponseModel::new(message, data), config.pretty_json)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    error!(model = model.type_name(), "Validation failed: {}", e);
                    print_json(&AppErrorResponseModel::from(&e), config.pretty_json)?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Schema { model } => {
            print_json(&json_schema(model)?, config.pretty_json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Level used before `Config` is loaded; a blank `LOG_LEVEL` falls back to "error".
fn log_level() -> String {
    std::env::var("LOG_LEVEL")
        .ok()
        .filter(|level| !level.trim().is_empty())
        .unwrap_or_else(|| "error".to_string())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
