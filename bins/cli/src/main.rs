//! Coinage CLI
//!
//! Main entry point for the `coinage` command-line tool.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coinage_core::currency::{CurrencyRegistry, IsoCatalog};
use coinage_shared::{AppConfig, AppError, LoggingConfig};

use crate::cli::Cli;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (config, registry) = match bootstrap(&cli) {
        Ok(ready) => ready,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(AppError::Config(err.to_string()).exit_code());
        }
    };

    init_tracing(&config.logging);
    info!(
        currencies = config.catalog.currencies.len(),
        "Currency catalog loaded"
    );

    match commands::execute(&cli.command, &registry) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, code = err.error_code(), "Command failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Loads configuration and builds the currency registry it describes.
fn bootstrap(cli: &Cli) -> anyhow::Result<(AppConfig, CurrencyRegistry)> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };

    let catalog = IsoCatalog::with_definitions(&config.catalog.currencies)
        .context("Invalid currency definition in configuration")?;

    Ok((config, CurrencyRegistry::new(catalog)))
}

fn init_tracing(logging: &LoggingConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
