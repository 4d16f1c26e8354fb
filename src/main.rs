//! StrategyResolver - Main Entry Point
//!
//! Resolves and runs a strategy from the command line, or walks the
//! database connection singleton through its lifecycle.

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use strategy_resolver::config::{load_config, AppConfig};
use strategy_resolver::{Connection, DatabaseConnection, StrategyParams, StrategyResolver};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print which strategy applies to the discriminators
    Resolve {
        /// Primary discriminator, e.g. "paper"
        #[arg(long, env = "STRATEGY_CONDITION_ALPHA")]
        alpha: Option<String>,

        /// Secondary discriminator, e.g. "paper_quantity"
        #[arg(long, env = "STRATEGY_CONDITION_BETA")]
        beta: Option<String>,
    },

    /// Resolve, build and execute a strategy, printing its result as JSON
    Run {
        #[arg(long, env = "STRATEGY_CONDITION_ALPHA")]
        alpha: Option<String>,

        #[arg(long, env = "STRATEGY_CONDITION_BETA")]
        beta: Option<String>,

        /// Input payload as JSON
        #[arg(long, default_value = "{}")]
        input: String,

        /// Strategy parameter as name=value (repeatable)
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
    },

    /// Connect and disconnect the database singleton, printing its state
    Connection,
}

/// Load a `.env` file into the process environment
///
/// Must run before `Args::parse()` so `env = ...` arguments can see it.
/// Variables already set in the environment are kept.
fn load_dotenv(path: Option<&Path>) {
    match path {
        Some(path) => {
            dotenvy::from_path(path).ok();
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
}

fn main() -> Result<()> {
    load_dotenv(None);

    let args = Args::parse();

    let config = load_config(Some(args.config.as_str()))?;

    // Initialize logging
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.settings.log_level.clone());
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Configuration file: {}", args.config);

    match args.command {
        Command::Resolve { alpha, beta } => {
            let (alpha, beta) = discriminators(alpha, beta, &config)?;
            let descriptor = StrategyResolver::new(alpha, beta).resolve()?;
            println!("{}", descriptor.name());
        }
        Command::Run {
            alpha,
            beta,
            input,
            params,
        } => {
            let (alpha, beta) = discriminators(alpha, beta, &config)?;
            let input: serde_json::Value =
                serde_json::from_str(&input).context("--input is not valid JSON")?;
            let params = params
                .iter()
                .map(|pair| StrategyParams::parse_pair(pair))
                .collect::<strategy_resolver::Result<StrategyParams>>()?;

            let descriptor = StrategyResolver::new(alpha, beta).resolve()?;
            info!("Strategy: {}", descriptor.name());

            let strategy = descriptor.build(input, &params)?;
            let result = strategy.execute();
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Connection => {
            let connection = DatabaseConnection::instance();
            println!("{}", connection.is_connected());
            connection.connect();
            println!("{}", connection.is_connected());
            connection.disconnect();
            println!("{}", connection.is_connected());
        }
    }

    Ok(())
}

/// CLI/env values first, then the config file
fn discriminators(
    alpha: Option<String>,
    beta: Option<String>,
    config: &AppConfig,
) -> Result<(String, String)> {
    let alpha = alpha
        .or_else(|| config.resolver.condition_alpha.clone())
        .context("condition_alpha not given (--alpha or [resolver] condition_alpha)")?;
    let beta = beta
        .or_else(|| config.resolver.condition_beta.clone())
        .context("condition_beta not given (--beta or [resolver] condition_beta)")?;
    Ok((alpha, beta))
}
