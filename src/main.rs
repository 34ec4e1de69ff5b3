mod cli;

use crate::cli::app::App;
use crate::cli::session::Session;
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rustcalc::{CalcConfig, Calculator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rustcalc")]
#[command(about = "Decimal calculator with pluggable operations")]
struct Cli {
    /// Plugin manifest declaring extra operations (overrides CALC_PLUGIN_MANIFEST)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Log level (overrides CALC_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single operation and print the result
    Eval {
        operation: String,
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// List registered operations
    Operations,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_logging(&config);

    let calculator = Calculator::from_config(&config).context("Failed to assemble calculator")?;

    match cli.command {
        Some(Command::Eval { operation, a, b }) => {
            let mut calculator = calculator;
            let result = calculator
                .execute(&operation, a.as_str(), b.as_str())
                .with_context(|| format!("{} {} {}", operation, a, b))?;
            println!("{}", result);
            Ok(())
        }
        Some(Command::Operations) => {
            for name in calculator.operations() {
                println!("{}", name);
            }
            Ok(())
        }
        None => {
            let mut app = App::new(Session::new(calculator));
            app.run().context("Terminal session failed")
        }
    }
}

fn load_config(cli: &Cli) -> Result<CalcConfig> {
    let mut config = CalcConfig::from_env().map_err(|e| anyhow!(e))?;

    if let Some(level) = cli.log_level.as_deref() {
        config = config.log_level(level);
    }
    if let Some(path) = &cli.manifest {
        config = config.plugin_manifest(path.clone());
    }

    config.validate().map_err(|e| anyhow!(e))?;
    Ok(config)
}

fn init_logging(config: &CalcConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
