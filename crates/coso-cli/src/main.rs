//! # coso CLI entry point
//!
//! Parses command-line arguments, loads the optional scope file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use coso_cli::components::{run_components, ComponentsArgs};
use coso_cli::config::{load_scope_file, ScopeConfig};
use coso_cli::describe::{run_describe, DescribeArgs};
use coso_cli::export::{run_export, ExportArgs};
use coso_cli::principles::{run_principle, run_principles, PrincipleArgs, PrinciplesArgs};

/// COSO Internal Control catalog.
///
/// Describes how the five COSO components apply across objectives and
/// organizational levels, and lists the 17 principles.
#[derive(Parser, Debug)]
#[command(name = "coso", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML scope file with `objectives` and `levels` lists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe the scope of one component, or all five.
    Describe(DescribeArgs),

    /// List the five components.
    Components(ComponentsArgs),

    /// List principles, optionally for one component.
    Principles(PrinciplesArgs),

    /// Show a single principle by number.
    Principle(PrincipleArgs),

    /// Export the whole catalog as JSON or YAML.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level; RUST_LOG wins when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "coso CLI starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let file_scope = match cli.config.as_deref() {
        Some(path) => load_scope_file(path)?,
        None => ScopeConfig::default(),
    };

    match cli.command {
        Commands::Describe(args) => run_describe(&args, &file_scope),
        Commands::Components(args) => run_components(&args),
        Commands::Principles(args) => run_principles(&args),
        Commands::Principle(args) => run_principle(&args),
        Commands::Export(args) => run_export(&args, &file_scope),
    }
}
