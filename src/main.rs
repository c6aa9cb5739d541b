//! Binary entry point for contact-dedup.
//!
//! This binary provides the CLI interface for the duplicate-contact
//! detection engine.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stdout/print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use contact_dedup::cli::{ScanArgs, cmd_config, cmd_scan};
use contact_dedup::observability::{LogFormat, LoggingConfig, init_logging};

/// contact-dedup - duplicate-contact detection and merge suggestions.
#[derive(Parser)]
#[command(name = "contact-dedup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run duplicate detection over a snapshot file.
    Scan(ScanArgs),

    /// Show the effective detection configuration.
    Config,
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Scan(args) => cmd_scan(args).with_context(|| {
            format!("scanning snapshot '{}'", args.input.display())
        }),
        Commands::Config => cmd_config().context("rendering configuration"),
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(LoggingConfig {
        verbose: cli.verbose,
        format: if cli.log_json {
            LogFormat::Json
        } else {
            LogFormat::Text
        },
    });

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
