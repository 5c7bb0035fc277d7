//! helm-charts - Helm chart inventory helper
//!
//! Lists the Helm charts below a directory, finds charts that share a name
//! at different paths, and lists charts changed compared to a git branch.

mod chart;
mod cli;
mod config;
mod error;
mod export;
mod git;

use clap::Parser;
use cli::Cli;
use config::{Command, Config, OutputFormat};
use error::{ChartsError, Result};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(config.quiet);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ChartsError::DuplicatesFound) => {
            eprintln!("Error: {}", ChartsError::DuplicatesFound);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn run(config: &Config) -> Result<()> {
    let exclude_dirs = config.effective_exclude_dirs();

    // === Phase 1: Discovery ===
    let charts = match &config.command {
        Command::List => chart::scan(&config.directory, &exclude_dirs, config.relative_paths)?,
        Command::ListChanged(opts) => chart::list_changed(
            &config.directory,
            &exclude_dirs,
            opts,
            config.relative_paths,
        )?,
        Command::FindDuplicates(opts) => chart::find_duplicates(
            &config.directory,
            &exclude_dirs,
            config.relative_paths,
            opts.report_mode,
        )?,
    };

    // === Phase 2: Empty Results ===
    if charts.is_empty() {
        match &config.command {
            Command::List => return Err(ChartsError::NoChartsFound),
            _ if config.output_format == OutputFormat::Json => {}
            Command::ListChanged(_) => {
                println!("Nothing was changed.");
                return Ok(());
            }
            Command::FindDuplicates(_) => {
                println!("No duplicates found.");
                return Ok(());
            }
        }
    }

    // === Phase 3: Export Results ===
    let rendered = export::render(&charts, config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&rendered)?;
    stdout.flush()?;

    if let Some(path) = config.output_file() {
        let mut file = export::create_output_file(&path)?;
        file.write_all(&rendered)?;
        file.flush()?;
    }

    // === Phase 4: Exit Code ===
    if let Command::FindDuplicates(opts) = &config.command {
        if opts.fail_on_duplicates && !charts.is_empty() {
            return Err(ChartsError::DuplicatesFound);
        }
    }

    Ok(())
}
