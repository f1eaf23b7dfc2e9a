//! promptgen - interactive prompt file generator
//!
//! CLI entry point: one pass, exit code 0 on success and 1 on any failure.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use promptgen::cli::Cli;
use promptgen::{Console, Layout, generate};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptgen")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Log to a file, never the terminal: stdout carries the menu
    let log_file = fs::File::create(log_dir.join("promptgen.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Logging initialized");
    Ok(())
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let layout = Layout::resolve(cli.template_dir.as_deref()).context("Failed to resolve template directory")?;
    info!(config = %cli.config.display(), templates = %layout.template_dir.display(), "promptgen starting");

    let mut console = Console::stdio();
    generate(&cli.config, &layout, &mut console)
        .context(format!("Failed to generate prompt from config {}", cli.config.display()))
}

fn main() -> ExitCode {
    // Usage errors are ordinary failures (exit 1); help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.exit_code() == 0 => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    // Logging is best-effort; a read-only data dir must not block generation
    if let Err(e) = setup_logging() {
        eprintln!("{} logging disabled: {:#}", "warning:".yellow(), e);
    }

    match run(&cli) {
        Ok(path) => {
            println!("{} Prompt generated successfully! Saved to: {}", "✓".green(), path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} Failed to generate prompt:", "✗".red());
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
