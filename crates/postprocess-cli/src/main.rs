//! Schema postprocessor CLI
//!
//! Rewrites a generated schema file in place after code generation.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::RunContext;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
    tracing::debug!("Verbose mode enabled");

    let cwd = std::env::current_dir()?;
    let ctx = RunContext::resolve(&cwd, &cli.paths)?;

    execute_command(&ctx, cli.command.unwrap_or_default())
}

fn execute_command(ctx: &RunContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply {
            write_then_verify,
            dry_run,
        } => commands::run_apply(ctx, write_then_verify, dry_run),
        Commands::Check { diff } => commands::run_check(ctx, diff),
        Commands::Rules { json } => commands::run_rules(ctx, json),
    }
}
