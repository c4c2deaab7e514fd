//! Command-line interface for the Watchgrid coverage engine.
#![forbid(unsafe_code)]

mod demo;
mod error;
mod plan;

use clap::{Parser, Subcommand};

use demo::DemoArgs;
use plan::PlanArgs;

pub use error::CliError;

/// Run the Watchgrid CLI with the current process arguments.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, request loading, or
/// optimization fails; the binary reports it on stderr and exits non-zero.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli, &mut stdout)
}

fn dispatch(cli: Cli, writer: &mut dyn std::io::Write) -> Result<(), CliError> {
    match cli.command {
        Command::Plan(args) => plan::run_plan(args, writer),
        Command::Demo(args) => demo::run_demo(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "watchgrid",
    about = "Coverage planning for fixed sensor deployments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimize a deployment described by a JSON request file.
    Plan(PlanArgs),
    /// Optimize the built-in sample deployment.
    Demo(DemoArgs),
}

#[cfg(test)]
mod tests;
