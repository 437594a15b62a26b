//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{check_cmd, schedule_cmd};

#[derive(Parser)]
#[command(name = "taskplan")]
#[command(author, version, about = "Dependency-aware task scheduling for project task lists")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an execution order for a schedule request
    Schedule {
        /// Path to a JSON request file, or '-' to read from stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Validate a schedule request without printing an order
    Check {
        /// Path to a JSON request file, or '-' to read from stdin
        #[arg(default_value = "-")]
        input: String,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("taskplan starting");

    match cli.command {
        Commands::Schedule { input } => {
            output.verbose_ctx("schedule", &format!("Reading request from: {}", input));
            schedule_cmd::run(&output, &input)?
        }
        Commands::Check { input } => {
            output.verbose_ctx("check", &format!("Reading request from: {}", input));
            check_cmd::run(&output, &input)?
        }
    }

    Ok(())
}
