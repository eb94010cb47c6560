//! CLI command definitions.

pub mod health;
pub mod rsvps;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the rsvp API.
#[derive(Debug, Parser)]
#[command(name = "rsvp-client")]
#[command(about = "CLI client for the rsvp API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "RSVP_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// RSVP management.
    Rsvps(rsvps::RsvpsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
