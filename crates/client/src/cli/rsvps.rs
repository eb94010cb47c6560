//! RSVP CLI commands.

use clap::{Parser, Subcommand};

/// RSVP management commands.
#[derive(Debug, Parser)]
pub struct RsvpsCommand {
    #[command(subcommand)]
    pub action: RsvpsAction,
}

/// Available RSVP actions.
#[derive(Debug, Subcommand)]
pub enum RsvpsAction {
    /// List all RSVPs.
    List,
    /// Get RSVP by ID.
    Get {
        /// RSVP ID.
        id: i64,
    },
    /// Create a new RSVP.
    Create {
        /// Guest name (at most 50 characters).
        #[arg(long)]
        guest_name: String,
        /// Number of people attending.
        #[arg(long)]
        total_attending: i32,
    },
    /// Update an RSVP.
    Update {
        /// RSVP ID.
        id: i64,
        /// Guest name (at most 50 characters).
        #[arg(long)]
        guest_name: String,
        /// Number of people attending.
        #[arg(long)]
        total_attending: i32,
    },
    /// Delete RSVP by ID.
    Delete {
        /// RSVP ID.
        id: i64,
    },
}
