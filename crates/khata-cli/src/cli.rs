//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Khata - track daily spending and keep your under-limit streak
#[derive(Parser)]
#[command(name = "khata")]
#[command(about = "Daily spending tracker fed by bank SMS text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "khata.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override "today" (YYYY-MM-DD); defaults to the local date
    ///
    /// Useful for scripting and backfills. Core operations never read the
    /// clock themselves.
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record an expense from raw bank SMS text
    Log {
        /// The notification text, e.g. "₹299 debited for Amazon"
        text: String,
    },

    /// Record an expense amount directly
    Add {
        /// Amount in whole rupees (must be positive)
        amount: i64,
    },

    /// Show today's spending summary
    Status,

    /// Show or change the daily limit
    Limit {
        #[command(subcommand)]
        action: Option<LimitAction>,
    },

    /// Show the days-under-limit streak
    Streak,

    /// Process sample bank messages through the full pipeline
    Process {
        /// Number of messages to process
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
}

#[derive(Subcommand)]
pub enum LimitAction {
    /// Set a new daily limit
    Set {
        /// New limit in whole rupees (must be positive)
        amount: i64,
    },
}
