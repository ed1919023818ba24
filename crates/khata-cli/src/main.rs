//! Khata CLI - Daily spending tracker
//!
//! Usage:
//!   khata init                Initialize database
//!   khata log "TEXT"          Record an expense from bank SMS text
//!   khata add 120             Record an amount directly
//!   khata status              Show today's summary
//!   khata limit set 750       Change the daily limit
//!   khata process --count 3   Run sample messages through the pipeline

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    // "Today" is resolved once here; core components never read the clock
    let today = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Log { text } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_log(&db, today, &text)
        }
        Commands::Add { amount } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(&db, today, amount)
        }
        Commands::Status => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_status(&db, today)
        }
        Commands::Limit { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_limit_show(&db),
                Some(LimitAction::Set { amount }) => commands::cmd_limit_set(&db, amount),
            }
        }
        Commands::Streak => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_streak(&db)
        }
        Commands::Process { count } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_process(&db, today, count)
        }
    }
}
