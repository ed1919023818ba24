//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use khata_core::db::Database;
use khata_core::LimitEvaluator;

/// Open (or create) the database at the given path
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path.to_string_lossy();
    Database::open(&path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;

    // First read persists the default limit
    let limit = LimitEvaluator::new(&db)
        .daily_limit()
        .context("Failed to seed default limit")?;
    println!("   Daily limit: ₹{}", limit);

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record an expense: khata log \"₹299 debited for Amazon\"");
    println!("  2. Check your day:    khata status");

    Ok(())
}
