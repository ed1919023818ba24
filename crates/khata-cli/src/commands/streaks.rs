//! Streak display command

use anyhow::Result;
use khata_core::db::Database;
use khata_core::StreakTracker;

pub fn cmd_streak(db: &Database) -> Result<()> {
    let tracker = StreakTracker::new(db);

    println!();
    println!("🔥 Streak");
    println!("   ─────────────────────────────");
    println!("   Current: {} days", tracker.current()?);
    println!("   Best:    {} days", tracker.best()?);
    println!();

    Ok(())
}
