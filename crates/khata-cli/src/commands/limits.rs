//! Daily limit commands (limit, limit set)

use anyhow::Result;
use khata_core::db::Database;
use khata_core::LimitEvaluator;

pub fn cmd_limit_show(db: &Database) -> Result<()> {
    let limit = LimitEvaluator::new(db).daily_limit()?;
    println!("Daily limit: ₹{}", limit);
    Ok(())
}

pub fn cmd_limit_set(db: &Database, amount: i64) -> Result<()> {
    let limits = LimitEvaluator::new(db);
    limits.set_daily_limit(amount)?;
    println!("✅ Daily limit updated to ₹{}", amount);
    Ok(())
}
