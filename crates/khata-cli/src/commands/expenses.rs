//! Expense recording and summary commands (log, add, status)

use anyhow::Result;
use chrono::NaiveDate;
use khata_core::db::Database;
use khata_core::{extract_amount, ExpenseLedger, LimitEvaluator, StreakTracker};
use tracing::debug;

/// Record an expense parsed from raw bank SMS text
pub fn cmd_log(db: &Database, today: NaiveDate, text: &str) -> Result<()> {
    let Some(amount) = extract_amount(text) else {
        debug!("Notification text produced no expense: {:?}", text);
        println!("ℹ️  No expense found in that text");
        println!("   (credit notifications and text without an amount are ignored)");
        return Ok(());
    };

    record_and_report(db, today, amount)
}

/// Record an expense amount directly
pub fn cmd_add(db: &Database, today: NaiveDate, amount: i64) -> Result<()> {
    record_and_report(db, today, amount)
}

fn record_and_report(db: &Database, today: NaiveDate, amount: i64) -> Result<()> {
    let ledger = ExpenseLedger::new(db);
    ledger.record(today, amount)?;
    println!("💾 Logged ₹{} on {}", amount, today);

    let summary = ledger.summary_for(today)?;
    let limits = LimitEvaluator::new(db);
    let status = limits.classify(summary.total)?;

    // Exceeded takes display precedence over the warning band
    if status.exceeded {
        println!(
            "🚨 LIMIT EXCEEDED! ₹{} / ₹{} ({}% used)",
            summary.total, status.limit, status.percentage
        );
    } else if status.warning {
        println!(
            "⚠️  Near daily limit: ₹{} / ₹{} ({}% used)",
            summary.total, status.limit, status.percentage
        );
    } else {
        println!(
            "✅ Within budget: ₹{} / ₹{} ({}% used)",
            summary.total, status.limit, status.percentage
        );
    }

    let streak = StreakTracker::new(db).check_and_update(today)?;
    if streak.streak_broken {
        println!(
            "💔 Streak broken. Starting fresh (best: {} days)",
            streak.best_streak
        );
    } else {
        println!(
            "🔥 Streak: {} days (best: {})",
            streak.current_streak, streak.best_streak
        );
    }

    Ok(())
}

/// Show the day's summary without recording anything
pub fn cmd_status(db: &Database, today: NaiveDate) -> Result<()> {
    let ledger = ExpenseLedger::new(db);
    let limits = LimitEvaluator::new(db);
    let tracker = StreakTracker::new(db);

    let summary = ledger.summary_for(today)?;
    let status = limits.classify(summary.total)?;
    let remaining = limits.remaining(summary.total)?;

    println!();
    println!("📊 Khata - {}", today);
    println!("   ─────────────────────────────");
    println!("   Expenses:  {}", summary.count);
    if !summary.amounts.is_empty() {
        let amounts: Vec<String> = summary.amounts.iter().map(|a| format!("₹{}", a)).collect();
        println!("   Amounts:   {}", amounts.join(", "));
    }
    println!("   Total:     ₹{} / ₹{}", summary.total, status.limit);
    println!("   Remaining: ₹{}", remaining);

    if status.exceeded {
        println!("   🚨 Over the daily limit ({}% used)", status.percentage);
    } else if status.warning {
        println!("   ⚠️  Near the daily limit ({}% used)", status.percentage);
    }

    println!(
        "   🔥 Streak:  {} days (best: {})",
        tracker.current()?,
        tracker.best()?
    );
    println!("   Days tracked: {}", ledger.days_tracked()?);
    println!();

    Ok(())
}
