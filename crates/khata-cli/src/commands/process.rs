//! Sample-message pipeline command
//!
//! Pulls messages from the built-in sample source and runs each through
//! the full parse → record → classify → streak pipeline, printing what a
//! device integration would do.

use anyhow::Result;
use chrono::NaiveDate;
use khata_core::db::Database;
use khata_core::{ConsoleSink, ExpenseAgent, ProcessOutcome, SampleMessages};

pub fn cmd_process(db: &Database, today: NaiveDate, count: usize) -> Result<()> {
    let mut agent = ExpenseAgent::new(db, SampleMessages::new(), ConsoleSink);

    for _ in 0..count {
        match agent.process_next(today)? {
            ProcessOutcome::NoMessage => {
                println!("ℹ️  No more messages");
                break;
            }
            ProcessOutcome::NotAnExpense => {
                println!("ℹ️  Skipped a non-expense message");
            }
            ProcessOutcome::Recorded {
                amount,
                summary,
                status,
                streak,
            } => {
                println!(
                    "💾 Logged ₹{} - total ₹{} / ₹{} ({}% used)",
                    amount, summary.total, status.limit, status.percentage
                );
                if streak.already_updated {
                    println!(
                        "   Streak already counted today: {} days (best: {})",
                        streak.current_streak, streak.best_streak
                    );
                } else if streak.streak_broken {
                    println!("   💔 Streak broken (best: {})", streak.best_streak);
                } else {
                    println!(
                        "   🔥 Streak: {} days (best: {})",
                        streak.current_streak, streak.best_streak
                    );
                }
            }
        }
    }

    Ok(())
}
