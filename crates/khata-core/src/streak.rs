//! Days-under-limit streak state machine
//!
//! The streak advances at most once per calendar day: the first `advance`
//! for a date decides that day's outcome and later calls are no-ops. A day
//! over the limit resets the streak, and so does any skipped day - a gap
//! of more than one day between updates means days went untracked. The
//! best streak never decreases.

use chrono::NaiveDate;
use tracing::debug;

use crate::db::{Database, STREAK_RECORD};
use crate::error::Result;
use crate::ledger::ExpenseLedger;
use crate::limit::LimitEvaluator;
use crate::models::{StreakState, StreakUpdate};

pub struct StreakTracker<'a> {
    db: &'a Database,
}

impl<'a> StreakTracker<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Current streak length in days, without mutating state
    pub fn current(&self) -> Result<u32> {
        let (state, _) = self.db.load_or_default::<StreakState>(STREAK_RECORD)?;
        Ok(state.current_streak)
    }

    /// Longest streak ever achieved, without mutating state
    pub fn best(&self) -> Result<u32> {
        let (state, _) = self.db.load_or_default::<StreakState>(STREAK_RECORD)?;
        Ok(state.best_streak)
    }

    /// Apply today's outcome to the streak.
    ///
    /// Idempotent per date: once a date has been applied, further calls
    /// for it report `already_updated` and change nothing.
    pub fn advance(&self, today: NaiveDate, is_under_limit: bool) -> Result<StreakUpdate> {
        let (mut state, _) = self.db.load_or_default::<StreakState>(STREAK_RECORD)?;

        if state.last_update_date == Some(today) {
            return Ok(StreakUpdate {
                current_streak: state.current_streak,
                best_streak: state.best_streak,
                streak_broken: false,
                already_updated: true,
            });
        }

        let mut streak_broken = false;

        // A gap of more than one day means days went untracked; the old
        // run ends before today's outcome applies
        if let Some(last) = state.last_update_date {
            if (today - last).num_days() > 1 {
                state.current_streak = 0;
                streak_broken = true;
            }
        }

        if is_under_limit {
            state.current_streak += 1;
            if state.current_streak > state.best_streak {
                state.best_streak = state.current_streak;
            }
        } else {
            state.current_streak = 0;
            streak_broken = true;
        }

        state.last_update_date = Some(today);
        self.db.save_record(STREAK_RECORD, &state)?;

        debug!(
            "Streak advanced on {}: current {} (best {})",
            today, state.current_streak, state.best_streak
        );

        Ok(StreakUpdate {
            current_streak: state.current_streak,
            best_streak: state.best_streak,
            streak_broken,
            already_updated: false,
        })
    }

    /// Read the day's ledger total and the configured limit, then advance.
    ///
    /// Spending exactly at the limit still counts as under it.
    pub fn check_and_update(&self, today: NaiveDate) -> Result<StreakUpdate> {
        let total = ExpenseLedger::new(self.db).total_for(today)?;
        let limit = LimitEvaluator::new(self.db).daily_limit()?;
        self.advance(today, total <= limit)
    }
}
