//! Domain models for Khata

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default daily spending limit in whole rupees
pub const DEFAULT_DAILY_LIMIT: i64 = 500;

/// Per-day expense amounts, keyed by calendar date.
///
/// Amounts within a day keep insertion order; the order carries no meaning
/// beyond display. Days are never removed once created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseLog {
    days: BTreeMap<NaiveDate, Vec<i64>>,
}

impl ExpenseLog {
    /// Amounts recorded for the given date, oldest first
    pub fn amounts_for(&self, date: NaiveDate) -> &[i64] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append an amount to the given date's sequence
    pub fn push(&mut self, date: NaiveDate, amount: i64) {
        self.days.entry(date).or_default().push(amount);
    }

    /// Number of days with at least one recorded expense
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

/// Persisted daily-limit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitConfig {
    pub daily_limit: i64,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            daily_limit: DEFAULT_DAILY_LIMIT,
        }
    }
}

/// Persisted streak state
///
/// `best_streak` is monotonically non-decreasing. `current_streak` resets
/// to zero on an over-limit day or a skipped day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_update_date: Option<NaiveDate>,
}

/// One day's spending at a glance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total: i64,
    pub count: usize,
    pub amounts: Vec<i64>,
}

/// A day total classified against the daily limit
///
/// `warning` and `exceeded` can both be true; exceeded takes display
/// precedence in user-facing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LimitStatus {
    pub limit: i64,
    /// Share of the limit used, rounded to one decimal place
    pub percentage: f64,
    /// Total is at or above 80% of the limit
    pub warning: bool,
    /// Total is strictly above the limit
    pub exceeded: bool,
}

/// Result of one streak transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakUpdate {
    pub current_streak: u32,
    pub best_streak: u32,
    /// An over-limit day or a skipped day ended the previous run
    pub streak_broken: bool,
    /// The streak had already been advanced for this date; nothing changed
    pub already_updated: bool,
}
