//! Per-day expense ledger
//!
//! Append-only amounts grouped by calendar date, backed by the persisted
//! expenses record. Every operation is a full read-modify-write cycle
//! against that record, and every date is supplied by the caller - the
//! ledger never consults a clock.

use chrono::NaiveDate;
use tracing::debug;

use crate::db::{Database, EXPENSES_RECORD};
use crate::error::{Error, Result};
use crate::models::{DaySummary, ExpenseLog};

pub struct ExpenseLedger<'a> {
    db: &'a Database,
}

impl<'a> ExpenseLedger<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Append an expense to the given date's sequence.
    ///
    /// Non-positive amounts are rejected and leave stored state unchanged.
    pub fn record(&self, date: NaiveDate, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(Error::InvalidAmount(amount));
        }

        let (mut log, _) = self.db.load_or_default::<ExpenseLog>(EXPENSES_RECORD)?;
        log.push(date, amount);
        self.db.save_record(EXPENSES_RECORD, &log)?;

        debug!("Recorded expense of {} on {}", amount, date);
        Ok(())
    }

    /// All amounts recorded for the date, oldest first (empty if none)
    pub fn expenses_for(&self, date: NaiveDate) -> Result<Vec<i64>> {
        let (log, _) = self.db.load_or_default::<ExpenseLog>(EXPENSES_RECORD)?;
        Ok(log.amounts_for(date).to_vec())
    }

    /// Total spent on the date (0 if none)
    pub fn total_for(&self, date: NaiveDate) -> Result<i64> {
        Ok(self.expenses_for(date)?.iter().sum())
    }

    /// Number of expenses recorded on the date
    pub fn count_for(&self, date: NaiveDate) -> Result<usize> {
        Ok(self.expenses_for(date)?.len())
    }

    /// Total, count, and individual amounts for the date
    pub fn summary_for(&self, date: NaiveDate) -> Result<DaySummary> {
        let amounts = self.expenses_for(date)?;
        Ok(DaySummary {
            date,
            total: amounts.iter().sum(),
            count: amounts.len(),
            amounts,
        })
    }

    /// Number of days with at least one recorded expense
    pub fn days_tracked(&self) -> Result<usize> {
        let (log, _) = self.db.load_or_default::<ExpenseLog>(EXPENSES_RECORD)?;
        Ok(log.day_count())
    }
}
