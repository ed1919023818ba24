//! Daily limit configuration and classification
//!
//! Owns the persisted limit setting and classifies day totals against it.
//! The warning band starts at 80% of the limit (inclusive); exceeded means
//! strictly above the limit, so landing exactly on it is still within
//! budget.

use tracing::{debug, warn};

use crate::db::{Database, CONFIG_RECORD};
use crate::error::{Error, Result};
use crate::models::{LimitConfig, LimitStatus};

/// Fraction of the daily limit at which the warning band starts
const WARNING_THRESHOLD: f64 = 0.8;

pub struct LimitEvaluator<'a> {
    db: &'a Database,
}

impl<'a> LimitEvaluator<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Current daily limit.
    ///
    /// An absent or unreadable config record is healed back to the default
    /// and rewritten, so the next read is healthy.
    pub fn daily_limit(&self) -> Result<i64> {
        let (config, defaulted) = self.db.load_or_default::<LimitConfig>(CONFIG_RECORD)?;
        if defaulted {
            warn!(
                "Config record missing or unreadable, restoring default limit of {}",
                config.daily_limit
            );
            self.db.save_record(CONFIG_RECORD, &config)?;
        }
        Ok(config.daily_limit)
    }

    /// Change the daily limit.
    ///
    /// Non-positive values are rejected and the prior limit stays intact.
    pub fn set_daily_limit(&self, new_limit: i64) -> Result<()> {
        if new_limit <= 0 {
            return Err(Error::InvalidLimit(new_limit));
        }

        self.db.save_record(
            CONFIG_RECORD,
            &LimitConfig {
                daily_limit: new_limit,
            },
        )?;

        debug!("Daily limit set to {}", new_limit);
        Ok(())
    }

    /// Classify a day total against the current limit
    pub fn classify(&self, total: i64) -> Result<LimitStatus> {
        let limit = self.daily_limit()?;

        let percentage = if limit > 0 {
            let pct = total as f64 / limit as f64 * 100.0;
            (pct * 10.0).round() / 10.0
        } else {
            0.0
        };

        Ok(LimitStatus {
            limit,
            percentage,
            warning: total as f64 >= limit as f64 * WARNING_THRESHOLD,
            exceeded: total > limit,
        })
    }

    /// Budget left for the day; negative when over the limit
    pub fn remaining(&self, total: i64) -> Result<i64> {
        Ok(self.daily_limit()? - total)
    }
}
