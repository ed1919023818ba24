//! Pipeline orchestration over the external boundaries
//!
//! Wires parser, ledger, limit, and streak together behind two opaque
//! boundaries: a message source producing raw notification text and a
//! notification sink consuming title/message alerts. Real device
//! integrations implement the traits; the built-in sample source and
//! console sink cover demos and tests.

use chrono::NaiveDate;
use tracing::info;

use crate::db::Database;
use crate::error::Result;
use crate::ledger::ExpenseLedger;
use crate::limit::LimitEvaluator;
use crate::models::{DaySummary, LimitStatus, StreakUpdate};
use crate::parse::extract_amount;
use crate::streak::StreakTracker;

/// Opaque producer of raw notification text
pub trait MessageSource {
    /// Next raw message, or `None` when the source is drained
    fn next_message(&mut self) -> Option<String>;
}

impl<T: MessageSource + ?Sized> MessageSource for &mut T {
    fn next_message(&mut self) -> Option<String> {
        (**self).next_message()
    }
}

/// Fire-and-forget consumer of user alerts
pub trait NotificationSink {
    fn notify(&mut self, title: &str, message: &str);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &mut T {
    fn notify(&mut self, title: &str, message: &str) {
        (**self).notify(title, message)
    }
}

const SAMPLE_MESSAGES: &[&str] = &[
    "₹299 debited from your account ending 1234 for Amazon purchase. Available balance: ₹5000",
    "Rs.120 spent via UPI to Zomato. Transaction ID: 123456789",
    "Rs 150 spent at Flipkart using card ending 5678",
    "INR 200 paid to Uber. Thank you for using our service",
    "₹75 debited for Spotify subscription",
];

/// Deterministic rotation through realistic bank SMS samples.
///
/// Stands in for a device integration while still exercising the full
/// pipeline end to end.
#[derive(Debug, Default)]
pub struct SampleMessages {
    next: usize,
}

impl SampleMessages {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageSource for SampleMessages {
    fn next_message(&mut self) -> Option<String> {
        let msg = SAMPLE_MESSAGES[self.next % SAMPLE_MESSAGES.len()];
        self.next += 1;
        Some(msg.to_string())
    }
}

/// Sink that prints alerts to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, title: &str, message: &str) {
        println!("📱 {}: {}", title, message);
    }
}

/// Outcome of processing one message
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    /// The source had nothing to offer
    NoMessage,
    /// The message was not an expense (a credit, or no amount found)
    NotAnExpense,
    /// An expense was recorded and evaluated
    Recorded {
        amount: i64,
        summary: DaySummary,
        status: LimitStatus,
        streak: StreakUpdate,
    },
}

/// Drives messages one at a time through parse → record → classify →
/// streak
pub struct ExpenseAgent<'a, S, N> {
    db: &'a Database,
    source: S,
    sink: N,
}

impl<'a, S: MessageSource, N: NotificationSink> ExpenseAgent<'a, S, N> {
    pub fn new(db: &'a Database, source: S, sink: N) -> Self {
        Self { db, source, sink }
    }

    /// Pull the next message and run it through the full pipeline.
    ///
    /// `today` is supplied by the caller; the agent never reads a clock.
    pub fn process_next(&mut self, today: NaiveDate) -> Result<ProcessOutcome> {
        let Some(text) = self.source.next_message() else {
            return Ok(ProcessOutcome::NoMessage);
        };

        let Some(amount) = extract_amount(&text) else {
            info!("No expense found in message");
            return Ok(ProcessOutcome::NotAnExpense);
        };

        let ledger = ExpenseLedger::new(self.db);
        ledger.record(today, amount)?;

        let summary = ledger.summary_for(today)?;
        let status = LimitEvaluator::new(self.db).classify(summary.total)?;

        // Exceeded takes display precedence over the warning band
        if status.exceeded {
            self.sink.notify(
                "Spending Alert",
                &format!(
                    "You've exceeded your daily limit! Total: ₹{} / ₹{}",
                    summary.total, status.limit
                ),
            );
        } else if status.warning {
            self.sink.notify(
                "Spending Warning",
                &format!(
                    "You're at ₹{} / ₹{}. Be careful!",
                    summary.total, status.limit
                ),
            );
        }

        let streak = StreakTracker::new(self.db).check_and_update(today)?;

        Ok(ProcessOutcome::Recorded {
            amount,
            summary,
            status,
            streak,
        })
    }
}
