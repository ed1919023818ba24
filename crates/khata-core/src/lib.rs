//! Khata Core Library
//!
//! Shared functionality for the Khata daily spending tracker:
//! - Expense amount extraction from bank notification text
//! - Persisted record store (expenses, config, streak)
//! - Per-day expense ledger and summaries
//! - Daily limit configuration and classification
//! - Days-under-limit streak state machine
//! - Pipeline orchestration over message source / notification sink
//!   boundaries

pub mod agent;
pub mod db;
pub mod error;
pub mod ledger;
pub mod limit;
pub mod models;
pub mod parse;
pub mod streak;

pub use agent::{
    ConsoleSink, ExpenseAgent, MessageSource, NotificationSink, ProcessOutcome, SampleMessages,
};
pub use db::Database;
pub use error::{Error, Result};
pub use ledger::ExpenseLedger;
pub use limit::LimitEvaluator;
pub use models::{
    DaySummary, ExpenseLog, LimitConfig, LimitStatus, StreakState, StreakUpdate,
    DEFAULT_DAILY_LIMIT,
};
pub use parse::extract_amount;
pub use streak::StreakTracker;
