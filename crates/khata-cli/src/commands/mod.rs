//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_db) and `init`
//! - `expenses` - Recording and summarizing expenses (log, add, status)
//! - `limits` - Daily limit commands (limit, limit set)
//! - `streaks` - Streak display (streak)
//! - `process` - Sample-message pipeline (process)

pub mod core;
pub mod expenses;
pub mod limits;
pub mod process;
pub mod streaks;

// Re-export command functions for main.rs
pub use core::*;
pub use expenses::*;
pub use limits::*;
pub use process::*;
pub use streaks::*;
