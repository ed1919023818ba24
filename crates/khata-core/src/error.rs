//! Error types for Khata

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid expense amount: {0} (must be positive)")]
    InvalidAmount(i64),

    #[error("Invalid daily limit: {0} (must be positive)")]
    InvalidLimit(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
