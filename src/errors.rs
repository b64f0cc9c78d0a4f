//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Sheet file error: {0}")]
    Sheet(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("The description must not be omitted for a regular task (not stop or resume)")]
    MissingDescription,

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Attempted to resume task {index}, but there are only {count} entries")]
    ResumeOutOfRange { index: i64, count: usize },

    #[error("Cannot distribute {total_minutes} tracked minutes: the day has no major task time")]
    NoMajorTime { total_minutes: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
