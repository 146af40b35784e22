//! Unified application error type.
//! All modules (models, core, store, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid time '{value}' in field '{field}': expected HH:MM with hour 00-23 and minute 00-59")]
    InvalidTime { field: &'static str, value: String },

    #[error("Invalid 12-hour clock value '{value}' in field '{field}'")]
    InvalidClock { field: &'static str, value: String },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0}")]
    InvalidMonth(String),

    #[error("Chart start hour out of range 0-23: {0}")]
    InvalidWindowHour(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AppError {
    pub fn invalid_time(field: &'static str, value: impl Into<String>) -> Self {
        AppError::InvalidTime {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_clock(field: &'static str, value: impl Into<String>) -> Self {
        AppError::InvalidClock {
            field,
            value: value.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
