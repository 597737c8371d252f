//! Unified application error type.
//! All modules (source, core, export, cli) return AppError so that the
//! boundary in `main` can report a single status line.

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
    // Decoding
    // ---------------------------
    #[error("Invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Upstream generator
    // ---------------------------
    #[error("Upstream service reported a failure: {0}")]
    Upstream(String),

    #[error("No schedule loaded (expected one at {0}); run `rtimetable load` first")]
    NoSchedule(String),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid academic year: {0} (expected 1-4)")]
    InvalidYear(i64),

    #[error("Invalid view: {0}")]
    InvalidView(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
