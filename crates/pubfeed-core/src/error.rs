//! Error types for pubfeed-core
//!
//! Only setup and I/O problems are errors. Missing optional fields,
//! unknown talk types, ids that are not arXiv URLs and short TSV rows are
//! handled by leaving the affected fragment out.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for pubfeed operations
pub type Result<T> = std::result::Result<T, PubfeedError>;

/// Main error type for pubfeed operations
#[derive(Error, Debug)]
pub enum PubfeedError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Feed script loading errors
    #[error("Feed script error: {0}")]
    FeedScript(#[from] FeedScriptError),

    /// TSV conversion errors
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),
}

/// Feed script errors
#[derive(Error, Debug)]
pub enum FeedScriptError {
    /// No `handler({...})` call in the script
    #[error("no feed handler call found (expected `name({{ entries: [...] }});`)")]
    MissingCallback,

    /// Body is neither JSON nor a plain object literal
    #[error("invalid feed data: {0}")]
    Json(#[from] serde_json::Error),

    /// Script could not be read
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
}

/// TSV conversion errors
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Malformed tabular input (invalid UTF-8)
    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),

    /// Reading input or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the feed failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
