//! ads.txt Validator Library
//!
//! A Rust library for validating and summarizing IAB `ads.txt` and `app-ads.txt`
//! files, the comma-delimited text files publishers use to declare the
//! advertising systems authorized to sell their inventory.
//!
//! This library provides tools for:
//! - Parsing raw file text into typed advertising system records
//! - Reporting per-line syntax errors without aborting the rest of the file
//! - Summarizing records by account type and distinct partner
//! - Ranking and searching partners, and exporting cleaned records as CSV
//!
//! The parser and summarizer are pure functions; reading files and standard
//! input is left to the CLI layer.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod adstxt_parser;
        pub mod export;
        pub mod summary;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AccountType, ErrorKind, ErrorReport, Record};
pub use app::services::adstxt_parser::{AdsTxtParser, ParseResult, parse};
pub use app::services::summary::{Statistics, summarize};
pub use config::ValidatorConfig;

/// Result type alias for the validator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for validator operations
///
/// Syntax problems inside an ads.txt file are not errors at this level; they are
/// returned as [`ErrorReport`] values by the parser.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV writing error
    #[error("CSV error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Value validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Input file or directory not found
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    /// Input could not be decoded as UTF-8
    #[error("Input is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Strict mode found syntax errors
    #[error("Found {count} syntax error(s) across {sources} source(s)")]
    SyntaxErrors { count: usize, sources: usize },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an input not found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an invalid encoding error
    pub fn invalid_encoding(path: impl Into<String>) -> Self {
        Self::InvalidEncoding { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a strict-mode syntax error summary
    pub fn syntax_errors(count: usize, sources: usize) -> Self {
        Self::SyntaxErrors { count, sources }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV writing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
