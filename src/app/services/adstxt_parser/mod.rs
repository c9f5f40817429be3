//! Record parser and validator for ads.txt / app-ads.txt content
//!
//! This module turns raw ads.txt text into valid advertising system records and
//! per-line syntax error reports. Parsing is a pure function of the input text:
//! it performs no I/O and never fails, malformed lines are returned as data.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Line splitting and orchestration over the whole input
//! - [`line_parser`] - Comment extraction, field splitting and validation of one line
//! - [`result`] - The ordered record/error container returned to callers
//!
//! ## Usage
//!
//! ```rust
//! use adstxt_validator::app::services::adstxt_parser::parse;
//!
//! let result = parse("example.com, pub-1234, DIRECT, f08c47fec0942fa0\n");
//! assert_eq!(result.records.len(), 1);
//! assert!(result.errors.is_empty());
//! ```

pub mod line_parser;
pub mod parser;
pub mod result;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_parser::{LineOutcome, parse_line};
pub use parser::{AdsTxtParser, parse};
pub use result::ParseResult;
