//! Core ads.txt parser implementation
//!
//! This module splits raw text into lines and dispatches each one to the
//! line parser, collecting records and errors in input order.

use tracing::debug;

use super::line_parser::{LineOutcome, parse_line};
use super::result::ParseResult;

/// Parser for ads.txt and app-ads.txt content
///
/// Stateless; kept as a type so consumers can hold and pass a parser around.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdsTxtParser;

impl AdsTxtParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw ads.txt text into records and syntax errors
    pub fn parse(&self, raw_text: &str) -> ParseResult {
        parse(raw_text)
    }
}

/// Parse raw ads.txt text into records and syntax errors
///
/// Lines are split on `\n` and numbered from 1, counting blank and
/// comment-only lines. A trailing `\r` is removed by the per-line trim.
pub fn parse(raw_text: &str) -> ParseResult {
    let mut result = ParseResult::new();
    let mut skipped = 0usize;

    for (index, line) in raw_text.split('\n').enumerate() {
        match parse_line(index + 1, line) {
            LineOutcome::Record(record) => result.records.push(record),
            LineOutcome::Error(report) => result.errors.push(report),
            LineOutcome::Skipped => skipped += 1,
        }
    }

    debug!(
        "Parsed {} records, {} syntax errors, {} blank/comment lines",
        result.records.len(),
        result.errors.len(),
        skipped
    );

    result
}
