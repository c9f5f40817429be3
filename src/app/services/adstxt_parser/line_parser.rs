//! Single-line parsing for ads.txt records
//!
//! This module handles one line of input: comment extraction, comma splitting,
//! field count and account type validation, and record construction.

use crate::app::models::{AccountType, ErrorKind, ErrorReport, Record};
use crate::constants::{COMMENT_MARKER, FIELD_DELIMITER, MIN_FIELDS};
use tracing::trace;

/// What a single input line turned into
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Blank or comment-only line
    Skipped,

    /// Line passed validation
    Record(Record),

    /// Line failed validation
    Error(ErrorReport),
}

/// Parse a single line of ads.txt content
///
/// `line_number` is the 1-based position of the line in the original input and
/// is only used to label error reports.
pub fn parse_line(line_number: usize, raw_line: &str) -> LineOutcome {
    let line = raw_line.trim();
    if line.is_empty() {
        return LineOutcome::Skipped;
    }

    let (content, comment) = split_comment(line);
    if content.is_empty() {
        trace!("Line {}: comment only", line_number);
        return LineOutcome::Skipped;
    }

    let fields = split_fields(content);
    match validate_fields(&fields) {
        Ok(account_type) => LineOutcome::Record(build_record(&fields, account_type, comment)),
        Err(kind) => {
            trace!("Line {}: {}", line_number, kind);
            LineOutcome::Error(ErrorReport::new(line_number, content, kind))
        }
    }
}

/// Split a trimmed line at the first comment marker
///
/// Returns the record portion and the comment text, both trimmed. The comment
/// is empty when the line has no marker.
pub fn split_comment(line: &str) -> (&str, &str) {
    match line.split_once(COMMENT_MARKER) {
        Some((content, comment)) => (content.trim(), comment.trim()),
        None => (line, ""),
    }
}

/// Split the record portion of a line into trimmed fields
///
/// Every delimiter splits, quoting and escaping are not recognised.
pub fn split_fields(content: &str) -> Vec<&str> {
    content.split(FIELD_DELIMITER).map(str::trim).collect()
}

/// Check field count and account type, stopping at the first failure
pub fn validate_fields(fields: &[&str]) -> Result<AccountType, ErrorKind> {
    if fields.len() < MIN_FIELDS {
        return Err(ErrorKind::TooFewFields {
            found: fields.len(),
        });
    }

    let raw_type = fields[2];
    raw_type
        .parse::<AccountType>()
        .map_err(|_| ErrorKind::InvalidAccountType {
            value: raw_type.to_string(),
        })
}

/// Build a record from validated fields
///
/// Fields beyond the certification ID are ignored.
fn build_record(fields: &[&str], account_type: AccountType, comment: &str) -> Record {
    Record {
        domain: fields[0].to_lowercase(),
        publisher_id: fields[1].to_string(),
        account_type,
        certification_id: fields.get(3).map(|s| s.to_string()).unwrap_or_default(),
        comment: comment.to_string(),
    }
}
