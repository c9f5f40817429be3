//! Parse result container for ads.txt processing
//!
//! Holds the two ordered outputs of a parse: valid records and syntax errors.

use crate::app::models::{ErrorReport, Record};
use serde::Serialize;

/// Records and syntax errors from one parse, both in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    /// Lines that passed validation
    pub records: Vec<Record>,

    /// Lines that failed validation
    pub errors: Vec<ErrorReport>,
}

impl ParseResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no syntax errors were found
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when the input had no record or error lines at all
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.errors.is_empty()
    }

    /// Number of lines that produced either a record or an error
    pub fn line_count(&self) -> usize {
        self.records.len() + self.errors.len()
    }

    /// Percentage of non-blank, non-comment lines that were valid
    pub fn validity_rate(&self) -> f64 {
        let total = self.line_count();
        if total == 0 {
            100.0
        } else {
            (self.records.len() as f64 / total as f64) * 100.0
        }
    }

    /// Split into records and errors
    pub fn into_parts(self) -> (Vec<Record>, Vec<ErrorReport>) {
        (self.records, self.errors)
    }
}
