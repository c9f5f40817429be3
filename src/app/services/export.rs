//! CSV and JSON rendering of parse results
//!
//! This module turns records, syntax errors and statistics into the formats
//! handed to downstream consumers: the cleaned record CSV, the error CSV and a
//! JSON report per source.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::app::models::{ErrorReport, Record};
use crate::app::services::adstxt_parser::ParseResult;
use crate::app::services::summary::{PartnerCount, Statistics, summarize, top_partners};
use crate::constants::{CLEANED_FILE_PREFIX, ERROR_CSV_HEADERS, RECORD_CSV_HEADERS};
use crate::{Error, Result};

/// Validation report for one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// File path or `stdin`
    pub source: String,
    /// Absent when the source had no valid records
    pub statistics: Option<Statistics>,
    pub top_partners: Vec<PartnerCount>,
    pub record_count: usize,
    pub error_count: usize,
    pub errors: Vec<ErrorReport>,
}

impl Report {
    /// Build a report from a parse result
    pub fn build(source: impl Into<String>, result: &ParseResult, top_n: usize) -> Self {
        Self {
            source: source.into(),
            statistics: summarize(&result.records),
            top_partners: top_partners(&result.records, top_n),
            record_count: result.records.len(),
            error_count: result.errors.len(),
            errors: result.errors.clone(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

/// Write records as CSV, header row first
///
/// The header is written even when there are no records.
pub fn write_records_csv<'a, W, I>(writer: W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(RECORD_CSV_HEADERS)
        .map_err(|e| Error::csv("Failed to write record header", e))?;

    let mut written = 0;
    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|e| Error::csv(format!("Failed to write record for {}", record.domain), e))?;
        written += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("Failed to flush record CSV", e))?;

    debug!("Wrote {} records as CSV", written);
    Ok(written)
}

/// Write syntax errors as CSV with `Line,Content,Error` columns
pub fn write_errors_csv<'a, W, I>(writer: W, errors: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ErrorReport>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(ERROR_CSV_HEADERS)
        .map_err(|e| Error::csv("Failed to write error header", e))?;

    let mut written = 0;
    for report in errors {
        let line = report.line_number.to_string();
        let message = report.message();
        csv_writer
            .write_record([line.as_str(), report.content.as_str(), message.as_str()])
            .map_err(|e| Error::csv(format!("Failed to write error for line {}", line), e))?;
        written += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("Failed to flush error CSV", e))?;

    debug!("Wrote {} syntax errors as CSV", written);
    Ok(written)
}

/// Write the syntax errors of several reports as one CSV with a leading
/// `Source` column
pub fn write_report_errors_csv<W: Write>(writer: W, reports: &[Report]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut header = vec!["Source"];
    header.extend(ERROR_CSV_HEADERS);
    csv_writer.write_record(&header)?;

    let mut written = 0;
    for report in reports {
        for error in &report.errors {
            let line = error.line_number.to_string();
            let message = error.message();
            csv_writer.write_record([
                report.source.as_str(),
                line.as_str(),
                error.content.as_str(),
                message.as_str(),
            ])?;
            written += 1;
        }
    }

    csv_writer.flush()?;
    Ok(written)
}

/// Render reports as pretty-printed JSON
pub fn reports_to_json(reports: &[Report]) -> Result<String> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| Error::json("Failed to serialize validation report", e))
}

/// File name for the cleaned export of a source, e.g. `cleaned_app-ads.txt.csv`
pub fn cleaned_file_name(source_name: &str) -> String {
    let base = Path::new(source_name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_name.to_string());
    format!("{}{}.csv", CLEANED_FILE_PREFIX, base)
}
