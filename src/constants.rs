//! Application constants for the ads.txt validator
//!
//! This module contains the fixed vocabulary of the ads.txt record format,
//! default values for the CLI, and the column names used for export.

// =============================================================================
// Record Format
// =============================================================================

/// Separator between the fields of an advertising system record
pub const FIELD_DELIMITER: char = ',';

/// Marker that starts a comment; everything after the first one is comment text
pub const COMMENT_MARKER: char = '#';

/// Minimum number of fields a record line must carry (domain, publisher ID, type)
pub const MIN_FIELDS: usize = 3;

/// Account type values accepted in the third field
pub mod account_types {
    /// Publisher directly controls the advertising system account
    pub const DIRECT: &str = "DIRECT";

    /// Account is operated by an authorized third party
    pub const RESELLER: &str = "RESELLER";
}

// =============================================================================
// Source Discovery
// =============================================================================

/// File names picked up when a directory is given as input
pub const ADSTXT_FILE_NAMES: &[&str] = &["ads.txt", "app-ads.txt"];

/// Input argument that stands for standard input/output
pub const STDIO_MARKER: &str = "-";

/// Source name used when text is read from standard input
pub const STDIN_SOURCE_NAME: &str = "stdin";

// =============================================================================
// Reporting Defaults
// =============================================================================

/// Number of partners listed in the top-partner ranking
pub const DEFAULT_TOP_PARTNERS: usize = 10;

/// Maximum number of syntax errors printed in human reports
pub const DEFAULT_MAX_ERRORS_SHOWN: usize = 50;

/// Prefix for exported record files
pub const CLEANED_FILE_PREFIX: &str = "cleaned_";

/// Header row for exported records
pub const RECORD_CSV_HEADERS: [&str; 5] = [
    "Domain",
    "Publisher_ID",
    "Account_Type",
    "Certification_ID",
    "Comment",
];

/// Header row for exported syntax errors
pub const ERROR_CSV_HEADERS: [&str; 3] = ["Line", "Content", "Error"];

/// Default worker count when the host CPU count cannot be used
pub fn default_workers() -> usize {
    num_cpus::get().max(1)
}
