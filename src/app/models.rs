//! Data models for ads.txt validation
//!
//! This module contains the core data structures produced by the parser: valid
//! advertising system records and per-line syntax error reports.

use crate::constants::{MIN_FIELDS, account_types};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Account Type
// =============================================================================

/// Relationship between the publisher and the advertising system account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Publisher directly controls the account
    Direct,

    /// Account is operated by an authorized third party on the publisher's behalf
    Reseller,
}

impl AccountType {
    /// Canonical upper-case spelling used in ads.txt files
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Direct => account_types::DIRECT,
            AccountType::Reseller => account_types::RESELLER,
        }
    }

    /// Get all account type values
    pub fn all_values() -> [AccountType; 2] {
        [AccountType::Direct, AccountType::Reseller]
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            account_types::DIRECT => Ok(AccountType::Direct),
            account_types::RESELLER => Ok(AccountType::Reseller),
            _ => Err(Error::data_validation(format!(
                "Invalid account type '{}': must be {} or {}",
                s,
                account_types::DIRECT,
                account_types::RESELLER
            ))),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record
// =============================================================================

/// A valid advertising system record
///
/// Serialized field names follow the column headers of the exported CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Advertising system domain, always lower-case
    #[serde(rename = "Domain")]
    pub domain: String,

    /// Publisher's account ID within the advertising system, kept verbatim
    #[serde(rename = "Publisher_ID")]
    pub publisher_id: String,

    /// DIRECT or RESELLER
    #[serde(rename = "Account_Type")]
    pub account_type: AccountType,

    /// Certification authority ID (e.g. TAG-ID), empty when absent
    #[serde(rename = "Certification_ID")]
    pub certification_id: String,

    /// Trailing comment text after the `#` marker, empty when absent
    #[serde(rename = "Comment")]
    pub comment: String,
}

impl Record {
    /// Whether the record carries a certification authority ID
    pub fn is_certified(&self) -> bool {
        !self.certification_id.is_empty()
    }

    pub fn is_direct(&self) -> bool {
        self.account_type == AccountType::Direct
    }
}

// =============================================================================
// Syntax Errors
// =============================================================================

/// Kind of syntax error found on a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ErrorKind {
    /// Fewer than the minimum number of comma-separated fields
    TooFewFields { found: usize },

    /// Third field is neither DIRECT nor RESELLER; `value` keeps its original case
    InvalidAccountType { value: String },
}

impl ErrorKind {
    /// Human-readable description of the error
    pub fn message(&self) -> String {
        match self {
            ErrorKind::TooFewFields { .. } => format!(
                "Insufficient parameters (minimum {} required)",
                MIN_FIELDS
            ),
            ErrorKind::InvalidAccountType { value } => format!(
                "Invalid Account Type: {} (Expected {} or {})",
                value,
                account_types::DIRECT,
                account_types::RESELLER
            ),
        }
    }

    /// Short identifier for the error kind
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::TooFewFields { .. } => "TooFewFields",
            ErrorKind::InvalidAccountType { .. } => "InvalidAccountType",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Syntax error report for a single input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// 1-based position of the line in the original input
    pub line_number: usize,

    /// Line text with the comment stripped and surrounding whitespace trimmed
    pub content: String,

    /// What was wrong with the line
    pub kind: ErrorKind,
}

impl ErrorReport {
    pub fn new(line_number: usize, content: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            line_number,
            content: content.into(),
            kind,
        }
    }

    /// Human-readable error message
    pub fn message(&self) -> String {
        self.kind.message()
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {} ({})", self.line_number, self.kind, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> Record {
        Record {
            domain: "google.com".to_string(),
            publisher_id: "pub-1234567890".to_string(),
            account_type: AccountType::Direct,
            certification_id: "f08c47fec0942fa0".to_string(),
            comment: String::new(),
        }
    }

    mod account_type_tests {
        use super::*;

        #[test]
        fn test_account_type_from_string() {
            assert_eq!(AccountType::from_str("DIRECT").unwrap(), AccountType::Direct);
            assert_eq!(AccountType::from_str("direct").unwrap(), AccountType::Direct);
            assert_eq!(
                AccountType::from_str(" Reseller ").unwrap(),
                AccountType::Reseller
            );

            // Invalid values
            assert!(AccountType::from_str("SOMETHING").is_err());
            assert!(AccountType::from_str("").is_err());
            assert!(AccountType::from_str("DIRECT RESELLER").is_err());
        }

        #[test]
        fn test_account_type_display() {
            assert_eq!(format!("{}", AccountType::Direct), "DIRECT");
            assert_eq!(format!("{}", AccountType::Reseller), "RESELLER");
            assert_eq!(AccountType::Reseller.as_str(), "RESELLER");
        }

        #[test]
        fn test_account_type_all_values() {
            let all = AccountType::all_values();
            assert_eq!(all.len(), 2);
            assert!(all.contains(&AccountType::Direct));
            assert!(all.contains(&AccountType::Reseller));
        }

        #[test]
        fn test_account_type_serde() {
            let json = serde_json::to_string(&AccountType::Reseller).unwrap();
            assert_eq!(json, "\"RESELLER\"");
            let back: AccountType = serde_json::from_str("\"DIRECT\"").unwrap();
            assert_eq!(back, AccountType::Direct);
        }
    }

    mod error_kind_tests {
        use super::*;

        #[test]
        fn test_too_few_fields_message() {
            let kind = ErrorKind::TooFewFields { found: 2 };
            assert_eq!(
                kind.message(),
                "Insufficient parameters (minimum 3 required)"
            );
            assert_eq!(kind.name(), "TooFewFields");
        }

        #[test]
        fn test_invalid_account_type_message_keeps_case() {
            let kind = ErrorKind::InvalidAccountType {
                value: "Something".to_string(),
            };
            assert_eq!(
                kind.message(),
                "Invalid Account Type: Something (Expected DIRECT or RESELLER)"
            );
            assert_eq!(kind.name(), "InvalidAccountType");
        }

        #[test]
        fn test_error_report_display() {
            let report = ErrorReport::new(
                7,
                "example.com, pub-1",
                ErrorKind::TooFewFields { found: 2 },
            );
            let text = report.to_string();
            assert!(text.starts_with("line 7:"));
            assert!(text.contains("example.com, pub-1"));
            assert_eq!(report.message(), report.kind.message());
        }
    }

    #[test]
    fn test_record_helpers() {
        let mut record = create_test_record();
        assert!(record.is_certified());
        assert!(record.is_direct());

        record.certification_id.clear();
        record.account_type = AccountType::Reseller;
        assert!(!record.is_certified());
        assert!(!record.is_direct());
    }

    #[test]
    fn test_serde_serialization() {
        let record = create_test_record();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Domain\":\"google.com\""));
        assert!(json.contains("\"Account_Type\":\"DIRECT\""));

        let deserialized: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);

        let report = ErrorReport::new(
            3,
            "a.com,1,FOO",
            ErrorKind::InvalidAccountType {
                value: "FOO".to_string(),
            },
        );
        let report_json = serde_json::to_string(&report).unwrap();
        assert!(report_json.contains("\"type\":\"InvalidAccountType\""));
        let report_back: ErrorReport = serde_json::from_str(&report_json).unwrap();
        assert_eq!(report, report_back);
    }
}
