//! Test utilities for ads.txt parser testing
//!
//! This module provides sample file content and helper functions used across
//! the parser test modules.

use crate::app::models::{AccountType, Record};

// Test modules
mod line_parser_tests;

/// Helper to create a realistic app-ads.txt file with a mix of valid,
/// invalid, blank and comment lines
pub fn create_test_adstxt() -> String {
    r#"# app-ads.txt for example.com
# Last updated 2024-03-01

google.com, pub-1234567890123456, DIRECT, f08c47fec0942fa0
Google.com, pub-1234567890123456, RESELLER, f08c47fec0942fa0 # via partner
appnexus.com, 12345, reseller
rubiconproject.com, 11111
openx.com, 540191398, Indirect, 6a698e2ec38604c6
   
pubmatic.com, PUB-99, direct, 5d62403b186f2ace, extra, fields"#
        .to_string()
}

/// Helper to build an expected record
pub fn make_record(domain: &str, publisher_id: &str, account_type: AccountType) -> Record {
    Record {
        domain: domain.to_string(),
        publisher_id: publisher_id.to_string(),
        account_type,
        certification_id: String::new(),
        comment: String::new(),
    }
}
