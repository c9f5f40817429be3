//! Integration tests for the ads.txt parser, summarizer and exporter
//!
//! These tests drive the public library API end to end with file content
//! shaped like real-world app-ads.txt files.

use adstxt_validator::app::services::export::{Report, write_records_csv};
use adstxt_validator::app::services::summary::{search, top_partners};
use adstxt_validator::{AccountType, AdsTxtParser, ErrorKind, parse, summarize};
use std::fs;
use tempfile::TempDir;

/// A publisher file in the shape commonly served from /app-ads.txt
const PUBLISHER_FILE: &str = "\
# app-ads.txt for games.example
# Contact: adops@games.example

google.com, pub-3940256099942544, DIRECT, f08c47fec0942fa0
google.com, pub-3940256099942544, RESELLER, f08c47fec0942fa0
unity3d.com, 1234567, DIRECT
unity3d.com, 7654321, RESELLER # mediation
applovin.com, 5a3b2c1d, DIRECT
Facebook.com, 987654321, RESELLER, c3e20eee3f780d68
pubmatic.com, 156078 RESELLER
inmobi.com, abc123, INDIRECT, 83e75a7ae333ca9d
vungle.com
";

#[test]
fn test_publisher_file_end_to_end() {
    let result = parse(PUBLISHER_FILE);

    assert_eq!(result.records.len(), 6);
    assert_eq!(result.errors.len(), 3);

    // Malformed lines are reported with their original line numbers
    let error_lines: Vec<usize> = result.errors.iter().map(|e| e.line_number).collect();
    assert_eq!(error_lines, vec![10, 11, 12]);
    assert_eq!(result.errors[0].kind, ErrorKind::TooFewFields { found: 2 });
    assert_eq!(
        result.errors[1].kind,
        ErrorKind::InvalidAccountType {
            value: "INDIRECT".to_string()
        }
    );
    assert_eq!(result.errors[2].kind, ErrorKind::TooFewFields { found: 1 });

    assert_eq!(result.records[3].comment, "mediation");
    assert_eq!(result.records[5].domain, "facebook.com");

    let stats = summarize(&result.records).expect("records present");
    assert_eq!(stats.total_lines, 6);
    assert_eq!(stats.unique_partners, 4);
    assert_eq!(stats.direct_count, 3);
    assert_eq!(stats.reseller_count, 3);

    let ranked = top_partners(&result.records, 2);
    assert_eq!(ranked[0].domain, "google.com");
    assert_eq!(ranked[1].domain, "unity3d.com");
}

#[test]
fn test_parse_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app-ads.txt");
    fs::write(&path, PUBLISHER_FILE.replace('\n', "\r\n")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let parser = AdsTxtParser::new();
    let from_file = parser.parse(&content);
    let from_memory = parser.parse(PUBLISHER_FILE);

    // CRLF line endings produce the same result as LF
    assert_eq!(from_file, from_memory);
}

#[test]
fn test_documented_scenarios() {
    let result = parse("example.com, pub-1234, DIRECT, f08c47fec0942fa0\n");
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].account_type, AccountType::Direct);

    let result = parse("example.com, pub-1234\n");
    assert_eq!(result.errors[0].kind.name(), "TooFewFields");
    assert_eq!(result.errors[0].line_number, 1);

    let result = parse("example.com, pub-1234, SOMETHING\n");
    assert!(result.errors[0].message().contains("SOMETHING"));

    let result = parse("\n  \n# just a comment\n");
    assert!(result.records.is_empty() && result.errors.is_empty());

    let result = parse("a.com,1,direct # trusted\nb.com,2,RESELLER\na.com,1,direct\n");
    let stats = summarize(&result.records).unwrap();
    assert_eq!(
        (stats.total_lines, stats.unique_partners, stats.direct_count, stats.reseller_count),
        (3, 2, 2, 1)
    );
    assert_eq!(result.records[0].comment, "trusted");

    let result = parse("");
    assert!(result.records.is_empty() && result.errors.is_empty());
    assert!(summarize(&result.records).is_none());
}

#[test]
fn test_filtered_export_and_report() {
    let result = parse(PUBLISHER_FILE);

    let mut buffer = Vec::new();
    let written = write_records_csv(&mut buffer, search(&result.records, "UNITY")).unwrap();
    assert_eq!(written, 2);

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.starts_with("Domain,Publisher_ID,Account_Type,Certification_ID,Comment\n"));
    assert!(text.contains("unity3d.com,7654321,RESELLER,,mediation"));

    let report = Report::build("app-ads.txt", &result, 10);
    assert_eq!(report.error_count, 3);
    assert_eq!(report.top_partners.len(), 4);
}
