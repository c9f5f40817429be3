//! Tests for single-line parsing

use super::super::line_parser::{
    LineOutcome, parse_line, split_comment, split_fields, validate_fields,
};
use crate::app::models::{AccountType, ErrorKind};

#[test]
fn test_split_comment() {
    assert_eq!(split_comment("a.com,1,DIRECT"), ("a.com,1,DIRECT", ""));
    assert_eq!(
        split_comment("a.com,1,DIRECT # trusted"),
        ("a.com,1,DIRECT", "trusted")
    );
    // Only the first marker splits
    assert_eq!(split_comment("a.com,1,DIRECT #x # y"), ("a.com,1,DIRECT", "x # y"));
    assert_eq!(split_comment("# only a comment"), ("", "only a comment"));
}

#[test]
fn test_split_fields_trims_each_field() {
    assert_eq!(
        split_fields(" a.com ,  pub-1 ,DIRECT,  cert "),
        vec!["a.com", "pub-1", "DIRECT", "cert"]
    );
    assert_eq!(split_fields("a.com"), vec!["a.com"]);
    assert_eq!(split_fields("a.com,,DIRECT"), vec!["a.com", "", "DIRECT"]);
}

#[test]
fn test_validate_fields() {
    assert_eq!(
        validate_fields(&["a.com", "1", "direct"]),
        Ok(AccountType::Direct)
    );
    assert_eq!(
        validate_fields(&["a.com", "1"]),
        Err(ErrorKind::TooFewFields { found: 2 })
    );
    assert_eq!(
        validate_fields(&["a.com", "1", "Partner"]),
        Err(ErrorKind::InvalidAccountType {
            value: "Partner".to_string()
        })
    );
}

#[test]
fn test_blank_and_comment_lines_skipped() {
    assert_eq!(parse_line(1, ""), LineOutcome::Skipped);
    assert_eq!(parse_line(2, "   \t  "), LineOutcome::Skipped);
    assert_eq!(parse_line(3, "# comment"), LineOutcome::Skipped);
    assert_eq!(parse_line(4, "   #   "), LineOutcome::Skipped);
}

#[test]
fn test_record_normalization() {
    let outcome = parse_line(1, "  ExAmple.COM , Pub-AbC , reseller , CERT # note ");
    let LineOutcome::Record(record) = outcome else {
        panic!("Expected a record, got {:?}", outcome);
    };

    assert_eq!(record.domain, "example.com");
    assert_eq!(record.publisher_id, "Pub-AbC");
    assert_eq!(record.account_type, AccountType::Reseller);
    assert_eq!(record.certification_id, "CERT");
    assert_eq!(record.comment, "note");
}

#[test]
fn test_three_fields_accepted_without_certification() {
    let LineOutcome::Record(record) = parse_line(1, "a.com,1,DIRECT") else {
        panic!("Expected a record");
    };
    assert_eq!(record.certification_id, "");
    assert_eq!(record.comment, "");
}

#[test]
fn test_extra_fields_ignored() {
    let LineOutcome::Record(record) = parse_line(1, "a.com,1,DIRECT,cert,extra,more") else {
        panic!("Expected a record");
    };
    assert_eq!(record.certification_id, "cert");
}

#[test]
fn test_error_content_excludes_comment() {
    let outcome = parse_line(9, "  a.com, pub-1  # missing type ");
    let LineOutcome::Error(report) = outcome else {
        panic!("Expected an error, got {:?}", outcome);
    };

    assert_eq!(report.line_number, 9);
    assert_eq!(report.content, "a.com, pub-1");
    assert_eq!(report.kind, ErrorKind::TooFewFields { found: 2 });
}

#[test]
fn test_field_count_checked_before_account_type() {
    // Two fields where the second looks like a bad account type
    let LineOutcome::Error(report) = parse_line(1, "a.com,NOTATYPE") else {
        panic!("Expected an error");
    };
    assert_eq!(report.kind.name(), "TooFewFields");
}

#[test]
fn test_quoted_comma_is_still_a_delimiter() {
    // Quoting is not recognised, so this line has four fields
    let LineOutcome::Error(report) = parse_line(1, "a.com,\"pub,1\",DIRECT") else {
        panic!("Expected an error");
    };
    assert_eq!(
        report.kind,
        ErrorKind::InvalidAccountType {
            value: "1\"".to_string()
        }
    );
}
