//! Integration tests for the GTIN stream auditor
//!
//! These tests drive the public library API end-to-end, covering the
//! documented audit scenarios and file-based input.

use std::io::{Cursor, Write};

use gtin_auditor::app::services::stream_auditor::StreamAuditor;
use gtin_auditor::config::AuditConfig;

fn audit(input: &str, config: AuditConfig) -> String {
    StreamAuditor::new(config)
        .audit(Cursor::new(input.as_bytes()))
        .expect("in-memory audit should not fail")
        .render()
}

/// Header feed with one valid and one invalid code
#[test]
fn test_header_feed() {
    let input = "name,ean,price\nA,4065418448246,10\nB,4065418448247,20\n";

    assert_eq!(audit(input, AuditConfig::default()), "1 1");
}

/// Duplicate EAN columns make the feed structurally unusable
#[test]
fn test_duplicate_ean_column() {
    let input = "name,ean,ean,price\nA,4065418448246,4065418448246,10\n";

    assert_eq!(audit(input, AuditConfig::default()), "0 0");
}

/// Headerless feed whose first field is already a valid code
#[test]
fn test_headerless_feed() {
    let input = "4065418448246,X,10\n";

    assert_eq!(audit(input, AuditConfig::default()), "1 0");
}

/// Empty input and zero-data-row input are indistinguishable
#[test]
fn test_empty_and_header_only_input() {
    assert_eq!(audit("", AuditConfig::default()), "0 0");
    assert_eq!(audit("name,ean\n", AuditConfig::default()), "0 0");
}

/// Exit sentinel ends processing as if the stream were exhausted
#[test]
fn test_exit_sentinel() {
    let input = "name,ean\nA,4065418448246\nExit\nB,4065418448345\n";

    assert_eq!(audit(input, AuditConfig::default()), "1 0");
}

/// Semicolon-delimited feed with a quoted field containing the delimiter
#[test]
fn test_custom_delimiter_with_quoting() {
    let input = "name;ean;note\n\"Widget; blue\";4065418448246;ok\nB;bad;x\n";
    let config = AuditConfig::default().with_delimiter(';');

    assert_eq!(audit(input, config), "1 1");
}

/// Custom column name resolves against the header row
#[test]
fn test_custom_column_name() {
    let input = "sku,gtin\n1,4065418448246\n2,4065418448247\n";
    let config = AuditConfig::default().with_column_name("gtin");

    assert_eq!(audit(input, config), "1 1");
}

/// File input goes through the same audit path as standard input
#[test]
fn test_audit_from_file() {
    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        temp_file,
        "name,ean,price\nA,4065418448246,10\nB,4065418448345,20\nC,junk,30\n"
    )
    .unwrap();

    let file = std::fs::File::open(temp_file.path()).unwrap();
    let summary = StreamAuditor::new(AuditConfig::default())
        .audit(std::io::BufReader::new(file))
        .expect("file audit should not fail");

    assert_eq!(summary.valid_rows, 2);
    assert_eq!(summary.invalid_rows, 1);
    assert_eq!(summary.render(), "2 1");
}

/// Larger mixed feed exercises padding, quoting, and short rows together
#[test]
fn test_mixed_feed() {
    let input = "\
sku,ean,qty
1,4065418448246,5
2,\"4065418448345\",1
3,000012348,2
4,104065418448246,9
5,00,4
6
7,406541844824X,1
";

    assert_eq!(audit(input, AuditConfig::default()), "3 4");
}
