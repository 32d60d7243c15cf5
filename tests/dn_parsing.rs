//! DN parsing behavior through the public API.
//!
//! These cover the documented parsing contract: both dialects, escaped
//! delimiters, multi-valued RDNs, repeated attributes, and graceful
//! degradation on malformed input.

use cert_identity::dn::{parse, parse_with_dialect, Dialect};

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn slash_dialect_is_detected_from_leading_slash() {
    assert_eq!(
        parse("/CN=Alice/O=ACME"),
        pairs(&[("CN", "Alice"), ("O", "ACME")])
    );
}

#[test]
fn comma_dialect_is_the_default() {
    assert_eq!(
        parse("CN=Bob,O=Acme,C=US"),
        pairs(&[("CN", "Bob"), ("O", "Acme"), ("C", "US")])
    );
}

#[test]
fn escaped_delimiter_stays_literal_in_value() {
    assert_eq!(
        parse("CN=Bob,O=Acme\\, Inc."),
        pairs(&[("CN", "Bob"), ("O", "Acme, Inc.")])
    );
    assert_eq!(
        parse("/CN=a\\/b/O=ACME"),
        pairs(&[("CN", "a/b"), ("O", "ACME")])
    );
}

#[test]
fn multi_valued_rdns_become_separate_pairs_in_order() {
    assert_eq!(
        parse("/O=ACME/OU=Dev+CN=bob"),
        pairs(&[("O", "ACME"), ("OU", "Dev"), ("CN", "bob")])
    );
}

#[test]
fn repeated_attributes_are_all_kept() {
    assert_eq!(
        parse("/DC=com/DC=example/CN=user"),
        pairs(&[("DC", "com"), ("DC", "example"), ("CN", "user")])
    );
}

#[test]
fn value_after_first_equals_is_taken_whole() {
    assert_eq!(parse("CN=key=value"), pairs(&[("CN", "key=value")]));
}

#[test]
fn malformed_segments_are_skipped_not_fatal() {
    assert_eq!(
        parse("CN=ok,,nonsense,=empty,O=good"),
        pairs(&[("CN", "ok"), ("O", "good")])
    );
}

#[test]
fn empty_input_yields_empty_sequence() {
    assert!(parse("").is_empty());
    assert!(parse("/").is_empty());
    assert!(parse("no delimiters at all").is_empty());
}

#[test]
fn explicit_dialect_wins_over_detection() {
    assert_eq!(
        parse_with_dialect("CN=a/O=b", Dialect::Slash),
        pairs(&[("CN", "a"), ("O", "b")])
    );
}
