//! Certificate identity sources.
//!
//! Three kinds of raw input produce the same canonical shape: the decoded
//! peer certificate of a completed mTLS handshake, the forwarded headers of
//! a proxy that terminated mTLS upstream, and a certificate file uploaded
//! by the user. Each gets its own adapter behind one trait so call sites
//! never branch on input shape.
//!
//! Failure policy differs per source and is part of each adapter's
//! contract: the socket path is the only one where absence of a certificate
//! is fatal, the proxy path never fails, and the upload path distinguishes
//! wrong-format input from corrupt DER.

mod proxy;
mod socket;
mod upload;

// Re-export public API
pub use proxy::{ProxyHeaderSource, ProxyHeaders};
pub use socket::{PeerCertificate, SocketPeerSource};
pub use upload::UploadedBlobSource;

use crate::error_handling::ExtractionError;
use crate::models::RawIdentity;

/// One kind of raw certificate input.
///
/// `adapt` is a synchronous, pure transform: one call consumes the source's
/// input and produces one independent [`RawIdentity`], so extractions can
/// run concurrently without coordination.
pub trait IdentitySource {
    /// Normalizes this source's raw input into a [`RawIdentity`].
    fn adapt(&self) -> Result<RawIdentity, ExtractionError>;
}

/// Normalizes a serial number to lowercase hex with no prefix or
/// separators. Lenient: unexpected characters other than `:` are kept (the
/// proxy path never rejects), just lowercased.
pub(crate) fn normalize_serial(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    trimmed
        .chars()
        .filter(|c| *c != ':')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalizes a validity timestamp to ISO-8601 (`%Y-%m-%dT%H:%M:%SZ`).
///
/// Accepts the openssl text form forwarded by proxies
/// (`Jan  6 10:20:05 2026 GMT`), RFC 2822, and ISO-8601 input. Anything
/// else degrades to the empty string: the data model allows exactly
/// "ISO-8601 or empty", never a third shape.
pub(crate) fn normalize_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%b %e %H:%M:%S %Y GMT") {
        return dt.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc2822(trimmed) {
        return dt
            .with_timezone(&chrono::Utc)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return dt
            .with_timezone(&chrono::Utc)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_serial() {
        assert_eq!(normalize_serial("0xAB:CD:01"), "abcd01");
        assert_eq!(normalize_serial("ABCD01"), "abcd01");
        assert_eq!(normalize_serial(""), "");
    }

    #[test]
    fn test_normalize_timestamp_openssl_form() {
        assert_eq!(
            normalize_timestamp("Jan  6 10:20:05 2026 GMT"),
            "2026-01-06T10:20:05Z"
        );
        assert_eq!(
            normalize_timestamp("Dec 31 23:59:59 2030 GMT"),
            "2030-12-31T23:59:59Z"
        );
    }

    #[test]
    fn test_normalize_timestamp_iso_passthrough() {
        assert_eq!(
            normalize_timestamp("2026-01-06T10:20:05Z"),
            "2026-01-06T10:20:05Z"
        );
    }

    #[test]
    fn test_normalize_timestamp_rfc2822() {
        assert_eq!(
            normalize_timestamp("Tue, 06 Jan 2026 10:20:05 +0000"),
            "2026-01-06T10:20:05Z"
        );
    }

    #[test]
    fn test_normalize_timestamp_unparseable_degrades_to_empty() {
        assert_eq!(normalize_timestamp("next tuesday"), "");
        assert_eq!(normalize_timestamp(""), "");
    }
}
