//! Proxy-header adapter: mTLS fields forwarded by a terminating reverse
//! proxy.
//!
//! The proxy's forwarding contract is not controlled by this system, so
//! this adapter is deliberately lenient: a missing or malformed field
//! degrades to the empty string (or `NONE` for the verification result) and
//! the adapter never rejects a request. Whether an unverified identity is
//! acceptable is an authorization decision that belongs to the caller, not
//! to this decoding layer.

use crate::dn;
use crate::error_handling::ExtractionError;
use crate::models::{RawIdentity, TlsSessionInfo, VerificationStatus};

use super::{normalize_serial, normalize_timestamp, IdentitySource};

/// Verification token the proxy sends for an attested chain.
const VERIFY_SUCCESS_TOKEN: &str = "SUCCESS";
/// Prefix of the tokens the proxy sends for a failed verification
/// (`FAILED` or `FAILED:<reason>`).
const VERIFY_FAILED_PREFIX: &str = "FAILED";

/// The flat field set a terminating proxy forwards. Every field defaults to
/// empty; the proxy is not guaranteed to send all of them.
#[derive(Debug, Clone, Default)]
pub struct ProxyHeaders {
    /// Verification result token (`SUCCESS`, `FAILED:<reason>`, `NONE`, …).
    pub verify: String,
    /// Certificate serial number.
    pub serial: String,
    /// Subject DN string, slash or comma dialect.
    pub subject_dn: String,
    /// Issuer DN string, slash or comma dialect.
    pub issuer_dn: String,
    /// Start of the validity window, usually openssl text form.
    pub not_before: String,
    /// End of the validity window, usually openssl text form.
    pub not_after: String,
    /// URL-encoded or raw PEM of the client certificate, if forwarded.
    pub pem: String,
    /// TLS protocol version of the upstream session.
    pub protocol: String,
    /// TLS cipher of the upstream session.
    pub cipher: String,
}

/// Adapter over one request's forwarded proxy headers.
#[derive(Debug, Clone, Default)]
pub struct ProxyHeaderSource {
    headers: ProxyHeaders,
}

impl ProxyHeaderSource {
    /// Wraps the forwarded fields of one request.
    pub fn new(headers: ProxyHeaders) -> Self {
        ProxyHeaderSource { headers }
    }
}

impl IdentitySource for ProxyHeaderSource {
    fn adapt(&self) -> Result<RawIdentity, ExtractionError> {
        let h = &self.headers;

        let session = if h.protocol.is_empty() && h.cipher.is_empty() {
            None
        } else {
            Some(TlsSessionInfo {
                protocol: h.protocol.clone(),
                cipher: h.cipher.clone(),
            })
        };

        Ok(RawIdentity {
            subject: dn::parse(&h.subject_dn),
            issuer: dn::parse(&h.issuer_dn),
            serial_number: normalize_serial(&h.serial),
            not_before: normalize_timestamp(&h.not_before),
            not_after: normalize_timestamp(&h.not_after),
            signature_algorithm: String::new(),
            session,
            verification: verification_from_token(&h.verify),
            raw_subject_dn: h.subject_dn.clone(),
            raw_issuer_dn: h.issuer_dn.clone(),
        })
    }
}

// SUCCESS is the only token that counts as verified. A token announcing a
// failed verification is an assertion too and maps to Failed; everything
// else (absent, NONE, unrecognized) maps to None.
fn verification_from_token(token: &str) -> VerificationStatus {
    let token = token.trim().to_ascii_uppercase();
    if token == VERIFY_SUCCESS_TOKEN {
        VerificationStatus::Verified
    } else if token.starts_with(VERIFY_FAILED_PREFIX) {
        VerificationStatus::Failed
    } else {
        VerificationStatus::None
    }
}
