//! Core data model: the canonical certificate identity and its parts.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// What the certificate source asserted about verification.
///
/// This is never recomputed here: a terminating proxy forwards its own
/// verification result, and the TLS acceptor states whether its verifier
/// attested the presented chain. Callers that need "must be verified"
/// semantics have to check this field themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIterMacro)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    /// The source attested the certificate chain.
    Verified,
    /// The source made no verification claim (or an unrecognized one).
    #[default]
    None,
    /// The source explicitly reported a failed verification.
    Failed,
}

impl VerificationStatus {
    /// Returns the wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "VERIFIED",
            VerificationStatus::None => "NONE",
            VerificationStatus::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Negotiated TLS session parameters, present only when the identity came
/// from a live TLS session (directly or forwarded by a proxy).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsSessionInfo {
    /// Negotiated protocol version, e.g. `TLSv1_3`.
    pub protocol: String,
    /// Negotiated cipher suite.
    pub cipher: String,
}

/// The canonical, source-independent certificate identity.
///
/// Built in one step by [`crate::IdentityBuilder`] and never mutated
/// afterwards. Absent optional data is the empty string or empty vec so that
/// rendering stays uniform across sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateIdentity {
    /// Subject attributes as (key, value) pairs in DN encounter order.
    /// Duplicate keys are legal in X.509 DNs and are preserved.
    pub subject: Vec<(String, String)>,
    /// Issuer attributes, same shape as `subject`.
    pub issuer: Vec<(String, String)>,
    /// Lowercase hex serial number, no prefix; empty if unavailable.
    pub serial_number: String,
    /// ISO-8601 start of the validity window, or empty.
    pub not_before: String,
    /// ISO-8601 end of the validity window, or empty.
    pub not_after: String,
    /// Signature algorithm identifier, or empty.
    pub signature_algorithm: String,
    /// Session parameters when the source was a live TLS session.
    pub session: Option<TlsSessionInfo>,
    /// What the source asserted about verification.
    pub verification: VerificationStatus,
    /// Subject DN string exactly as received, kept for display.
    pub raw_subject_dn: String,
    /// Issuer DN string exactly as received, kept for display.
    pub raw_issuer_dn: String,
}

/// Adapter output prior to OID-label normalization.
///
/// Same shape as [`CertificateIdentity`], but attribute keys may still be
/// dotted OID strings (the DER path emits those); the builder replaces them
/// with registry short names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawIdentity {
    /// Subject attributes; keys are short names or dotted OIDs.
    pub subject: Vec<(String, String)>,
    /// Issuer attributes; keys are short names or dotted OIDs.
    pub issuer: Vec<(String, String)>,
    /// Lowercase hex serial number, or empty.
    pub serial_number: String,
    /// ISO-8601 start of validity, or empty.
    pub not_before: String,
    /// ISO-8601 end of validity, or empty.
    pub not_after: String,
    /// Signature algorithm identifier, or empty.
    pub signature_algorithm: String,
    /// Session parameters, if the source had a live session.
    pub session: Option<TlsSessionInfo>,
    /// The source's verification assertion.
    pub verification: VerificationStatus,
    /// Subject DN string as received.
    pub raw_subject_dn: String,
    /// Issuer DN string as received.
    pub raw_issuer_dn: String,
}
