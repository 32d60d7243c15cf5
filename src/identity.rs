//! Canonical identity construction and the wire response shape.
//!
//! The builder is the single constructive step that turns an adapter's
//! [`RawIdentity`] into the immutable [`CertificateIdentity`]: attribute
//! keys that arrived as dotted OIDs are replaced with the registry's short
//! names, everything else passes through unchanged. Field ordering in the
//! flattened and serialized representations is part of the contract: the
//! same input must always produce byte-identical output.

use serde::{Deserialize, Serialize};

use crate::models::{CertificateIdentity, RawIdentity, TlsSessionInfo, VerificationStatus};
use crate::oid_registry::OidRegistry;

/// Builds canonical identities against one read-only OID registry.
pub struct IdentityBuilder<'a> {
    registry: &'a OidRegistry,
}

impl<'a> IdentityBuilder<'a> {
    /// Creates a builder borrowing the process-wide registry.
    pub fn new(registry: &'a OidRegistry) -> Self {
        IdentityBuilder { registry }
    }

    /// Builds the canonical identity from an adapter's output.
    ///
    /// Attribute keys that are dotted OIDs are normalized to registry short
    /// names (`2.5.4.3` → `CN`); keys already given as short names pass
    /// through. Order and duplicates are preserved exactly.
    pub fn build(&self, raw: RawIdentity) -> CertificateIdentity {
        CertificateIdentity {
            subject: self.normalize_keys(raw.subject),
            issuer: self.normalize_keys(raw.issuer),
            serial_number: raw.serial_number,
            not_before: raw.not_before,
            not_after: raw.not_after,
            signature_algorithm: raw.signature_algorithm,
            session: raw.session,
            verification: raw.verification,
            raw_subject_dn: raw.raw_subject_dn,
            raw_issuer_dn: raw.raw_issuer_dn,
        }
    }

    fn normalize_keys(&self, pairs: Vec<(String, String)>) -> Vec<(String, String)> {
        pairs
            .into_iter()
            .map(|(key, value)| {
                if is_dotted_oid(&key) {
                    (self.registry.short_name(&key).to_string(), value)
                } else {
                    (key, value)
                }
            })
            .collect()
    }
}

fn is_dotted_oid(key: &str) -> bool {
    key.contains('.') && key.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Subject or issuer summary in the wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnSummary {
    /// First common name, or empty.
    #[serde(rename = "CN")]
    pub cn: String,
    /// First organization, or empty.
    #[serde(rename = "O")]
    pub o: String,
    /// First organizational unit, or empty.
    #[serde(rename = "OU")]
    pub ou: String,
    /// The DN string as originally received.
    pub raw: String,
}

impl DnSummary {
    fn from_attributes(pairs: &[(String, String)], raw: &str) -> Self {
        DnSummary {
            cn: first_value(pairs, "CN"),
            o: first_value(pairs, "O"),
            ou: first_value(pairs, "OU"),
            raw: raw.to_string(),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

/// The fixed JSON shape consumed by the presentation layer, identical for
/// all three sources. Field order follows the struct declaration, so a
/// given identity always serializes to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertInfoResponse {
    /// Whether extraction succeeded (error responses use a different body).
    pub ok: bool,
    /// The source's verification assertion.
    pub verify: VerificationStatus,
    /// Subject summary.
    pub subject: DnSummary,
    /// Issuer summary.
    pub issuer: DnSummary,
    /// Lowercase hex serial number.
    pub serial: String,
    /// ISO-8601 start of validity, or empty.
    #[serde(rename = "notBefore")]
    pub not_before: String,
    /// ISO-8601 end of validity, or empty.
    #[serde(rename = "notAfter")]
    pub not_after: String,
    /// Session parameters; empty strings when the source had no session.
    pub tls: TlsSessionInfo,
}

impl CertInfoResponse {
    /// Projects a canonical identity onto the wire shape.
    pub fn from_identity(identity: &CertificateIdentity) -> Self {
        CertInfoResponse {
            ok: true,
            verify: identity.verification,
            subject: DnSummary::from_attributes(&identity.subject, &identity.raw_subject_dn),
            issuer: DnSummary::from_attributes(&identity.issuer, &identity.raw_issuer_dn),
            serial: identity.serial_number.clone(),
            not_before: identity.not_before.clone(),
            not_after: identity.not_after.clone(),
            tls: identity.session.clone().unwrap_or_default(),
        }
    }
}

/// Flattens an identity into ordered (label, value) lines for display.
///
/// The order is fixed and part of the contract: subject attributes in DN
/// encounter order, then issuer attributes, then the validity window, then
/// the serial number, then session info. Attribute labels go through the
/// registry so raw OIDs that survived normalization still render readably.
pub fn flatten(identity: &CertificateIdentity, registry: &OidRegistry) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    for (key, value) in &identity.subject {
        fields.push((registry.display_label(key).to_string(), value.clone()));
    }
    for (key, value) in &identity.issuer {
        fields.push((
            format!("Issuer {}", registry.display_label(key)),
            value.clone(),
        ));
    }
    fields.push(("Not Before".to_string(), identity.not_before.clone()));
    fields.push(("Not After".to_string(), identity.not_after.clone()));
    fields.push(("Serial Number".to_string(), identity.serial_number.clone()));
    if let Some(session) = &identity.session {
        fields.push(("TLS Protocol".to_string(), session.protocol.clone()));
        fields.push(("TLS Cipher".to_string(), session.cipher.clone()));
    }
    fields
}
