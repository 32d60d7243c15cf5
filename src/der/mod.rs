//! Binary (DER) X.509 certificate decoding.
//!
//! Decodes only the structural identity fields of a certificate: version,
//! serial number, signature algorithm, subject and issuer RDN sequences,
//! and the validity window. Signature verification, revocation, and chain
//! trust are explicitly out of scope here; callers that need a trust
//! decision make it on top of this output.
//!
//! Uses `x509-parser` for the ASN.1 work. Its parse errors carry no input
//! position, so corrupt input is re-scanned by [`offset`] to locate the
//! byte where the structure broke.

mod offset;

use chrono::DateTime;
use x509_parser::prelude::*;

use crate::error_handling::ExtractionError;

/// Identity fields decoded from one DER certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCertificate {
    /// X.509 version number (1 through 3).
    pub version: u32,
    /// Lowercase hex serial number, no prefix.
    pub serial_number: String,
    /// Signature algorithm name, or the dotted OID when unrecognized.
    pub signature_algorithm: String,
    /// Subject attributes as (dotted OID, value) pairs in DN order.
    pub subject: Vec<(String, String)>,
    /// Issuer attributes, same shape as `subject`.
    pub issuer: Vec<(String, String)>,
    /// Rendered subject DN string, kept for display.
    pub subject_dn: String,
    /// Rendered issuer DN string, kept for display.
    pub issuer_dn: String,
    /// ISO-8601 start of validity.
    pub not_before: String,
    /// ISO-8601 end of validity.
    pub not_after: String,
}

/// Decodes the identity fields of a DER-encoded X.509 certificate.
///
/// # Errors
///
/// - `ExtractionError::Parse` when the bytes are structurally corrupt; the
///   error carries the byte offset where decoding broke.
/// - `ExtractionError::UnsupportedFeature` for certificate versions other
///   than v1–v3 and for critical extensions the parser does not recognize.
///   These are surfaced rather than ignored so a caller can reject such
///   certificates upstream; no trust decision is made here.
pub fn decode(bytes: &[u8]) -> Result<DecodedCertificate, ExtractionError> {
    let (_, cert) = X509Certificate::from_der(bytes).map_err(|e| ExtractionError::Parse {
        offset: offset::first_structural_break(bytes).unwrap_or(0),
        reason: e.to_string(),
    })?;

    let version = cert.version().0;
    if version > 2 {
        return Err(ExtractionError::UnsupportedFeature(format!(
            "certificate version v{}",
            version + 1
        )));
    }
    for ext in cert.extensions() {
        if !ext.critical {
            continue;
        }
        match ext.parsed_extension() {
            ParsedExtension::UnsupportedExtension { oid } => {
                return Err(ExtractionError::UnsupportedFeature(format!(
                    "unrecognized critical extension {}",
                    oid
                )));
            }
            ParsedExtension::ParseError { error } => {
                return Err(ExtractionError::UnsupportedFeature(format!(
                    "undecodable critical extension {}: {}",
                    ext.oid, error
                )));
            }
            _ => {}
        }
    }

    Ok(DecodedCertificate {
        version: version + 1,
        serial_number: hex_lower(cert.raw_serial()),
        signature_algorithm: signature_algorithm_name(
            &cert.signature_algorithm.algorithm.to_id_string(),
        ),
        subject: name_attributes(cert.subject()),
        issuer: name_attributes(cert.issuer()),
        subject_dn: cert.subject().to_string(),
        issuer_dn: cert.issuer().to_string(),
        not_before: asn1_time_to_iso(&cert.validity().not_before),
        not_after: asn1_time_to_iso(&cert.validity().not_after),
    })
}

/// Flattens an RDN sequence into (dotted OID, value) pairs, preserving DN
/// encounter order; multi-valued RDNs contribute one pair per attribute.
fn name_attributes(name: &X509Name<'_>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for rdn in name.iter() {
        for attr in rdn.iter() {
            let key = attr.attr_type().to_id_string();
            let value = match attr.attr_value().as_str() {
                Ok(s) => s.to_string(),
                // Non-string attribute values (rare) are kept lossily rather
                // than dropped, so the pair count matches the DN.
                Err(_) => String::from_utf8_lossy(attr.attr_value().data).into_owned(),
            };
            pairs.push((key, value));
        }
    }
    pairs
}

fn asn1_time_to_iso(time: &ASN1Time) -> String {
    DateTime::from_timestamp(time.timestamp(), 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_default()
}

fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Maps a signature-algorithm OID to its conventional name. Unknown OIDs
/// are returned as-is so the field is never empty for a decoded cert.
fn signature_algorithm_name(oid: &str) -> String {
    match oid {
        "1.2.840.113549.1.1.5" => "sha1WithRSAEncryption",
        "1.2.840.113549.1.1.10" => "rsassaPss",
        "1.2.840.113549.1.1.11" => "sha256WithRSAEncryption",
        "1.2.840.113549.1.1.12" => "sha384WithRSAEncryption",
        "1.2.840.113549.1.1.13" => "sha512WithRSAEncryption",
        "1.2.840.10045.4.3.2" => "ecdsa-with-SHA256",
        "1.2.840.10045.4.3.3" => "ecdsa-with-SHA384",
        "1.2.840.10045.4.3.4" => "ecdsa-with-SHA512",
        "1.3.101.112" => "ED25519",
        "1.3.101.113" => "ED448",
        other => other,
    }
    .to_string()
}
