//! Uploaded-blob path: PEM/DER detection, round-trip equality, and the
//! format-versus-parse error split.

mod common;

use cert_identity::{
    der, ExtractionError, IdentityBuilder, IdentitySource, OidRegistry, UploadedBlobSource,
    VerificationStatus,
};
use common::{client_cert_der, CLIENT_CERT_PEM, CLIENT_CERT_SERIAL};

#[test]
fn pem_upload_decodes_known_fields() {
    let raw = UploadedBlobSource::new(CLIENT_CERT_PEM.as_bytes().to_vec())
        .adapt()
        .expect("fixture certificate decodes");

    assert_eq!(raw.serial_number, CLIENT_CERT_SERIAL);
    assert_eq!(raw.not_before, "2025-01-06T10:20:05Z");
    assert_eq!(raw.not_after, "2026-01-06T10:20:05Z");
    assert_eq!(raw.signature_algorithm, "sha256WithRSAEncryption");
    // Dead bytes: no session, nothing asserted.
    assert!(raw.session.is_none());
    assert_eq!(raw.verification, VerificationStatus::None);

    // DER-path attribute keys are dotted OIDs, in DN encounter order.
    let values: Vec<&str> = raw.subject.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, vec!["LU", "LU", "Hollerich", "admins", "philippe"]);
    assert_eq!(raw.subject[4].0, "2.5.4.3");
}

#[test]
fn pem_and_der_uploads_agree() {
    // The round-trip property: PEM-wrapping must not change anything.
    let from_pem = UploadedBlobSource::new(CLIENT_CERT_PEM.as_bytes().to_vec())
        .adapt()
        .expect("PEM decodes");
    let from_der = UploadedBlobSource::new(client_cert_der())
        .adapt()
        .expect("DER decodes");

    assert_eq!(from_pem, from_der);
}

#[test]
fn builder_normalizes_der_subject_keys() {
    let registry = OidRegistry::default();
    let raw = UploadedBlobSource::new(client_cert_der()).adapt().unwrap();
    let identity = IdentityBuilder::new(&registry).build(raw);

    assert_eq!(
        identity.subject,
        vec![
            ("C".to_string(), "LU".to_string()),
            ("ST".to_string(), "LU".to_string()),
            ("L".to_string(), "Hollerich".to_string()),
            ("O".to_string(), "admins".to_string()),
            ("CN".to_string(), "philippe".to_string()),
        ]
    );
    assert_eq!(identity.issuer.last().unwrap().1, "Client CA");
    assert!(
        identity.raw_subject_dn.contains("philippe"),
        "raw DN string is kept for display"
    );
}

#[test]
fn direct_der_decode_reports_version() {
    let decoded = der::decode(&client_cert_der()).expect("fixture decodes");
    assert_eq!(decoded.version, 3);
    assert_eq!(decoded.serial_number, CLIENT_CERT_SERIAL);
}

#[test]
fn plain_text_upload_is_a_format_error() {
    let result = UploadedBlobSource::new(b"just some notes, definitely no cert".to_vec()).adapt();
    match result {
        Err(ExtractionError::Format(reason)) => {
            assert!(
                reason.contains("PEM") || reason.contains("DER"),
                "reason should describe the expected formats: {reason}"
            );
        }
        other => panic!("expected Format error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn corrupt_der_is_a_parse_error_with_offset() {
    let mut der_bytes = client_cert_der();
    // Truncating mid-structure keeps the SEQUENCE tag but breaks a length.
    der_bytes.truncate(40);
    match UploadedBlobSource::new(der_bytes).adapt() {
        Err(ExtractionError::Parse { offset, reason }) => {
            assert!(offset > 0, "break offset should be inside the structure");
            assert!(!reason.is_empty());
        }
        other => panic!("expected Parse error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn mangled_pem_envelope_is_a_format_error() {
    let mangled = CLIENT_CERT_PEM.replace("END CERTIFICATE", "END CERTIFICAT");
    let result = UploadedBlobSource::new(mangled.into_bytes()).adapt();
    assert!(matches!(result, Err(ExtractionError::Format(_))));
}
