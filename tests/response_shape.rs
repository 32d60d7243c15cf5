//! The fixed wire shape: field order, round-tripping, and determinism.

mod common;

use cert_identity::{
    CertInfoResponse, IdentityBuilder, IdentitySource, OidRegistry, UploadedBlobSource,
};
use common::CLIENT_CERT_PEM;

fn fixture_response() -> CertInfoResponse {
    let registry = OidRegistry::default();
    let raw = UploadedBlobSource::new(CLIENT_CERT_PEM.as_bytes().to_vec())
        .adapt()
        .expect("fixture decodes");
    let identity = IdentityBuilder::new(&registry).build(raw);
    CertInfoResponse::from_identity(&identity)
}

#[test]
fn response_round_trips_through_serialization() {
    let response = fixture_response();
    let json = serde_json::to_string(&response).unwrap();
    let back: CertInfoResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, response);
    // And the re-serialization is byte-identical.
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
}

#[test]
fn field_order_is_stable_and_documented() {
    let json = serde_json::to_string(&fixture_response()).unwrap();
    let positions: Vec<usize> = [
        "\"ok\"",
        "\"verify\"",
        "\"subject\"",
        "\"issuer\"",
        "\"serial\"",
        "\"notBefore\"",
        "\"notAfter\"",
        "\"tls\"",
    ]
    .iter()
    .map(|field| json.find(field).unwrap_or_else(|| panic!("{field} missing")))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "wire fields must keep contract order");
}

#[test]
fn identical_input_serializes_identically() {
    let a = serde_json::to_string(&fixture_response()).unwrap();
    let b = serde_json::to_string(&fixture_response()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn summary_uses_short_attribute_names() {
    let json = serde_json::to_string(&fixture_response()).unwrap();
    assert!(json.contains("\"CN\":\"philippe\""));
    assert!(json.contains("\"O\":\"admins\""));
    // OU is absent from the fixture subject: empty string, not missing.
    assert!(json.contains("\"OU\":\"\""));
}
