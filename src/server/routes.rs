//! Plain-HTTP API routes for the proxy-header and upload paths.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;

use crate::config::{
    HEADER_CLIENT_CERT, HEADER_CLIENT_ISSUER_DN, HEADER_CLIENT_NOT_AFTER,
    HEADER_CLIENT_NOT_BEFORE, HEADER_CLIENT_SERIAL, HEADER_CLIENT_SUBJECT_DN,
    HEADER_CLIENT_VERIFY, HEADER_TLS_CIPHER, HEADER_TLS_PROTOCOL, MAX_UPLOAD_BYTES,
};
use crate::error_handling::ExtractionError;
use crate::identity::{CertInfoResponse, IdentityBuilder};
use crate::models::RawIdentity;
use crate::oid_registry::OidRegistry;
use crate::source::{IdentitySource, ProxyHeaderSource, ProxyHeaders, UploadedBlobSource};

use super::ErrorResponse;

/// Shared state for the API routes.
#[derive(Clone)]
pub struct ApiState {
    /// Process-wide OID registry.
    pub registry: Arc<OidRegistry>,
}

/// Builds the API router: `GET /api/certinfo` for the proxy-header path and
/// `POST /api/upload` for the uploaded-blob path.
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/certinfo", get(certinfo_handler))
        .route("/api/upload", post(upload_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Proxy-header path. Never fails: missing headers degrade to empty fields
/// and `verify = NONE`; enforcement is the caller's policy, not ours.
async fn certinfo_handler(State(state): State<ApiState>, headers: HeaderMap) -> Response {
    let source = ProxyHeaderSource::new(proxy_headers_from(&headers));
    let raw = match source.adapt() {
        Ok(raw) => raw,
        // The proxy adapter's contract is to never fail; degrade anyway.
        Err(_) => RawIdentity::default(),
    };
    let identity = IdentityBuilder::new(&state.registry).build(raw);
    json_response(
        StatusCode::OK,
        serde_json::to_string(&CertInfoResponse::from_identity(&identity)).unwrap_or_default(),
    )
}

/// Uploaded-blob path. One-shot: decode failures surface directly as the
/// user-facing message, no partial identity is produced.
async fn upload_handler(State(state): State<ApiState>, body: Bytes) -> Response {
    let source = UploadedBlobSource::new(body.to_vec());
    match source.adapt() {
        Ok(raw) => {
            let identity = IdentityBuilder::new(&state.registry).build(raw);
            json_response(
                StatusCode::OK,
                serde_json::to_string(&CertInfoResponse::from_identity(&identity))
                    .unwrap_or_default(),
            )
        }
        Err(e) => {
            log::info!("upload rejected: {e}");
            let status = match e {
                ExtractionError::Format(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ExtractionError::Parse { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                ExtractionError::UnsupportedFeature(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ExtractionError::Authentication(_) => StatusCode::UNAUTHORIZED,
            };
            json_response(
                status,
                serde_json::to_string(&ErrorResponse::new(e.to_string())).unwrap_or_default(),
            )
        }
    }
}

fn proxy_headers_from(headers: &HeaderMap) -> ProxyHeaders {
    let field = |name: &str| -> String {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    ProxyHeaders {
        verify: field(HEADER_CLIENT_VERIFY),
        serial: field(HEADER_CLIENT_SERIAL),
        subject_dn: field(HEADER_CLIENT_SUBJECT_DN),
        issuer_dn: field(HEADER_CLIENT_ISSUER_DN),
        not_before: field(HEADER_CLIENT_NOT_BEFORE),
        not_after: field(HEADER_CLIENT_NOT_AFTER),
        pem: field(HEADER_CLIENT_CERT),
        protocol: field(HEADER_TLS_PROTOCOL),
        cipher: field(HEADER_TLS_CIPHER),
    }
}

// Identity responses must never be cached (fresh extraction per request),
// and the browser front end lives on another origin.
fn json_response(status: StatusCode, body: String) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CACHE_CONTROL, "no-store")
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .body(body.into())
        .unwrap_or_default()
}
