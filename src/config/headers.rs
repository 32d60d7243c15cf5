//! Forwarded mTLS header name constants.
//!
//! A reverse proxy that terminates mTLS upstream forwards the client
//! certificate's fields in these request headers (nginx
//! `$ssl_client_*`-style names). The proxy contract does not guarantee
//! every header on every request; absent headers degrade to empty fields.

/// Verification result token (`SUCCESS`, `FAILED:<reason>`, `NONE`).
pub const HEADER_CLIENT_VERIFY: &str = "x-ssl-client-verify";
/// Client certificate serial number.
pub const HEADER_CLIENT_SERIAL: &str = "x-ssl-client-serial";
/// Client certificate subject DN string.
pub const HEADER_CLIENT_SUBJECT_DN: &str = "x-ssl-client-s-dn";
/// Client certificate issuer DN string.
pub const HEADER_CLIENT_ISSUER_DN: &str = "x-ssl-client-i-dn";
/// Start of the client certificate's validity window.
pub const HEADER_CLIENT_NOT_BEFORE: &str = "x-ssl-client-not-before";
/// End of the client certificate's validity window.
pub const HEADER_CLIENT_NOT_AFTER: &str = "x-ssl-client-not-after";
/// Optional raw PEM of the client certificate.
pub const HEADER_CLIENT_CERT: &str = "x-ssl-client-cert";
/// TLS protocol version of the upstream session.
pub const HEADER_TLS_PROTOCOL: &str = "x-ssl-protocol";
/// TLS cipher of the upstream session.
pub const HEADER_TLS_CIPHER: &str = "x-ssl-cipher";
