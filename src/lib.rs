//! cert_identity library: X.509 certificate identity extraction and
//! normalization.
//!
//! This library turns three mutually incompatible certificate sources into
//! one canonical identity record:
//! - the decoded peer certificate of a completed mutual-TLS handshake,
//! - the headers a reverse proxy injects after terminating mTLS upstream,
//! - a certificate file (PEM or binary DER) uploaded by the user.
//!
//! # Example
//!
//! ```no_run
//! use cert_identity::{
//!     CertInfoResponse, IdentityBuilder, IdentitySource, OidRegistry, UploadedBlobSource,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = OidRegistry::default();
//! let bytes = std::fs::read("client.pem")?;
//!
//! let raw = UploadedBlobSource::new(bytes).adapt()?;
//! let identity = IdentityBuilder::new(&registry).build(raw);
//! let response = CertInfoResponse::from_identity(&identity);
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! # Ok(())
//! # }
//! ```
//!
//! No cryptographic verification happens anywhere in this crate: the
//! `verify` field of an identity reflects what the *source* asserted, and
//! callers that need "must be verified" semantics check it themselves.

#![warn(missing_docs)]

pub mod config;
pub mod der;
pub mod dn;
mod error_handling;
pub mod identity;
pub mod initialization;
mod models;
pub mod oid_registry;
mod server;
pub mod source;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExtractionError, InitializationError};
pub use identity::{flatten, CertInfoResponse, DnSummary, IdentityBuilder};
pub use models::{CertificateIdentity, RawIdentity, TlsSessionInfo, VerificationStatus};
pub use oid_registry::{init_registry, OidRegistry};
pub use server::run_server;
pub use source::{
    IdentitySource, PeerCertificate, ProxyHeaderSource, ProxyHeaders, SocketPeerSource,
    UploadedBlobSource,
};
