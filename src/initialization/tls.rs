//! TLS listener setup: server certificate, private key, and the
//! client-certificate policy.
//!
//! Two policies exist for presented client certificates:
//! - With a configured client CA, `WebPkiClientVerifier` attests presented
//!   chains against it. Certificate-less handshakes still complete and are
//!   rejected at the application layer, not the transport.
//! - Without one, [`AcceptAnyClient`] accepts whatever the client presents
//!   without attesting it; the resulting identities carry a `NONE`
//!   verification status and any trust decision is the caller's.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use rustls::client::danger::HandshakeSignatureValid;
use rustls::crypto::{verify_tls12_signature, verify_tls13_signature, WebPkiSupportedAlgorithms};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, UnixTime};
use rustls::server::danger::{ClientCertVerified, ClientCertVerifier};
use rustls::server::WebPkiClientVerifier;
use rustls::{DigitallySignedStruct, RootCertStore, ServerConfig, SignatureScheme};

use crate::error_handling::InitializationError;

/// Builds the rustls server configuration for the mTLS listeners.
///
/// Returns the shared config and whether presented client certificates are
/// attested (a client CA was configured).
pub fn init_server_config(
    cert_path: &Path,
    key_path: &Path,
    client_ca_path: Option<&Path>,
) -> Result<(Arc<ServerConfig>, bool), InitializationError> {
    let certs = load_certs(cert_path)?;
    let key = load_private_key(key_path)?;

    let (verifier, attested): (Arc<dyn ClientCertVerifier>, bool) = match client_ca_path {
        Some(path) => {
            let mut roots = RootCertStore::empty();
            for cert in load_certs(path)? {
                roots.add(cert).map_err(|e| {
                    InitializationError::TlsSetupError(format!(
                        "invalid CA certificate in {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            }
            let verifier = WebPkiClientVerifier::builder(Arc::new(roots))
                .allow_unauthenticated()
                .build()
                .map_err(|e| {
                    InitializationError::TlsSetupError(format!(
                        "cannot build client verifier: {}",
                        e
                    ))
                })?;
            (verifier, true)
        }
        None => (Arc::new(AcceptAnyClient::new()), false),
    };

    let config = ServerConfig::builder()
        .with_client_cert_verifier(verifier)
        .with_single_cert(certs, key)
        .map_err(|e| {
            InitializationError::TlsSetupError(format!("invalid server certificate/key: {}", e))
        })?;

    Ok((Arc::new(config), attested))
}

fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>, InitializationError> {
    let file = File::open(path).map_err(|e| {
        InitializationError::TlsSetupError(format!("cannot open {}: {}", path.display(), e))
    })?;
    let certs = rustls_pemfile::certs(&mut BufReader::new(file))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            InitializationError::TlsSetupError(format!(
                "cannot parse certificates in {}: {}",
                path.display(),
                e
            ))
        })?;
    if certs.is_empty() {
        return Err(InitializationError::TlsSetupError(format!(
            "no certificates found in {}",
            path.display()
        )));
    }
    Ok(certs)
}

fn load_private_key(path: &Path) -> Result<PrivateKeyDer<'static>, InitializationError> {
    let file = File::open(path).map_err(|e| {
        InitializationError::TlsSetupError(format!("cannot open {}: {}", path.display(), e))
    })?;
    rustls_pemfile::private_key(&mut BufReader::new(file))
        .map_err(|e| {
            InitializationError::TlsSetupError(format!(
                "cannot parse private key in {}: {}",
                path.display(),
                e
            ))
        })?
        .ok_or_else(|| {
            InitializationError::TlsSetupError(format!(
                "no private key found in {}",
                path.display()
            ))
        })
}

/// Client-certificate verifier that requests a certificate but accepts any
/// presented chain without attesting it, and also accepts none at all.
///
/// This mirrors a terminating proxy running with optional, unverified
/// client auth: the identity still reaches the application, which is the
/// layer that decides what an unattested certificate is worth.
#[derive(Debug)]
struct AcceptAnyClient {
    algorithms: WebPkiSupportedAlgorithms,
}

impl AcceptAnyClient {
    fn new() -> Self {
        AcceptAnyClient {
            algorithms: rustls::crypto::ring::default_provider().signature_verification_algorithms,
        }
    }
}

impl ClientCertVerifier for AcceptAnyClient {
    fn root_hint_subjects(&self) -> &[rustls::DistinguishedName] {
        &[]
    }

    fn client_auth_mandatory(&self) -> bool {
        false
    }

    fn verify_client_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _now: UnixTime,
    ) -> Result<ClientCertVerified, rustls::Error> {
        Ok(ClientCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(message, cert, dss, &self.algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(message, cert, dss, &self.algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.algorithms.supported_schemes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_cert_file_is_setup_error() {
        let result = init_server_config(
            Path::new("/nonexistent/cert.pem"),
            Path::new("/nonexistent/key.pem"),
            None,
        );
        match result {
            Err(InitializationError::TlsSetupError(msg)) => {
                assert!(msg.contains("/nonexistent/cert.pem"));
            }
            _ => panic!("expected TlsSetupError"),
        }
    }

    #[test]
    fn test_empty_pem_file_is_setup_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "no pem here").expect("write");
        let result = load_certs(file.path());
        assert!(matches!(
            result,
            Err(InitializationError::TlsSetupError(_))
        ));
    }
}
