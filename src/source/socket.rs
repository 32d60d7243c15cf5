//! Socket-peer adapter: the decoded peer certificate of a completed mTLS
//! handshake.
//!
//! The TLS listener captures a [`PeerCertificate`] snapshot from the live
//! connection *before* the connection is torn down; this adapter only ever
//! sees that snapshot, never the connection itself. Extraction must happen
//! before teardown so a closed socket can never yield stale or empty data.

use crate::error_handling::ExtractionError;
use crate::models::{RawIdentity, TlsSessionInfo, VerificationStatus};

use super::{normalize_serial, normalize_timestamp, IdentitySource};

/// Snapshot of the peer certificate and session parameters taken from a
/// completed TLS handshake, supplied by the transport layer.
#[derive(Debug, Clone, Default)]
pub struct PeerCertificate {
    /// Subject attributes as (key, value) pairs in DN order.
    pub subject: Vec<(String, String)>,
    /// Issuer attributes, same shape as `subject`.
    pub issuer: Vec<(String, String)>,
    /// Rendered subject DN string.
    pub subject_dn: String,
    /// Rendered issuer DN string.
    pub issuer_dn: String,
    /// Hex serial number as supplied by the transport.
    pub serial_number: String,
    /// Start of the validity window, as a date string.
    pub valid_from: String,
    /// End of the validity window, as a date string.
    pub valid_to: String,
    /// Signature algorithm identifier, if the transport decoded it.
    pub signature_algorithm: String,
    /// Negotiated protocol and cipher of the live session.
    pub session: Option<TlsSessionInfo>,
    /// Whether the acceptor's verifier attested the presented chain.
    pub verified: bool,
}

impl PeerCertificate {
    // A handshake can complete with a certificate structure that carries no
    // identity at all; that counts as "no usable certificate".
    fn is_empty(&self) -> bool {
        self.subject.is_empty() && self.serial_number.is_empty() && self.subject_dn.is_empty()
    }
}

/// Adapter over the peer certificate of one completed handshake.
///
/// This is the only source where absence of data is fatal: a caller on this
/// path requires a client certificate, so `None` or a structurally empty
/// snapshot fails with [`ExtractionError::Authentication`].
#[derive(Debug, Clone, Default)]
pub struct SocketPeerSource {
    peer: Option<PeerCertificate>,
}

impl SocketPeerSource {
    /// Wraps the snapshot captured from a handshake; `None` means the
    /// handshake completed without a usable client certificate.
    pub fn new(peer: Option<PeerCertificate>) -> Self {
        SocketPeerSource { peer }
    }
}

impl IdentitySource for SocketPeerSource {
    fn adapt(&self) -> Result<RawIdentity, ExtractionError> {
        let peer = match &self.peer {
            Some(peer) if !peer.is_empty() => peer,
            _ => {
                return Err(ExtractionError::Authentication(
                    "certificate required".to_string(),
                ))
            }
        };

        Ok(RawIdentity {
            subject: peer.subject.clone(),
            issuer: peer.issuer.clone(),
            serial_number: normalize_serial(&peer.serial_number),
            not_before: normalize_timestamp(&peer.valid_from),
            not_after: normalize_timestamp(&peer.valid_to),
            signature_algorithm: peer.signature_algorithm.clone(),
            session: peer.session.clone(),
            verification: if peer.verified {
                VerificationStatus::Verified
            } else {
                VerificationStatus::None
            },
            raw_subject_dn: peer.subject_dn.clone(),
            raw_issuer_dn: peer.issuer_dn.clone(),
        })
    }
}
