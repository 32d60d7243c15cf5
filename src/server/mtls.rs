//! mTLS login listeners (socket-peer path).
//!
//! Each listener accepts TLS connections on one port, serves a single
//! `GET /login` exchange per connection, and closes the connection. The
//! peer-certificate snapshot is captured from the live rustls connection
//! *before* the response is written and the stream shut down; reading after
//! teardown is a contract violation, so the ordering here is extract first,
//! release last.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_rustls::TlsAcceptor;

use crate::config::TLS_LOGIN_READ_TIMEOUT;
use crate::der;
use crate::error_handling::ExtractionError;
use crate::identity::{CertInfoResponse, IdentityBuilder};
use crate::models::TlsSessionInfo;
use crate::oid_registry::OidRegistry;
use crate::source::{IdentitySource, PeerCertificate, SocketPeerSource};

use super::ErrorResponse;

/// Accepts connections on `port` until the task is aborted.
pub(super) async fn run_mtls_listener(
    port: u16,
    tls_config: Arc<rustls::ServerConfig>,
    registry: Arc<OidRegistry>,
    attested: bool,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind mTLS listener to port {}", port))?;
    let acceptor = TlsAcceptor::from(tls_config);
    log::info!("mTLS login listener on https://localhost:{}/login", port);

    loop {
        let (stream, addr) = listener
            .accept()
            .await
            .context("mTLS listener accept failed")?;
        let acceptor = acceptor.clone();
        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            if let Err(e) = handle_login(stream, acceptor, registry, attested).await {
                log::warn!("login exchange with {} failed: {}", addr, e);
            }
        });
    }
}

async fn handle_login(
    stream: TcpStream,
    acceptor: TlsAcceptor,
    registry: Arc<OidRegistry>,
    attested: bool,
) -> anyhow::Result<()> {
    let mut tls_stream = acceptor
        .accept(stream)
        .await
        .context("TLS handshake failed")?;

    // Snapshot the peer certificate and session parameters now, while the
    // connection is alive; nothing below may touch the connection state.
    let peer = capture_peer(tls_stream.get_ref().1, attested);

    let request_line = read_request_line(&mut tls_stream).await?;
    let (status, body) = if request_line.starts_with("GET /login") {
        login_response(peer, &registry)
    } else {
        (
            404,
            serde_json::to_string(&ErrorResponse::new("not found".to_string()))?,
        )
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Cache-Control: no-store\r\n\
         Access-Control-Allow-Origin: *\r\n\
         Connection: close\r\n\
         \r\n\
         {}",
        status,
        status_text(status),
        body.len(),
        body
    );
    tls_stream.write_all(response.as_bytes()).await?;
    tls_stream.shutdown().await.ok();
    Ok(())
}

fn login_response(peer: Option<PeerCertificate>, registry: &OidRegistry) -> (u16, String) {
    let source = SocketPeerSource::new(peer);
    match source.adapt() {
        Ok(raw) => {
            let identity = IdentityBuilder::new(registry).build(raw);
            let body = serde_json::to_string(&CertInfoResponse::from_identity(&identity))
                .unwrap_or_default();
            (200, body)
        }
        Err(e @ ExtractionError::Authentication(_)) => {
            let body =
                serde_json::to_string(&ErrorResponse::new(e.to_string())).unwrap_or_default();
            (401, body)
        }
        Err(e) => {
            let body =
                serde_json::to_string(&ErrorResponse::new(e.to_string())).unwrap_or_default();
            (422, body)
        }
    }
}

/// Builds the handshake snapshot from the live connection. Returns `None`
/// when no usable certificate was presented (which the adapter turns into
/// an authentication failure).
fn capture_peer(conn: &rustls::ServerConnection, attested: bool) -> Option<PeerCertificate> {
    let certs = conn.peer_certificates()?;
    let leaf = certs.first()?;
    let decoded = match der::decode(leaf.as_ref()) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("peer presented an undecodable certificate: {}", e);
            return None;
        }
    };

    let protocol = conn
        .protocol_version()
        .map(|v| format!("{:?}", v))
        .unwrap_or_default();
    let cipher = conn
        .negotiated_cipher_suite()
        .map(|cs| format!("{:?}", cs.suite()))
        .unwrap_or_default();

    Some(PeerCertificate {
        subject: decoded.subject,
        issuer: decoded.issuer,
        subject_dn: decoded.subject_dn,
        issuer_dn: decoded.issuer_dn,
        serial_number: decoded.serial_number,
        valid_from: decoded.not_before,
        valid_to: decoded.not_after,
        signature_algorithm: decoded.signature_algorithm,
        session: Some(TlsSessionInfo { protocol, cipher }),
        verified: attested,
    })
}

// Reads until the end of the request head and returns its first line. The
// login exchange is a single tiny GET, so a fixed buffer is enough.
async fn read_request_line<S>(stream: &mut S) -> anyhow::Result<String>
where
    S: tokio::io::AsyncRead + Unpin,
{
    let mut buf = vec![0u8; 4096];
    let mut filled = 0;
    loop {
        let n = tokio::time::timeout(TLS_LOGIN_READ_TIMEOUT, stream.read(&mut buf[filled..]))
            .await
            .context("timed out reading request")??;
        if n == 0 {
            break;
        }
        filled += n;
        if buf[..filled].windows(4).any(|w| w == b"\r\n\r\n") || filled == buf.len() {
            break;
        }
    }
    let head = String::from_utf8_lossy(&buf[..filled]);
    Ok(head.lines().next().unwrap_or_default().to_string())
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        _ => "Error",
    }
}
