//! Configuration constants.

use std::time::Duration;

/// Default port for the plain-HTTP API (proxy-header and upload paths).
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default base port for the mTLS login listeners.
pub const DEFAULT_TLS_BASE_PORT: u16 = 4430;

/// Default number of consecutive-port mTLS listener instances.
pub const DEFAULT_TLS_INSTANCES: u16 = 1;

/// Upload request body cap in bytes. This is boundary policy: the adapters
/// themselves take whatever they are given.
pub const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Marker that flags a textual PEM upload. Detection is content-based;
/// filenames and MIME types are never consulted.
pub const PEM_BEGIN_MARKER: &[u8] = b"-----BEGIN";

/// How long one mTLS login exchange may take to send its request.
pub const TLS_LOGIN_READ_TIMEOUT: Duration = Duration::from_secs(10);
