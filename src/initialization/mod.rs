//! Process initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain colored or JSON output)
//! - rustls crypto provider
//! - TLS listener configuration (server certificate, key, client-cert policy)

mod logger;
mod tls;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use logger::init_logger_with;
pub use tls::init_server_config;

/// Installs the process-wide rustls crypto provider if none is set yet.
///
/// Safe to call more than once; only the first call installs.
pub fn init_crypto_provider() {
    if CryptoProvider::get_default().is_none() {
        let _ = default_provider().install_default();
    }
}
