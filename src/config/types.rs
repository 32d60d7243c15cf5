//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_HTTP_PORT, DEFAULT_TLS_BASE_PORT, DEFAULT_TLS_INSTANCES};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for the certificate identity server and inspector.
///
/// Without `--inspect`, the binary serves all three extraction paths: the
/// mTLS login listeners (socket-peer path), and the plain-HTTP API for the
/// proxy-header and upload paths.
#[derive(Debug, Clone, Parser)]
#[command(name = "cert_identity", version, about)]
pub struct Config {
    /// Decode one certificate file (PEM or DER) and print its identity,
    /// then exit.
    #[arg(long, value_name = "FILE")]
    pub inspect: Option<PathBuf>,

    /// Server certificate chain (PEM) for the mTLS listeners.
    #[arg(long, value_name = "FILE", default_value = "certs/localhost.pem")]
    pub cert: PathBuf,

    /// Server private key (PEM) for the mTLS listeners.
    #[arg(long, value_name = "FILE", default_value = "certs/localhost-key.pem")]
    pub key: PathBuf,

    /// CA bundle (PEM) used to attest client certificates. Without it,
    /// any presented client certificate is accepted unattested; clients
    /// presenting none are still rejected at the application layer.
    #[arg(long, value_name = "FILE")]
    pub client_ca: Option<PathBuf>,

    /// Plain-HTTP API port (proxy-header and upload paths).
    #[arg(long, default_value_t = DEFAULT_HTTP_PORT)]
    pub http_port: u16,

    /// Base port for the mTLS login listeners.
    #[arg(long, default_value_t = DEFAULT_TLS_BASE_PORT)]
    pub tls_port: u16,

    /// Number of mTLS listener instances on consecutive ports.
    #[arg(long, default_value_t = DEFAULT_TLS_INSTANCES)]
    pub tls_instances: u16,

    /// JSON file with additional OID label entries
    /// (`{"<oid>": {"short": "...", "label": "..."}}`).
    #[arg(long, value_name = "FILE")]
    pub oid_labels: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}
