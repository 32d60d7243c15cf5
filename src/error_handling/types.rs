//! Error type definitions.

use thiserror::Error;

/// Errors produced while turning a raw certificate source into an identity.
///
/// Each variant corresponds to one failure policy:
/// - `Authentication` is fatal and only ever raised by the socket-peer path,
///   where a client certificate is mandatory.
/// - `Format` means the input is not PEM or DER at all (wrong kind of file).
/// - `Parse` means the input is structurally DER but corrupt; it carries the
///   byte offset where decoding broke.
/// - `UnsupportedFeature` means the certificate was recognized but uses a
///   version or critical extension this decoder does not handle.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No client certificate was presented where one is mandatory.
    #[error("certificate required: {0}")]
    Authentication(String),

    /// Input is neither a PEM envelope nor binary DER.
    #[error("unrecognized certificate format: {0}")]
    Format(String),

    /// Structurally DER but corrupt. `offset` is where decoding broke.
    #[error("malformed DER at byte {offset}: {reason}")]
    Parse {
        /// Byte offset into the input where the structure broke.
        offset: usize,
        /// Decoder-supplied description of the failure.
        reason: String,
    },

    /// Recognized but unsupported certificate version or critical extension.
    #[error("unsupported certificate feature: {0}")]
    UnsupportedFeature(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// Error setting up the TLS listener configuration (certificates, key,
    /// client-certificate policy).
    #[error("TLS setup error: {0}")]
    TlsSetupError(String),

    /// Error loading the OID registry extension file.
    #[error("OID registry error: {0}")]
    RegistryError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_messages_are_descriptive() {
        let err = ExtractionError::Authentication("certificate required".into());
        assert!(err.to_string().contains("certificate required"));

        let err = ExtractionError::Format("not a PEM certificate".into());
        assert!(err.to_string().contains("unrecognized certificate format"));

        let err = ExtractionError::Parse {
            offset: 17,
            reason: "truncated element".into(),
        };
        assert!(
            err.to_string().contains("byte 17"),
            "offset should appear in message"
        );
        assert!(err.to_string().contains("truncated element"));

        let err = ExtractionError::UnsupportedFeature("certificate version v4".into());
        assert!(err.to_string().contains("unsupported certificate feature"));
    }

    #[test]
    fn test_initialization_error_messages() {
        let err = InitializationError::TlsSetupError("no private key found".into());
        assert!(err.to_string().contains("no private key found"));

        let err = InitializationError::RegistryError("bad JSON".into());
        assert!(err.to_string().contains("bad JSON"));
    }
}
