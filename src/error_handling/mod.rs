//! Error handling.
//!
//! This module defines the error types used throughout the crate:
//! - **Extraction errors**: failures while turning a raw certificate source
//!   into a canonical identity (the library's typed errors)
//! - **Initialization errors**: failures while setting up the logger, the
//!   TLS listeners, or the OID registry

mod types;

// Re-export public API
pub use types::{ExtractionError, InitializationError};
