//! OID-to-label registry for DN attribute types.
//!
//! Maps dotted OID strings (`2.5.4.3`) to a short attribute name (`CN`) and
//! a display label (`Common Name (CN)`). Lookups are pure and total: an
//! unknown OID comes back unchanged, so rendering never fails on exotic
//! attributes. The table is read-only after construction; additional entries
//! can be loaded from a JSON file at startup so new OIDs never require a
//! code change.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::InitializationError;

/// One registry entry: short attribute name and human-readable label.
#[derive(Debug, Clone, Deserialize)]
pub struct OidEntry {
    /// Short attribute name used as the canonical key, e.g. `CN`.
    pub short: String,
    /// Display label, e.g. `Common Name (CN)`.
    pub label: String,
}

/// Built-in attribute types: (OID, short name, display label).
/// RFC 4519 / X.520 DN attributes plus the PKCS#9 email attribute.
const BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    ("2.5.4.3", "CN", "Common Name (CN)"),
    ("2.5.4.4", "SN", "Surname (SN)"),
    ("2.5.4.5", "serialNumber", "Serial Number"),
    ("2.5.4.6", "C", "Country (C)"),
    ("2.5.4.7", "L", "Locality (L)"),
    ("2.5.4.8", "ST", "State or Province (ST)"),
    ("2.5.4.9", "STREET", "Street Address"),
    ("2.5.4.10", "O", "Organization (O)"),
    ("2.5.4.11", "OU", "Organizational Unit (OU)"),
    ("2.5.4.12", "T", "Title (T)"),
    ("2.5.4.17", "postalCode", "Postal Code"),
    ("2.5.4.42", "GN", "Given Name (GN)"),
    ("2.5.4.97", "organizationIdentifier", "Organization Identifier"),
    ("1.2.840.113549.1.9.1", "emailAddress", "Email Address"),
    ("0.9.2342.19200300.100.1.1", "UID", "User ID (UID)"),
    ("0.9.2342.19200300.100.1.25", "DC", "Domain Component (DC)"),
];

/// Read-only OID lookup table, constructed once at startup and passed by
/// reference wherever attribute keys are rendered.
#[derive(Debug, Clone)]
pub struct OidRegistry {
    by_oid: HashMap<String, OidEntry>,
    // Short name -> display label, for keys that are already short names.
    by_short: HashMap<String, String>,
}

impl Default for OidRegistry {
    fn default() -> Self {
        let mut registry = OidRegistry {
            by_oid: HashMap::new(),
            by_short: HashMap::new(),
        };
        for (oid, short, label) in BUILTIN_ENTRIES {
            registry.insert(oid, short, label);
        }
        registry
    }
}

impl OidRegistry {
    /// Returns the display label for `oid`, or `oid` unchanged if unknown.
    pub fn lookup<'a>(&'a self, oid: &'a str) -> &'a str {
        self.by_oid.get(oid).map(|e| e.label.as_str()).unwrap_or(oid)
    }

    /// Returns the short attribute name for `oid` (`CN` for `2.5.4.3`), or
    /// `oid` unchanged if unknown.
    pub fn short_name<'a>(&'a self, oid: &'a str) -> &'a str {
        self.by_oid.get(oid).map(|e| e.short.as_str()).unwrap_or(oid)
    }

    /// Returns the display label for an attribute key that may be either a
    /// dotted OID or a short name; unknown keys come back unchanged.
    pub fn display_label<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(entry) = self.by_oid.get(key) {
            return &entry.label;
        }
        self.by_short.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Adds one entry, replacing any previous mapping for the same OID.
    /// Mainly useful in tests and for programmatic table substitution.
    pub fn with_entry(mut self, oid: &str, short: &str, label: &str) -> Self {
        self.insert(oid, short, label);
        self
    }

    /// Loads additional entries from a JSON file shaped as
    /// `{ "<oid>": { "short": "...", "label": "..." }, ... }`.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<(), InitializationError> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            InitializationError::RegistryError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let entries: HashMap<String, OidEntry> = serde_json::from_str(&data).map_err(|e| {
            InitializationError::RegistryError(format!("invalid JSON in {}: {}", path.display(), e))
        })?;
        for (oid, entry) in entries {
            self.insert(&oid, &entry.short, &entry.label);
        }
        Ok(())
    }

    fn insert(&mut self, oid: &str, short: &str, label: &str) {
        self.by_short.insert(short.to_string(), label.to_string());
        self.by_oid.insert(
            oid.to_string(),
            OidEntry {
                short: short.to_string(),
                label: label.to_string(),
            },
        );
    }
}

/// Builds the registry used for the lifetime of the process: the built-in
/// table, optionally extended from a JSON file named on the command line.
pub fn init_registry(path: Option<&Path>) -> Result<OidRegistry, InitializationError> {
    let mut registry = OidRegistry::default();
    if let Some(path) = path {
        registry.extend_from_file(path)?;
        log::info!("Loaded extra OID labels from {}", path.display());
    }
    Ok(registry)
}
