//! Namespace-scoped view of the host settings store.
//!
//! The editor host keeps settings as a flat JSON document with dotted keys
//! (`"move-analyzer.server.path": "..."`). A [`SettingsSnapshot`] is the
//! slice of that document under one namespace, with the prefix stripped,
//! frozen at the moment it was taken.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Read-only key-value view of the settings visible under one namespace.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SettingsSnapshot {
    entries: Map<String, Value>,
}

impl SettingsSnapshot {
    /// Wrap an already namespace-scoped map.
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Snapshot with no settings configured — every accessor falls back to
    /// its default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Extract the `namespace` slice from a flat host settings document.
    ///
    /// Keys of the form `"<namespace>.<rest>"` are kept under `<rest>`;
    /// everything else is ignored. A non-object document yields an empty
    /// snapshot rather than an error — the host owns the document shape and
    /// this component only projects out of it.
    pub fn from_document(doc: &Value, namespace: &str) -> Self {
        let mut entries = Map::new();
        if let Value::Object(map) = doc {
            let prefix = format!("{namespace}.");
            for (key, value) in map {
                if let Some(rest) = key.strip_prefix(&prefix) {
                    entries.insert(rest.to_string(), value.clone());
                }
            }
        }
        Self { entries }
    }

    /// Parse a settings document from JSON text and scope it to `namespace`.
    pub fn from_json_str(text: &str, namespace: &str) -> Result<Self, AppError> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|e| AppError::Settings(format!("parse error in settings document: {e}")))?;
        Ok(Self::from_document(&doc, namespace))
    }

    /// Read a settings document from disk and scope it to `namespace`.
    pub fn from_document_file(path: &Path, namespace: &str) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::Settings(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&text, namespace)
    }

    /// The string value stored under `key`, or `None` when the key is absent
    /// or holds a non-string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Diagnostic rendering: the snapshot as a JSON object, serialized at call
/// time. Intended for logging only — no ordering or schema guarantees.
impl fmt::Display for SettingsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
