//! Key registry - identifier to key-entity lookup
//!
//! Built once at initialize by scanning the key entities the host exposes,
//! then treated as read-only. The first occurrence of an identifier wins;
//! later duplicates are dropped with a debug log, matching how a physical
//! keyboard scan can report the same key twice.

use std::collections::HashMap;
use tracing::debug;

/// One key on the host keyboard, as discovered by the startup scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntity {
    /// Character string the host reports for this key (`"a"`, `"enter"`).
    pub identifier: String,
    /// Whether the key is a function/modifier key rather than a character.
    pub function_key: bool,
}

impl KeyEntity {
    pub fn new(identifier: impl Into<String>, function_key: bool) -> Self {
        Self {
            identifier: identifier.into(),
            function_key,
        }
    }
}

/// Read-only lookup table from string identifiers to key entities.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    keys: HashMap<String, KeyEntity>,
}

impl KeyRegistry {
    /// Build the registry from a host scan. Empty identifiers are skipped;
    /// for duplicates the first occurrence wins.
    pub fn from_scan<I>(scan: I) -> Self
    where
        I: IntoIterator<Item = KeyEntity>,
    {
        let mut keys: HashMap<String, KeyEntity> = HashMap::new();
        for entity in scan {
            if entity.identifier.is_empty() {
                continue;
            }
            if keys.contains_key(&entity.identifier) {
                debug!(identifier = %entity.identifier, "duplicate keyboard key found, skipping");
                continue;
            }
            keys.insert(entity.identifier.clone(), entity);
        }
        Self { keys }
    }

    pub fn lookup(&self, identifier: &str) -> Option<&KeyEntity> {
        self.keys.get(identifier)
    }

    /// Convenience overload for digit keys: stringifies first.
    pub fn lookup_digit(&self, digit: i64) -> Option<&KeyEntity> {
        self.lookup(&digit.to_string())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
