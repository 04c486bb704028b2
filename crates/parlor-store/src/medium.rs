//! Persistence medium abstraction
//!
//! The store is transport-agnostic: anything that can hold a string blob
//! per key with last-write-wins semantics qualifies. Hosts supply their own
//! medium (browser storage, a file, a KV service); tests use the in-memory
//! one.

use std::collections::HashMap;

/// A keyed string-blob store with last-write-wins semantics
pub trait StorageMedium {
    /// Read the blob stored under `key`, if any
    fn load(&mut self, key: &str) -> Option<String>;

    /// Write `blob` under `key`, replacing any previous value
    fn save(&mut self, key: &str, blob: &str);
}

/// In-memory medium for tests and embedding hosts without durable storage
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: HashMap<String, String>,
}

impl MemoryMedium {
    /// Create an empty medium
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, bypassing the store (for tests)
    pub fn seed(&mut self, key: &str, blob: &str) {
        self.entries.insert(key.to_string(), blob.to_string());
    }

    /// Peek at a stored blob without going through the trait
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageMedium for MemoryMedium {
    fn load(&mut self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, blob: &str) {
        self.entries.insert(key.to_string(), blob.to_string());
    }
}
