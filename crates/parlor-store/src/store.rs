//! The persistent store
//!
//! `load` is a total function from an arbitrary blob to a fully valid
//! `AppState`: parse, migrate, validate field by field, reconcile, merge
//! over defaults. It never returns an error and never yields a partially
//! typed state. `save` is fire-and-forget; the load-time merge re-derives
//! consistency regardless of write ordering.

use log::warn;
use serde_json::Value;

use crate::medium::StorageMedium;
use crate::migrate::{self, Version};
use crate::reconcile::reconcile;
use crate::schema::apply_fields;
use crate::snapshot::{Snapshot, LEGACY_VERSION};
use crate::state::AppState;

/// Key the desktop state is stored under
pub const STORAGE_KEY: &str = "parlor.desktop.v1";

/// Versioned, self-repairing state store over a pluggable medium
pub struct PersistentStore<M: StorageMedium> {
    medium: M,
}

impl<M: StorageMedium> PersistentStore<M> {
    /// Wrap a persistence medium
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Load, migrate, validate, and repair the stored state
    ///
    /// Every failure path degrades toward `AppState::default()`; this
    /// never fails and never panics.
    pub fn load(&mut self) -> AppState {
        let Some(blob) = self.medium.load(STORAGE_KEY) else {
            return AppState::default();
        };

        let mut raw: Value = match serde_json::from_str(&blob) {
            Ok(value) => value,
            Err(err) => {
                warn!("persisted state unparseable ({err}), using defaults");
                return AppState::default();
            }
        };

        let version = raw
            .get("_version")
            .and_then(Value::as_str)
            .unwrap_or(LEGACY_VERSION);
        let version = Version::parse(version).unwrap_or(Version::ZERO);
        migrate::run_chain(&mut raw, version, migrate::chain());

        let Some(map) = raw.as_object() else {
            warn!("persisted state is not an object, using defaults");
            return AppState::default();
        };

        let mut state = AppState::default();
        apply_fields(&mut state, map);
        reconcile(&mut state);
        state
    }

    /// Write a snapshot of `state`
    ///
    /// Fire-and-forget: a serialization failure is logged and swallowed.
    pub fn save(&mut self, state: &AppState) {
        match serde_json::to_string(&Snapshot::from_state(state.clone())) {
            Ok(blob) => self.medium.save(STORAGE_KEY, &blob),
            Err(err) => warn!("failed to serialize desktop state: {err}"),
        }
    }

    /// Access the underlying medium (for tests and host integration)
    pub fn medium(&self) -> &M {
        &self.medium
    }
}
