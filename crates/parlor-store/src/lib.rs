//! Defensive persisted-state store
//!
//! Converts an arbitrary, possibly stale or corrupt serialized blob into a
//! fully valid desktop state, always succeeding:
//!
//! 1. parse the blob (`store`);
//! 2. run the ordered migration chain keyed by `_version` (`migrate`);
//! 3. validate each field against its own schema entry (`schema`);
//! 4. apply type-specific repairs: clamps, sanitizers, caps (`repair`);
//! 5. reconcile cross-field references (`reconcile`);
//! 6. merge the survivors over compiled-in defaults (`state`).
//!
//! A completely unparseable blob degrades to fresh defaults rather than a
//! partially hydrated state. No step raises to the caller; diagnostics go
//! through `log`.

pub mod medium;
pub mod migrate;
pub mod reconcile;
pub mod repair;
pub mod schema;
pub mod snapshot;
pub mod state;
pub mod store;

pub use medium::{MemoryMedium, StorageMedium};
pub use schema::{FieldError, FieldSchema, FIELDS};
pub use snapshot::{Snapshot, CURRENT_VERSION};
pub use state::{AppState, PersistedWindow};
pub use store::{PersistentStore, STORAGE_KEY};
