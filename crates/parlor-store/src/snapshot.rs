//! Versioned snapshot envelope
//!
//! The blob written to the medium is the flattened state tagged with a
//! `_version` field, the hook the migration chain keys on. Snapshots are
//! transient: built on every save, consumed once at boot.

use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Schema version written by this build
pub const CURRENT_VERSION: &str = "1.0.0";

/// Version assumed for blobs written before the envelope existed
pub const LEGACY_VERSION: &str = "0.0.0";

fn legacy_version() -> String {
    LEGACY_VERSION.to_string()
}

/// The serialized envelope: a version tag over the flattened state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for migration support
    #[serde(rename = "_version", default = "legacy_version")]
    pub version: String,
    #[serde(flatten)]
    pub state: AppState,
}

impl Snapshot {
    /// Wrap a state in a current-version envelope
    pub fn from_state(state: AppState) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            state,
        }
    }
}
