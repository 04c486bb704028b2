//! Icon entity

use serde::{Deserialize, Serialize};

use crate::grid::{Footprint, GridPosition};

/// What an icon represents on the desktop surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Launches an application view
    #[default]
    App,
    /// Shortcut into a domain record (listing, contact, ...)
    Shortcut,
    /// System surface (settings, trash, ...)
    System,
}

/// A desktop icon
///
/// Icons are permanent: created once from the built-in registry at
/// initialization, never destroyed, only repositioned, pinned, or toggled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IconEntity {
    /// Stable identifier (registry key)
    pub id: String,
    /// Display label
    pub label: String,
    /// Anchor cell on the placement grid
    pub position: GridPosition,
    /// Pinned icons are immune to relocation by drags and sorts
    #[serde(default)]
    pub pinned: bool,
    /// Icon category
    #[serde(default)]
    pub kind: IconKind,
    /// Window logical id this icon opens, if any
    #[serde(default)]
    pub logical_id: Option<String>,
    /// Cells the icon occupies
    #[serde(default)]
    pub footprint: Footprint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serde_defaults() {
        let json = r#"{"id":"settings","label":"Settings","position":{"row":5,"col":5}}"#;
        let icon: IconEntity = serde_json::from_str(json).unwrap();

        assert_eq!(icon.id, "settings");
        assert!(!icon.pinned);
        assert_eq!(icon.kind, IconKind::App);
        assert!(icon.logical_id.is_none());
        assert_eq!(icon.footprint, Footprint::new(10, 10));
    }
}
