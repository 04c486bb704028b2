//! Built-in icon registry
//!
//! The desktop's icon set is fixed at startup: one entry per application
//! surface, laid out row-major from the layout origin. Hydration from a
//! persisted snapshot may reposition these icons but never add or remove
//! entries.

use crate::grid::{Footprint, GridPosition};

use super::{IconEntity, IconKind};

/// Icons per row in the default layout and after a sort reflow
pub const ICONS_PER_ROW: usize = 5;

/// Top-left anchor cell of the default layout and of sort reflows
pub const LAYOUT_ORIGIN: GridPosition = GridPosition::new(5, 5);

/// Cell stride between icon anchors (larger than the default footprint,
/// so adjacent slots never overlap)
pub const LAYOUT_STRIDE: i32 = 12;

struct IconSpec {
    id: &'static str,
    label: &'static str,
    kind: IconKind,
    logical_id: Option<&'static str>,
}

const BUILTIN: &[IconSpec] = &[
    IconSpec {
        id: "dashboard",
        label: "Dashboard",
        kind: IconKind::App,
        logical_id: Some("dashboard"),
    },
    IconSpec {
        id: "listings",
        label: "Listings",
        kind: IconKind::App,
        logical_id: Some("listings"),
    },
    IconSpec {
        id: "bids",
        label: "Bids",
        kind: IconKind::App,
        logical_id: Some("bids"),
    },
    IconSpec {
        id: "invoices",
        label: "Invoices",
        kind: IconKind::App,
        logical_id: Some("invoices"),
    },
    IconSpec {
        id: "contacts",
        label: "Contacts",
        kind: IconKind::App,
        logical_id: Some("contacts"),
    },
    IconSpec {
        id: "calendar",
        label: "Calendar",
        kind: IconKind::App,
        logical_id: Some("calendar"),
    },
    IconSpec {
        id: "messages",
        label: "Messages",
        kind: IconKind::App,
        logical_id: Some("messages"),
    },
    IconSpec {
        id: "voice-notes",
        label: "Voice Notes",
        kind: IconKind::App,
        logical_id: Some("voice-notes"),
    },
    IconSpec {
        id: "buddies",
        label: "Buddy List",
        kind: IconKind::App,
        logical_id: Some("buddies"),
    },
    IconSpec {
        id: "settings",
        label: "Settings",
        kind: IconKind::System,
        logical_id: Some("settings"),
    },
];

/// Row-major anchor cell for the i-th slot of the default layout
pub fn slot_position(index: usize) -> GridPosition {
    let row = LAYOUT_ORIGIN.row + (index / ICONS_PER_ROW) as i32 * LAYOUT_STRIDE;
    let col = LAYOUT_ORIGIN.col + (index % ICONS_PER_ROW) as i32 * LAYOUT_STRIDE;
    GridPosition::new(row, col).clamped(Footprint::default())
}

/// Build the full icon set in registry (creation) order
pub fn builtin_icons() -> Vec<IconEntity> {
    BUILTIN
        .iter()
        .enumerate()
        .map(|(index, spec)| IconEntity {
            id: spec.id.to_string(),
            label: spec.label.to_string(),
            position: slot_position(index),
            pinned: false,
            kind: spec.kind,
            logical_id: spec.logical_id.map(str::to_string),
            footprint: Footprint::default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::overlaps;

    #[test]
    fn test_registry_ids_unique() {
        let icons = builtin_icons();
        for (i, a) in icons.iter().enumerate() {
            for b in icons.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_default_layout_no_overlap() {
        let icons = builtin_icons();
        for (i, a) in icons.iter().enumerate() {
            for b in icons.iter().skip(i + 1) {
                assert!(
                    !overlaps(a.position, a.footprint, b.position, b.footprint),
                    "{} overlaps {}",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn test_default_layout_in_bounds() {
        for icon in builtin_icons() {
            assert!(icon.position.in_bounds(icon.footprint));
        }
    }

    #[test]
    fn test_slot_position_row_major() {
        assert_eq!(slot_position(0), LAYOUT_ORIGIN);
        assert_eq!(
            slot_position(1),
            GridPosition::new(LAYOUT_ORIGIN.row, LAYOUT_ORIGIN.col + LAYOUT_STRIDE)
        );
        assert_eq!(
            slot_position(ICONS_PER_ROW),
            GridPosition::new(LAYOUT_ORIGIN.row + LAYOUT_STRIDE, LAYOUT_ORIGIN.col)
        );
    }
}
