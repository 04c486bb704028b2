//! Icon layout manager

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::grid::{overlaps, GridPosition, GRID_UNITS};

use super::registry::{builtin_icons, slot_position};
use super::IconEntity;

/// Sort option for icon reflow
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Case-folded label, ascending
    #[default]
    Name,
    /// Original creation (registry) order
    Date,
    /// Usage count descending, creation-order ties
    Usage,
}

/// Icon layout manager
///
/// Owns the icon entities, their grid positions, the pinned set, and
/// per-icon usage counters. Every operation is a total function over the
/// current state: an unknown id is a silent no-op, never an error.
pub struct IconLayoutManager {
    /// All icons in creation (registry) order; this Vec is never reordered,
    /// so the index doubles as the creation timestamp
    icons: Vec<IconEntity>,
    /// Usage counters feeding usage-based sort
    usage: HashMap<String, u32>,
    /// Last applied sort option
    last_sort: Option<SortOption>,
}

impl Default for IconLayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl IconLayoutManager {
    /// Create a manager populated from the built-in registry
    pub fn new() -> Self {
        Self {
            icons: builtin_icons(),
            usage: HashMap::new(),
            last_sort: None,
        }
    }

    /// Move an icon to a target cell
    ///
    /// No-op when the id is unknown or the icon is pinned. The target is
    /// clamped to keep the footprint inside the grid; collision avoidance
    /// is the caller's responsibility before invoking this.
    pub fn move_icon(&mut self, id: &str, target: GridPosition) {
        if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == id) {
            if icon.pinned {
                return;
            }
            icon.position = target.clamped(icon.footprint);
        }
    }

    /// Pin an icon in place (position untouched)
    pub fn pin(&mut self, id: &str) {
        if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == id) {
            icon.pinned = true;
        }
    }

    /// Unpin an icon (position untouched)
    pub fn unpin(&mut self, id: &str) {
        if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == id) {
            icon.pinned = false;
        }
    }

    /// Record one use of an icon (feeds usage-based sort)
    pub fn record_usage(&mut self, id: &str) {
        if self.icons.iter().any(|icon| icon.id == id) {
            let count = self.usage.entry(id.to_string()).or_insert(0);
            *count = count.saturating_add(1);
        }
    }

    /// Sort icons and reflow them into row-major grid positions
    ///
    /// The sort is deterministic and stable; the sorted sequence is laid
    /// out from the fixed layout origin, five icons per row. Pinned icons
    /// keep their positions, and reflow slots that would land on a pinned
    /// icon are skipped.
    pub fn sort(&mut self, option: SortOption) {
        let mut order: Vec<usize> = (0..self.icons.len())
            .filter(|&i| !self.icons[i].pinned)
            .collect();

        match option {
            SortOption::Name => {
                order.sort_by_key(|&i| self.icons[i].label.to_lowercase());
            }
            SortOption::Date => {
                // Creation order: the Vec index already is it
            }
            SortOption::Usage => {
                order.sort_by_key(|&i| std::cmp::Reverse(self.usage_count(&self.icons[i].id)));
            }
        }

        let pinned: Vec<(GridPosition, crate::grid::Footprint)> = self
            .icons
            .iter()
            .filter(|icon| icon.pinned)
            .map(|icon| (icon.position, icon.footprint))
            .collect();

        // Bounded like the free-slot search: slot_position clamps, so deep
        // slots repeat and a fully blocked layout could otherwise spin
        let budget = (GRID_UNITS as usize) * (GRID_UNITS as usize);
        let mut slot = 0usize;
        for index in order {
            let footprint = self.icons[index].footprint;
            let mut position = slot_position(slot);
            let mut probes = 0usize;
            while pinned
                .iter()
                .any(|&(pos, size)| overlaps(position, footprint, pos, size))
            {
                probes += 1;
                if probes >= budget {
                    break;
                }
                slot += 1;
                position = slot_position(slot);
            }
            self.icons[index].position = position;
            slot += 1;
        }

        self.last_sort = Some(option);
    }

    /// Restore persisted layout state
    ///
    /// Positions for ids absent from the registry are ignored; known ids
    /// are clamped to the grid. Pins and usage counters are applied the
    /// same way.
    pub fn hydrate(
        &mut self,
        positions: &BTreeMap<String, GridPosition>,
        pinned: &BTreeSet<String>,
        usage: &BTreeMap<String, u32>,
        last_sort: Option<SortOption>,
    ) {
        for icon in &mut self.icons {
            if let Some(&position) = positions.get(&icon.id) {
                icon.position = position.clamped(icon.footprint);
            }
            icon.pinned = pinned.contains(&icon.id);
            if let Some(&count) = usage.get(&icon.id) {
                self.usage.insert(icon.id.clone(), count);
            }
        }
        self.last_sort = last_sort;
    }

    // =========================================================================
    // Read-only surface
    // =========================================================================

    /// All icons in creation order
    #[inline]
    pub fn icons(&self) -> &[IconEntity] {
        &self.icons
    }

    /// Look up an icon by id
    pub fn get(&self, id: &str) -> Option<&IconEntity> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// Snapshot of id -> position
    pub fn position_map(&self) -> BTreeMap<String, GridPosition> {
        self.icons
            .iter()
            .map(|icon| (icon.id.clone(), icon.position))
            .collect()
    }

    /// Ids of currently pinned icons
    pub fn pinned_ids(&self) -> BTreeSet<String> {
        self.icons
            .iter()
            .filter(|icon| icon.pinned)
            .map(|icon| icon.id.clone())
            .collect()
    }

    /// Usage counters for all icons that have been used
    pub fn usage_map(&self) -> BTreeMap<String, u32> {
        self.usage
            .iter()
            .map(|(id, &count)| (id.clone(), count))
            .collect()
    }

    /// Usage count for one icon (zero when never used or unknown)
    #[inline]
    pub fn usage_count(&self, id: &str) -> u32 {
        self.usage.get(id).copied().unwrap_or(0)
    }

    /// Last applied sort option, if any
    #[inline]
    pub fn last_sort(&self) -> Option<SortOption> {
        self.last_sort
    }
}
