//! Grid cell position and icon footprint

use serde::{Deserialize, Serialize};

use super::{GRID_MIN, GRID_UNITS};

/// A cell in the abstract placement grid, independent of viewport pixels
///
/// Both axes are 1-based and valid inside `[1, 200]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: i32,
    pub col: i32,
}

impl GridPosition {
    /// Create a new position (not validated; see [`GridPosition::clamped`])
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Round each axis to the nearest multiple of `snap_size`
    ///
    /// A snap size of 1 or less leaves the position untouched.
    pub fn snapped(self, snap_size: i32) -> Self {
        if snap_size <= 1 {
            return self;
        }
        let snap = |v: i32| {
            let units = (v as f32 / snap_size as f32).round() as i32;
            units * snap_size
        };
        Self::new(snap(self.row), snap(self.col))
    }

    /// Constrain the position so `footprint` stays fully inside the grid
    pub fn clamped(self, footprint: Footprint) -> Self {
        let max_row = (GRID_UNITS - footprint.rows + 1).max(GRID_MIN);
        let max_col = (GRID_UNITS - footprint.cols + 1).max(GRID_MIN);
        Self::new(
            self.row.clamp(GRID_MIN, max_row),
            self.col.clamp(GRID_MIN, max_col),
        )
    }

    /// Check that the position keeps `footprint` inside the grid
    #[inline]
    pub fn in_bounds(self, footprint: Footprint) -> bool {
        self == self.clamped(footprint)
    }
}

/// Cells occupied by an icon, anchored at its top-left grid position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub rows: i32,
    pub cols: i32,
}

impl Footprint {
    /// Create a new footprint
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Single-cell footprint
    pub const SINGLE: Footprint = Footprint { rows: 1, cols: 1 };
}

impl Default for Footprint {
    /// Standard desktop icon footprint (10x10 cells)
    fn default() -> Self {
        Self::new(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapped_rounds_to_multiple() {
        let pos = GridPosition::new(13, 27);
        let snapped = pos.snapped(10);
        assert_eq!(snapped, GridPosition::new(10, 30));
    }

    #[test]
    fn test_snapped_identity_for_small_snap() {
        let pos = GridPosition::new(13, 27);
        assert_eq!(pos.snapped(1), pos);
        assert_eq!(pos.snapped(0), pos);
    }

    #[test]
    fn test_clamped_keeps_footprint_inside() {
        let footprint = Footprint::new(10, 10);

        let low = GridPosition::new(-5, 0).clamped(footprint);
        assert_eq!(low, GridPosition::new(1, 1));

        let high = GridPosition::new(500, 198).clamped(footprint);
        assert_eq!(high, GridPosition::new(191, 191));
    }

    #[test]
    fn test_clamped_oversized_footprint() {
        // A footprint larger than the grid still resolves to the origin
        let footprint = Footprint::new(500, 500);
        let pos = GridPosition::new(50, 50).clamped(footprint);
        assert_eq!(pos, GridPosition::new(1, 1));
    }

    #[test]
    fn test_in_bounds() {
        let footprint = Footprint::new(10, 10);
        assert!(GridPosition::new(1, 1).in_bounds(footprint));
        assert!(GridPosition::new(191, 191).in_bounds(footprint));
        assert!(!GridPosition::new(192, 1).in_bounds(footprint));
        assert!(!GridPosition::new(0, 1).in_bounds(footprint));
    }
}
