//! Overlap testing and bounded free-slot search

use log::warn;

use super::{Footprint, GridPosition, GRID_MIN, GRID_UNITS};

/// Axis-aligned bounding-box intersection test between two cell regions
#[inline]
pub fn overlaps(
    pos_a: GridPosition,
    size_a: Footprint,
    pos_b: GridPosition,
    size_b: Footprint,
) -> bool {
    pos_a.col < pos_b.col + size_b.cols
        && pos_a.col + size_a.cols > pos_b.col
        && pos_a.row < pos_b.row + size_b.rows
        && pos_a.row + size_a.rows > pos_b.row
}

/// Find the first cell where `footprint` fits without overlapping `existing`
///
/// Scans row-major from the clamped `start`, wrapping back to the grid
/// origin, and is bounded at one full pass over the grid. When the grid is
/// saturated the clamped `start` is returned as a degraded fallback; the
/// search never loops forever.
pub fn find_next_free_slot(
    existing: &[(GridPosition, Footprint)],
    footprint: Footprint,
    start: GridPosition,
) -> GridPosition {
    let start = start.clamped(footprint);
    let max_row = (GRID_UNITS - footprint.rows + 1).max(GRID_MIN);
    let max_col = (GRID_UNITS - footprint.cols + 1).max(GRID_MIN);

    let mut row = start.row;
    let mut col = start.col;
    let mut probes: i64 = 0;
    let budget = GRID_UNITS as i64 * GRID_UNITS as i64;

    while probes < budget {
        let candidate = GridPosition::new(row, col);
        let blocked = existing
            .iter()
            .any(|&(pos, size)| overlaps(candidate, footprint, pos, size));
        if !blocked {
            return candidate;
        }

        probes += 1;
        col += 1;
        if col > max_col {
            col = GRID_MIN;
            row += 1;
            if row > max_row {
                row = GRID_MIN;
            }
        }
        if row == start.row && col == start.col {
            // Full wrap: every candidate slot is occupied
            break;
        }
    }

    warn!(
        "icon grid saturated, falling back to requested slot ({}, {})",
        start.row, start.col
    );
    start
}
