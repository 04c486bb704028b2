//! Grid Coordinate System
//!
//! Pure geometry over the abstract 200x200 icon placement grid:
//! unit/pixel conversion, snapping, footprint clamping, overlap testing,
//! and bounded free-slot search. Everything here is stateless.

mod convert;
mod position;
mod search;

pub use convert::{grid_to_pixel, pixel_to_grid, DEFAULT_VIEWPORT_WIDTH};
pub use position::{Footprint, GridPosition};
pub use search::{find_next_free_slot, overlaps};

/// Number of cells along each axis of the placement grid
pub const GRID_UNITS: i32 = 200;

/// First valid cell index on each axis (the grid is 1-based)
pub const GRID_MIN: i32 = 1;
