//! Icon layout module
//!
//! Desktop icons are permanent entities created once from the built-in
//! registry. The layout manager owns their grid positions, the pinned set,
//! and per-icon usage counters.

#[allow(clippy::module_inception)]
mod icon;
mod manager;
mod registry;

pub use icon::{IconEntity, IconKind};
pub use manager::{IconLayoutManager, SortOption};
pub use registry::{builtin_icons, slot_position, ICONS_PER_ROW, LAYOUT_ORIGIN, LAYOUT_STRIDE};
