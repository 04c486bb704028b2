//! Virtual desktop engine
//!
//! Headless desktop logic for an embedded workspace surface: icon layout
//! on an abstract grid, window lifecycle with display modes and z-order,
//! and the drag-resolution contract the host surface drives.
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Pixel-space geometry (`Vec2`, `Size`)
//! - [`grid`]: The abstract 200x200 placement grid and its conversions
//! - [`icon`]: Icon entities, the built-in registry, and layout management
//! - [`window`]: Window lifecycle, focus, and z-order
//! - [`input`]: Drag-resolution collaborator contract
//!
//! ## Example
//!
//! ```rust
//! use parlor_desktop::{IconLayoutManager, Size, SortOption, WindowManager};
//!
//! let mut icons = IconLayoutManager::new();
//! icons.sort(SortOption::Name);
//!
//! let mut windows = WindowManager::new();
//! let id = windows.open("calendar", "Calendar", Size::new(1920.0, 1080.0));
//! windows.focus(id);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is headless and testable
//!    without a host surface
//! 2. **Total Operations**: Every operation is synchronous and total;
//!    unknown ids are silent no-ops
//! 3. **Resolution Independence**: Icon layout lives on the abstract grid
//!    and survives viewport changes

pub mod grid;
pub mod icon;
pub mod input;
pub mod math;
pub mod window;

// Re-export core types for convenience
pub use grid::{Footprint, GridPosition, GRID_MIN, GRID_UNITS};
pub use icon::{IconEntity, IconKind, IconLayoutManager, SortOption};
pub use input::{DragOutcome, DragProposal, DragResolver, DragSession};
pub use math::{Size, Vec2};
pub use window::{
    DisplayMode, ResizeHandle, SnapZone, WindowEntity, WindowId, WindowManager,
    DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE,
};
