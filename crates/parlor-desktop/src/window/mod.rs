//! Window management module
//!
//! Provides the window entity, the display-mode state machine, and the
//! manager owning lifecycle, focus, and z-order.

mod handle;
mod manager;
#[allow(clippy::module_inception)]
mod window;

pub use handle::ResizeHandle;
pub use manager::WindowManager;
pub use window::{
    DisplayMode, SnapZone, WindowEntity, DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE, PIP_MARGIN,
    PIP_SIZE, Z_INDEX_BASE, Z_INDEX_MAX,
};

/// Unique window identifier
pub type WindowId = u64;
