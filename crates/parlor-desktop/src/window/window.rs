//! Window entity and display modes

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};

use super::WindowId;

/// Default window size on open
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(800.0, 600.0);

/// Minimum window size (resize floor; there is no ceiling)
pub const MIN_WINDOW_SIZE: Size = Size::new(400.0, 300.0);

/// Fixed footprint of a picture-in-picture window
pub const PIP_SIZE: Size = Size::new(320.0, 180.0);

/// Gap between a pip window and the viewport's bottom-right corner
pub const PIP_MARGIN: f32 = 16.0;

/// First z-index handed out; the counter only ever grows from here
pub const Z_INDEX_BASE: u32 = 1000;

/// Upper bound accepted for restored z-index values
pub const Z_INDEX_MAX: u32 = 1_000_000;

/// Display mode - mutually exclusive states layered on one entity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Pip,
}

/// Viewport edge a window is snapped against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapZone {
    Left,
    Right,
    Top,
}

/// A window in the virtual desktop
///
/// Created on open, mutated through its lifetime, destroyed on close.
#[derive(Clone, Debug)]
pub struct WindowEntity {
    /// Unique identifier
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Stable identifier grouping all windows for the same view
    pub logical_id: String,
    /// Top-left position in viewport pixels (may be partially off-screen)
    pub position: Vec2,
    /// Size in pixels
    pub size: Size,
    /// Current display mode
    pub mode: DisplayMode,
    /// Mode to restore when leaving Minimized
    pub(crate) prev_mode: Option<DisplayMode>,
    /// Stacking order (higher = on top); assigned from the monotonic counter
    pub z_index: u32,
    /// Snap zone the window currently occupies, if any
    pub snap_zone: Option<SnapZone>,
}

impl WindowEntity {
    /// Rebuild an entity from persisted state (used during hydration)
    pub fn restored(
        id: WindowId,
        title: String,
        logical_id: String,
        position: Vec2,
        size: Size,
        mode: DisplayMode,
        z_index: u32,
    ) -> Self {
        Self {
            id,
            title,
            logical_id,
            position,
            size,
            mode,
            prev_mode: None,
            z_index,
            snap_zone: None,
        }
    }

    /// Whether the window participates in visible/selectable sets
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.mode != DisplayMode::Minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_serde_lowercase() {
        assert_eq!(serde_json::to_string(&DisplayMode::Pip).unwrap(), "\"pip\"");
        let mode: DisplayMode = serde_json::from_str("\"maximized\"").unwrap();
        assert_eq!(mode, DisplayMode::Maximized);
    }

    #[test]
    fn test_restored_window_visibility() {
        let w = WindowEntity::restored(
            1,
            "Calendar".to_string(),
            "calendar".to_string(),
            Vec2::new(100.0, 100.0),
            DEFAULT_WINDOW_SIZE,
            DisplayMode::Minimized,
            Z_INDEX_BASE,
        );
        assert!(!w.is_visible());
    }
}
