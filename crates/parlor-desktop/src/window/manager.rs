//! Window manager for lifecycle, focus, and z-order

use crate::math::{Size, Vec2};

use super::window::{
    DisplayMode, SnapZone, WindowEntity, DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE, PIP_MARGIN,
    PIP_SIZE, Z_INDEX_BASE,
};
use super::{ResizeHandle, WindowId};

/// Viewport assumed when the host cannot report one
const FALLBACK_VIEWPORT: Size = Size::new(1920.0, 1080.0);

/// Window manager handling lifecycle, display modes, focus, and z-order
///
/// All operations are synchronous and total: an unknown id is a silent
/// no-op. The z counter is monotonic and never reused, so the most
/// recently focused window is always topmost.
pub struct WindowManager {
    /// All windows in creation order
    windows: Vec<WindowEntity>,
    /// Currently active (focused) window
    active: Option<WindowId>,
    /// Next window id
    next_id: WindowId,
    /// Next z-index value (post-incremented on every assignment)
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            next_id: 1,
            next_z: Z_INDEX_BASE,
        }
    }

    #[inline]
    fn bump_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    fn centered(viewport: Size, size: Size) -> Vec2 {
        let viewport = if viewport.is_empty() {
            FALLBACK_VIEWPORT
        } else {
            viewport
        };
        Vec2::new(
            (viewport.width - size.width) / 2.0,
            (viewport.height - size.height) / 2.0,
        )
    }

    /// Open a window for a logical view
    ///
    /// When a non-minimized window with this `logical_id` already exists it
    /// is brought to front and its id returned unchanged - no second entity
    /// is created. Otherwise a new window opens centered in the viewport at
    /// the default size.
    pub fn open(&mut self, logical_id: &str, title: &str, viewport: Size) -> WindowId {
        if let Some(id) = self
            .windows
            .iter()
            .find(|w| w.logical_id == logical_id && w.is_visible())
            .map(|w| w.id)
        {
            self.focus(id);
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        let z_index = self.bump_z();

        self.windows.push(WindowEntity {
            id,
            title: title.to_string(),
            logical_id: logical_id.to_string(),
            position: Self::centered(viewport, DEFAULT_WINDOW_SIZE),
            size: DEFAULT_WINDOW_SIZE,
            mode: DisplayMode::Normal,
            prev_mode: None,
            z_index,
            snap_zone: None,
        });
        self.active = Some(id);
        id
    }

    /// Focus a window - the only mechanism that changes stacking order
    pub fn focus(&mut self, id: WindowId) {
        let z_index = self.next_z;
        if let Some(window) = self.get_mut(id) {
            window.z_index = z_index;
            self.next_z += 1;
            self.active = Some(id);
        }
    }

    /// Minimize a window; the entity stays in the list and its previous
    /// mode is preserved for restoration
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(window) = self.get_mut(id) {
            if window.mode != DisplayMode::Minimized {
                window.prev_mode = Some(window.mode);
                window.mode = DisplayMode::Minimized;
            }
        }
        if self.active == Some(id) {
            self.active = self.topmost_visible();
        }
    }

    /// Restore a minimized window to its previous mode
    pub fn restore(&mut self, id: WindowId) {
        if let Some(window) = self.get_mut(id) {
            if window.mode == DisplayMode::Minimized {
                window.mode = window.prev_mode.take().unwrap_or(DisplayMode::Normal);
            }
        }
    }

    /// Toggle maximized mode
    ///
    /// Entering fills the viewport and clears pip. Exiting restores the
    /// fixed default geometry rather than the pre-maximize one - a known
    /// simplification of this engine, not an accident.
    pub fn maximize(&mut self, id: WindowId, viewport: Size) {
        let viewport = if viewport.is_empty() {
            FALLBACK_VIEWPORT
        } else {
            viewport
        };
        let centered = Self::centered(viewport, DEFAULT_WINDOW_SIZE);
        if let Some(window) = self.get_mut(id) {
            if window.mode == DisplayMode::Maximized {
                window.mode = DisplayMode::Normal;
                window.size = DEFAULT_WINDOW_SIZE;
                window.position = centered;
            } else {
                window.mode = DisplayMode::Maximized;
                window.prev_mode = None;
                window.position = Vec2::ZERO;
                window.size = viewport;
                window.snap_zone = None;
            }
        }
    }

    /// Toggle picture-in-picture mode
    ///
    /// Entering clears maximized and anchors a small fixed footprint at the
    /// viewport's bottom-right.
    pub fn toggle_pip(&mut self, id: WindowId, viewport: Size) {
        let viewport = if viewport.is_empty() {
            FALLBACK_VIEWPORT
        } else {
            viewport
        };
        let centered = Self::centered(viewport, DEFAULT_WINDOW_SIZE);
        if let Some(window) = self.get_mut(id) {
            if window.mode == DisplayMode::Pip {
                window.mode = DisplayMode::Normal;
                window.size = DEFAULT_WINDOW_SIZE;
                window.position = centered;
            } else {
                window.mode = DisplayMode::Pip;
                window.prev_mode = None;
                window.size = PIP_SIZE;
                window.position = Vec2::new(
                    viewport.width - PIP_SIZE.width - PIP_MARGIN,
                    viewport.height - PIP_SIZE.height - PIP_MARGIN,
                );
                window.snap_zone = None;
            }
        }
    }

    /// Move a window by a pixel delta
    ///
    /// Ignored while maximized; otherwise unclamped, so windows may be
    /// dragged partially off-screen.
    pub fn move_by(&mut self, id: WindowId, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        if let Some(window) = self.get_mut(id) {
            if window.mode == DisplayMode::Maximized {
                return;
            }
            window.position += delta;
        }
    }

    /// Resize a window from one of the eight handles
    ///
    /// The new size is floored at the minimum with no ceiling. North/west
    /// handles shift the origin so the opposite edge stays put.
    pub fn resize(&mut self, id: WindowId, new_size: Size, handle: ResizeHandle) {
        if let Some(window) = self.get_mut(id) {
            if window.mode == DisplayMode::Maximized {
                return;
            }
            let floored = new_size.floored_at(MIN_WINDOW_SIZE);
            if handle.affects_width() {
                if handle.affects_x() {
                    window.position.x += window.size.width - floored.width;
                }
                window.size.width = floored.width;
            }
            if handle.affects_height() {
                if handle.affects_y() {
                    window.position.y += window.size.height - floored.height;
                }
                window.size.height = floored.height;
            }
        }
    }

    /// Record the snap zone a window occupies
    pub fn set_snap_zone(&mut self, id: WindowId, zone: Option<SnapZone>) {
        if let Some(window) = self.get_mut(id) {
            window.snap_zone = zone;
        }
    }

    /// Close a window
    ///
    /// If it was active, the active reference moves to the topmost
    /// remaining visible window (never left dangling).
    pub fn close(&mut self, id: WindowId) {
        self.windows.retain(|w| w.id != id);
        if self.active == Some(id) {
            self.active = self.topmost_visible();
        }
    }

    /// Restore persisted windows and the active reference
    ///
    /// Counters resume past the highest restored id/z so future
    /// assignments never collide or regress.
    pub fn hydrate(&mut self, windows: Vec<WindowEntity>, active: Option<WindowId>) {
        self.next_id = windows.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        self.next_z = windows
            .iter()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(Z_INDEX_BASE - 1)
            .max(Z_INDEX_BASE - 1)
            + 1;
        self.windows = windows;
        self.active = active.filter(|&id| self.get(id).is_some());
        if self.active.is_none() {
            self.active = self.topmost_visible();
        }
    }

    // =========================================================================
    // Read-only surface
    // =========================================================================

    /// All windows in creation order
    #[inline]
    pub fn windows(&self) -> &[WindowEntity] {
        &self.windows
    }

    /// Get a window by id
    pub fn get(&self, id: WindowId) -> Option<&WindowEntity> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowEntity> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Currently active window id
    #[inline]
    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    /// Windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&WindowEntity> {
        let mut windows: Vec<&WindowEntity> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Non-minimized windows
    pub fn visible(&self) -> impl Iterator<Item = &WindowEntity> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Number of windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    fn topmost_visible(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }
}
