//! The desktop shell dispatcher
//!
//! One `DesktopShell` owns the icon manager, the window manager, and the
//! store. Every public mutation runs synchronously on the caller's thread
//! and writes a snapshot after commit; there is no other writer, so no
//! locking. Boot reverses the path: load, repair, hydrate.

use parlor_desktop::grid::{find_next_free_slot, overlaps, Footprint, GridPosition};
use parlor_desktop::icon::SortOption;
use parlor_desktop::input::DragOutcome;
use parlor_desktop::math::{Size, Vec2};
use parlor_desktop::window::{ResizeHandle, SnapZone, WindowId, WindowManager};
use parlor_desktop::IconLayoutManager;
use parlor_store::{AppState, PersistentStore, StorageMedium};

use crate::hydrate::{hydrate_icons, hydrate_windows, persisted_windows};

/// Most notification or buddy-message entries the shell retains
const FEED_CAP: usize = 100;

/// The synchronous dispatcher owning all desktop state
pub struct DesktopShell<M: StorageMedium> {
    icons: IconLayoutManager,
    windows: WindowManager,
    store: PersistentStore<M>,
    viewport: Size,
    /// Settings and feeds not owned by either manager; the icon and window
    /// fields inside are overwritten at snapshot time
    settings: AppState,
}

impl<M: StorageMedium> DesktopShell<M> {
    /// Boot the shell: load, migrate, repair, and hydrate persisted state
    pub fn boot(medium: M, viewport: Size) -> Self {
        let mut store = PersistentStore::new(medium);
        let settings = store.load();

        let mut icons = IconLayoutManager::new();
        hydrate_icons(&mut icons, &settings);

        let mut windows = WindowManager::new();
        hydrate_windows(&mut windows, &settings);

        Self {
            icons,
            windows,
            store,
            viewport,
            settings,
        }
    }

    /// Assemble the full current state for persistence
    pub fn current_state(&self) -> AppState {
        let mut state = self.settings.clone();
        state.icon_positions = self.icons.position_map();
        state.pinned_icons = self.icons.pinned_ids();
        state.icon_usage = self.icons.usage_map();
        state.sort_option = self.icons.last_sort();
        let (windows, active) = persisted_windows(&self.windows);
        state.windows = windows;
        state.active_window = active;
        state
    }

    fn persist(&mut self) {
        let state = self.current_state();
        self.store.save(&state);
    }

    /// Update the viewport used for window placement
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    // =========================================================================
    // Window operations
    // =========================================================================

    pub fn open_window(&mut self, logical_id: &str, title: &str) -> WindowId {
        let id = self.windows.open(logical_id, title, self.viewport);
        self.persist();
        id
    }

    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.focus(id);
        self.persist();
    }

    pub fn close_window(&mut self, id: WindowId) {
        self.windows.close(id);
        self.persist();
    }

    pub fn minimize_window(&mut self, id: WindowId) {
        self.windows.minimize(id);
        self.persist();
    }

    pub fn restore_window(&mut self, id: WindowId) {
        self.windows.restore(id);
        self.persist();
    }

    pub fn maximize_window(&mut self, id: WindowId) {
        self.windows.maximize(id, self.viewport);
        self.persist();
    }

    pub fn toggle_pip(&mut self, id: WindowId) {
        self.windows.toggle_pip(id, self.viewport);
        self.persist();
    }

    pub fn move_window(&mut self, id: WindowId, delta: Vec2) {
        self.windows.move_by(id, delta);
        self.persist();
    }

    pub fn resize_window(&mut self, id: WindowId, new_size: Size, handle: ResizeHandle) {
        self.windows.resize(id, new_size, handle);
        self.persist();
    }

    /// Record the viewport edge a window was dropped against
    ///
    /// Snap zones are session-local UI state; they are not persisted, so
    /// no snapshot is written here.
    pub fn snap_window(&mut self, id: WindowId, zone: Option<SnapZone>) {
        self.windows.set_snap_zone(id, zone);
    }

    // =========================================================================
    // Icon operations
    // =========================================================================

    pub fn move_icon(&mut self, id: &str, target: GridPosition) {
        self.icons.move_icon(id, target);
        self.persist();
    }

    pub fn pin_icon(&mut self, id: &str) {
        self.icons.pin(id);
        self.persist();
    }

    pub fn unpin_icon(&mut self, id: &str) {
        self.icons.unpin(id);
        self.persist();
    }

    pub fn record_icon_usage(&mut self, id: &str) {
        self.icons.record_usage(id);
        self.persist();
    }

    pub fn sort_icons(&mut self, option: SortOption) {
        self.icons.sort(option);
        self.persist();
    }

    /// Commit the final position reported by the drag resolver
    ///
    /// The resolver is opaque and untrusted: its position is clamped, and
    /// a slot that collides with another icon diverts to the next free one
    /// before committing. Pinned and unknown icons are untouched.
    pub fn commit_icon_drag(&mut self, outcome: &DragOutcome) {
        let Some(icon) = self.icons.get(&outcome.entity_id) else {
            return;
        };
        if icon.pinned {
            return;
        }
        let footprint = icon.footprint;
        let target = outcome.final_position.clamped(footprint);

        let others: Vec<(GridPosition, Footprint)> = self
            .icons
            .icons()
            .iter()
            .filter(|i| i.id != outcome.entity_id)
            .map(|i| (i.position, i.footprint))
            .collect();

        let target = if others
            .iter()
            .any(|&(pos, size)| overlaps(target, footprint, pos, size))
        {
            find_next_free_slot(&others, footprint, target)
        } else {
            target
        };

        self.icons.move_icon(&outcome.entity_id, target);
        self.persist();
    }

    // =========================================================================
    // Settings and feeds
    // =========================================================================

    pub fn set_theme(&mut self, theme: &str) {
        self.settings.theme = theme.to_string();
        self.persist();
    }

    pub fn set_wallpaper(&mut self, wallpaper: &str) {
        self.settings.wallpaper = wallpaper.to_string();
        self.persist();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.settings.volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            self.settings.volume
        };
        self.persist();
    }

    pub fn set_wiremap_node_count(&mut self, count: u32) {
        self.settings.wiremap_node_count = count.clamp(10, 400);
        self.persist();
    }

    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.settings.voice_enabled = enabled;
        self.persist();
    }

    pub fn push_notification(&mut self, text: &str) {
        push_capped(&mut self.settings.notifications, text);
        self.persist();
    }

    pub fn push_buddy_message(&mut self, text: &str) {
        push_capped(&mut self.settings.buddy_messages, text);
        self.persist();
    }

    // =========================================================================
    // Read-only surface
    // =========================================================================

    #[inline]
    pub fn icons(&self) -> &IconLayoutManager {
        &self.icons
    }

    #[inline]
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[inline]
    pub fn settings(&self) -> &AppState {
        &self.settings
    }
}

fn push_capped(feed: &mut Vec<String>, text: &str) {
    if feed.len() >= FEED_CAP {
        feed.remove(0);
    }
    feed.push(text.to_string());
}
