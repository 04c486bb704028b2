//! State/manager conversion
//!
//! Bridges the persisted `AppState` and the live managers in both
//! directions: boot-time hydration and per-mutation snapshot assembly.

use log::warn;

use parlor_desktop::math::{Size, Vec2};
use parlor_desktop::window::{WindowEntity, WindowId, WindowManager};
use parlor_desktop::IconLayoutManager;
use parlor_store::{AppState, PersistedWindow};

/// Apply the persisted icon layout to a freshly built manager
///
/// Ids absent from the built-in registry were either dropped by the store
/// or belong to a future build; the manager ignores them, and each drop
/// is logged so a renamed registry entry shows up in diagnostics.
pub fn hydrate_icons(icons: &mut IconLayoutManager, state: &AppState) {
    for id in state
        .icon_positions
        .keys()
        .chain(state.pinned_icons.iter())
    {
        if icons.get(id).is_none() {
            warn!("dropping persisted layout entry for unknown icon '{id}'");
        }
    }
    icons.hydrate(
        &state.icon_positions,
        &state.pinned_icons,
        &state.icon_usage,
        state.sort_option,
    );
}

/// Rebuild the window set from persisted state
pub fn hydrate_windows(windows: &mut WindowManager, state: &AppState) {
    let entities: Vec<WindowEntity> = state
        .windows
        .iter()
        .map(|w| {
            WindowEntity::restored(
                w.id,
                w.title.clone(),
                w.logical_id.clone(),
                Vec2::new(w.x, w.y),
                Size::new(w.width, w.height),
                w.mode,
                w.z_index,
            )
        })
        .collect();
    windows.hydrate(entities, state.active_window);
}

/// Snapshot the live window set back into its persisted form
pub fn persisted_windows(windows: &WindowManager) -> (Vec<PersistedWindow>, Option<WindowId>) {
    let persisted = windows
        .windows()
        .iter()
        .map(|w| PersistedWindow {
            id: w.id,
            title: w.title.clone(),
            logical_id: w.logical_id.clone(),
            x: w.position.x,
            y: w.position.y,
            width: w.size.width,
            height: w.size.height,
            mode: w.mode,
            z_index: w.z_index,
        })
        .collect();
    (persisted, windows.active())
}
