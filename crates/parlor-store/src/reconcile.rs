//! Cross-field reference repair
//!
//! Field-level validation sees one key at a time; this pass runs after it
//! and fixes references between fields, so a load never hands out state
//! with a dangling pointer.

use log::warn;

use crate::state::AppState;

/// Repair references between restored fields
///
/// An `active_window` that names a missing window is reassigned to the
/// highest-z restored window, or cleared when none were restored.
pub fn reconcile(state: &mut AppState) {
    if let Some(active) = state.active_window {
        if !state.windows.iter().any(|w| w.id == active) {
            let fallback = state.windows.iter().max_by_key(|w| w.z_index).map(|w| w.id);
            warn!("active window {active} not in restored set, reassigning to {fallback:?}");
            state.active_window = fallback;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PersistedWindow;
    use parlor_desktop::window::DisplayMode;

    fn window(id: u64, z_index: u32) -> PersistedWindow {
        PersistedWindow {
            id,
            title: "W".to_string(),
            logical_id: "view".to_string(),
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
            mode: DisplayMode::Normal,
            z_index,
        }
    }

    #[test]
    fn test_dangling_active_reassigned_to_topmost() {
        let mut state = AppState {
            windows: vec![window(1, 1000), window(2, 1005), window(3, 1002)],
            active_window: Some(99),
            ..AppState::default()
        };
        reconcile(&mut state);
        assert_eq!(state.active_window, Some(2));
    }

    #[test]
    fn test_dangling_active_cleared_when_no_windows() {
        let mut state = AppState {
            active_window: Some(7),
            ..AppState::default()
        };
        reconcile(&mut state);
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn test_valid_active_untouched() {
        let mut state = AppState {
            windows: vec![window(1, 1000), window(2, 1005)],
            active_window: Some(1),
            ..AppState::default()
        };
        reconcile(&mut state);
        assert_eq!(state.active_window, Some(1));
    }
}
