//! Hydrated application state
//!
//! `AppState` is the always-valid counterpart of the persisted snapshot:
//! every field carries a compiled-in default, and the load pipeline only
//! ever writes schema-valid values into it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use parlor_desktop::grid::GridPosition;
use parlor_desktop::icon::SortOption;
use parlor_desktop::window::{DisplayMode, WindowId};

/// Default audio volume
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Default wiremap background node count
pub const DEFAULT_WIREMAP_NODE_COUNT: u32 = 80;

/// Default desktop theme
pub const DEFAULT_THEME: &str = "aurora";

/// Default wallpaper id
pub const DEFAULT_WALLPAPER: &str = "slate";

/// Persisted form of one window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedWindow {
    pub id: WindowId,
    pub title: String,
    pub logical_id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub mode: DisplayMode,
    pub z_index: u32,
}

/// The full hydrated application state
///
/// Constructed from defaults at boot and overlaid with whatever persisted
/// fields survive validation. Consumers may rely on every field being
/// in-range at all times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// Icon id to grid position
    pub icon_positions: BTreeMap<String, GridPosition>,
    /// Ids of pinned icons
    pub pinned_icons: BTreeSet<String>,
    /// Icon id to usage count
    pub icon_usage: BTreeMap<String, u32>,
    /// Last applied icon sort, if any
    pub sort_option: Option<SortOption>,
    /// Desktop theme id
    pub theme: String,
    /// Wallpaper id
    pub wallpaper: String,
    /// Audio volume in `[0, 1]`
    pub volume: f32,
    /// Wiremap background node count in `[10, 400]`
    pub wiremap_node_count: u32,
    /// Whether voice capture is enabled
    pub voice_enabled: bool,
    /// Buddy-list chat messages, newest last
    pub buddy_messages: Vec<String>,
    /// Notification feed entries, newest last
    pub notifications: Vec<String>,
    /// Open windows
    pub windows: Vec<PersistedWindow>,
    /// Id of the focused window
    pub active_window: Option<WindowId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            icon_positions: BTreeMap::new(),
            pinned_icons: BTreeSet::new(),
            icon_usage: BTreeMap::new(),
            sort_option: None,
            theme: DEFAULT_THEME.to_string(),
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            volume: DEFAULT_VOLUME,
            wiremap_node_count: DEFAULT_WIREMAP_NODE_COUNT,
            voice_enabled: false,
            buddy_messages: Vec::new(),
            notifications: Vec::new(),
            windows: Vec::new(),
            active_window: None,
        }
    }
}
