//! Per-field schema registry
//!
//! Every persisted field owns an independent entry that validates and
//! repairs its own key. A rejected field falls back to its compiled-in
//! default with a warning; it never poisons the rest of the load. Parsers
//! build the whole repaired value before committing, so a mid-entry
//! failure leaves the default untouched.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use serde_json::{Map, Value};
use thiserror::Error;

use parlor_desktop::grid::{Footprint, GridPosition};
use parlor_desktop::icon::SortOption;
use parlor_desktop::window::{MIN_WINDOW_SIZE, Z_INDEX_BASE, Z_INDEX_MAX};

use crate::repair::{
    finite_number, sanitize_string, string_entries, MAX_FEED_ENTRIES, MAX_ICON_ENTRIES,
    MAX_LABEL_LEN, MAX_MESSAGE_LEN, MAX_WINDOWS,
};
use crate::state::{AppState, PersistedWindow, DEFAULT_WIREMAP_NODE_COUNT};

/// Why a persisted field was rejected
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("expected {expected}")]
    WrongType { expected: &'static str },
    #[error("{value} outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("empty after sanitizing")]
    Empty,
}

/// One registered persisted field
pub struct FieldSchema {
    /// Key in the serialized blob
    pub name: &'static str,
    apply: fn(&mut AppState, &Value) -> Result<(), FieldError>,
}

/// All persisted fields this build understands
///
/// Adding a field here requires a matching `AppState` default and, if the
/// serialized shape changed, a migration step.
pub const FIELDS: &[FieldSchema] = &[
    FieldSchema {
        name: "icon_positions",
        apply: apply_icon_positions,
    },
    FieldSchema {
        name: "pinned_icons",
        apply: apply_pinned_icons,
    },
    FieldSchema {
        name: "icon_usage",
        apply: apply_icon_usage,
    },
    FieldSchema {
        name: "sort_option",
        apply: apply_sort_option,
    },
    FieldSchema {
        name: "theme",
        apply: apply_theme,
    },
    FieldSchema {
        name: "wallpaper",
        apply: apply_wallpaper,
    },
    FieldSchema {
        name: "volume",
        apply: apply_volume,
    },
    FieldSchema {
        name: "wiremap_node_count",
        apply: apply_wiremap_node_count,
    },
    FieldSchema {
        name: "voice_enabled",
        apply: apply_voice_enabled,
    },
    FieldSchema {
        name: "buddy_messages",
        apply: apply_buddy_messages,
    },
    FieldSchema {
        name: "notifications",
        apply: apply_notifications,
    },
    FieldSchema {
        name: "windows",
        apply: apply_windows,
    },
    FieldSchema {
        name: "active_window",
        apply: apply_active_window,
    },
];

/// Overlay every recognized field of `raw` onto `state`
///
/// Fields absent from the blob keep their defaults; fields that fail
/// validation are logged and keep their defaults. Unrecognized keys are
/// ignored.
pub fn apply_fields(state: &mut AppState, raw: &Map<String, Value>) {
    for field in FIELDS {
        if let Some(value) = raw.get(field.name) {
            if let Err(err) = (field.apply)(state, value) {
                warn!(
                    "persisted field '{}' rejected ({err}), keeping default",
                    field.name
                );
            }
        }
    }
}

fn apply_icon_positions(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    let map = value.as_object().ok_or(FieldError::WrongType {
        expected: "object of id -> {row, col}",
    })?;

    let mut positions = BTreeMap::new();
    for (id, entry) in map {
        if positions.len() >= MAX_ICON_ENTRIES {
            break;
        }
        let id = sanitize_string(id, MAX_LABEL_LEN);
        if id.is_empty() {
            continue;
        }
        let (Some(row), Some(col)) = (
            entry.get("row").and_then(Value::as_i64),
            entry.get("col").and_then(Value::as_i64),
        ) else {
            // Malformed entry; the rest of the map still loads
            continue;
        };
        let position = GridPosition::new(row as i32, col as i32).clamped(Footprint::default());
        positions.insert(id, position);
    }

    state.icon_positions = positions;
    Ok(())
}

fn apply_pinned_icons(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    let entries = string_entries(value, MAX_LABEL_LEN, MAX_ICON_ENTRIES).ok_or(
        FieldError::WrongType {
            expected: "array of strings",
        },
    )?;
    state.pinned_icons = entries.into_iter().collect::<BTreeSet<String>>();
    Ok(())
}

fn apply_icon_usage(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    let map = value.as_object().ok_or(FieldError::WrongType {
        expected: "object of id -> count",
    })?;

    let mut usage = BTreeMap::new();
    for (id, count) in map {
        if usage.len() >= MAX_ICON_ENTRIES {
            break;
        }
        let id = sanitize_string(id, MAX_LABEL_LEN);
        if id.is_empty() {
            continue;
        }
        let Some(count) = count.as_u64() else {
            continue;
        };
        usage.insert(id, count.min(u32::MAX as u64) as u32);
    }

    state.icon_usage = usage;
    Ok(())
}

fn apply_sort_option(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    if value.is_null() {
        state.sort_option = None;
        return Ok(());
    }
    let option: SortOption =
        serde_json::from_value(value.clone()).map_err(|_| FieldError::WrongType {
            expected: "\"name\", \"date\", or \"usage\"",
        })?;
    state.sort_option = Some(option);
    Ok(())
}

fn sanitized_label(value: &Value) -> Result<String, FieldError> {
    let raw = value.as_str().ok_or(FieldError::WrongType {
        expected: "string",
    })?;
    let clean = sanitize_string(raw, MAX_LABEL_LEN);
    if clean.is_empty() {
        return Err(FieldError::Empty);
    }
    Ok(clean)
}

fn apply_theme(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    state.theme = sanitized_label(value)?;
    Ok(())
}

fn apply_wallpaper(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    state.wallpaper = sanitized_label(value)?;
    Ok(())
}

fn apply_volume(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    let volume = finite_number(value).ok_or(FieldError::WrongType {
        expected: "finite number",
    })?;
    // Out-of-range volume clamps rather than rejects
    state.volume = (volume as f32).clamp(0.0, 1.0);
    Ok(())
}

fn apply_wiremap_node_count(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    let count = value.as_i64().ok_or(FieldError::WrongType {
        expected: "integer",
    })?;
    // Out-of-range reverts to the compiled-in default rather than clamping
    if !(10..=400).contains(&count) {
        state.wiremap_node_count = DEFAULT_WIREMAP_NODE_COUNT;
        return Err(FieldError::OutOfRange {
            value: count as f64,
            min: 10.0,
            max: 400.0,
        });
    }
    state.wiremap_node_count = count as u32;
    Ok(())
}

fn apply_voice_enabled(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    state.voice_enabled = value.as_bool().ok_or(FieldError::WrongType {
        expected: "boolean",
    })?;
    Ok(())
}

fn apply_buddy_messages(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    state.buddy_messages = string_entries(value, MAX_MESSAGE_LEN, MAX_FEED_ENTRIES).ok_or(
        FieldError::WrongType {
            expected: "array of strings",
        },
    )?;
    Ok(())
}

fn apply_notifications(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    state.notifications = string_entries(value, MAX_LABEL_LEN, MAX_FEED_ENTRIES).ok_or(
        FieldError::WrongType {
            expected: "array of strings",
        },
    )?;
    Ok(())
}

fn apply_windows(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    let array = value.as_array().ok_or(FieldError::WrongType {
        expected: "array of windows",
    })?;

    let mut windows: Vec<PersistedWindow> = Vec::new();
    for entry in array {
        if windows.len() >= MAX_WINDOWS {
            break;
        }
        let Ok(mut window) = serde_json::from_value::<PersistedWindow>(entry.clone()) else {
            // Malformed entry; the rest of the list still loads
            continue;
        };
        // Duplicate ids: first occurrence wins
        if windows.iter().any(|w| w.id == window.id) {
            continue;
        }
        window.title = sanitize_string(&window.title, MAX_LABEL_LEN);
        window.logical_id = sanitize_string(&window.logical_id, MAX_LABEL_LEN);
        if window.logical_id.is_empty() {
            continue;
        }
        if !window.x.is_finite() || !window.y.is_finite() {
            continue;
        }
        window.width = window.width.max(MIN_WINDOW_SIZE.width);
        window.height = window.height.max(MIN_WINDOW_SIZE.height);
        window.z_index = window.z_index.clamp(Z_INDEX_BASE, Z_INDEX_MAX);
        windows.push(window);
    }

    state.windows = windows;
    Ok(())
}

fn apply_active_window(state: &mut AppState, value: &Value) -> Result<(), FieldError> {
    if value.is_null() {
        state.active_window = None;
        return Ok(());
    }
    state.active_window = Some(value.as_u64().ok_or(FieldError::WrongType {
        expected: "window id",
    })?);
    Ok(())
}
