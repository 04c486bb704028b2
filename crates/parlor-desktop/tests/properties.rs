//! Property tests for grid geometry and icon layout invariants

use proptest::prelude::*;

use parlor_desktop::grid::{
    find_next_free_slot, grid_to_pixel, overlaps, pixel_to_grid, Footprint, GridPosition,
    GRID_MIN, GRID_UNITS,
};
use parlor_desktop::icon::SortOption;
use parlor_desktop::IconLayoutManager;

fn arb_position() -> impl Strategy<Value = GridPosition> {
    (-500i32..700, -500i32..700).prop_map(|(row, col)| GridPosition::new(row, col))
}

fn arb_icon_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("dashboard".to_string()),
        Just("listings".to_string()),
        Just("bids".to_string()),
        Just("invoices".to_string()),
        Just("contacts".to_string()),
        Just("calendar".to_string()),
        Just("messages".to_string()),
        Just("voice-notes".to_string()),
        Just("buddies".to_string()),
        Just("settings".to_string()),
        Just("unknown-icon".to_string()),
    ]
}

fn arb_sort() -> impl Strategy<Value = SortOption> {
    prop_oneof![
        Just(SortOption::Name),
        Just(SortOption::Date),
        Just(SortOption::Usage),
    ]
}

proptest! {
    #[test]
    fn move_icon_always_lands_in_bounds(id in arb_icon_id(), target in arb_position()) {
        let mut icons = IconLayoutManager::new();
        icons.move_icon(&id, target);

        for icon in icons.icons() {
            prop_assert!(icon.position.in_bounds(icon.footprint));
        }
    }

    #[test]
    fn pinned_icon_survives_any_operation_sequence(
        moves in prop::collection::vec((arb_icon_id(), arb_position()), 0..20),
        sorts in prop::collection::vec(arb_sort(), 0..4),
    ) {
        let mut icons = IconLayoutManager::new();
        let anchor = GridPosition::new(100, 100);
        icons.move_icon("settings", anchor);
        icons.pin("settings");

        for (id, target) in moves {
            icons.move_icon(&id, target);
        }
        for option in sorts {
            icons.sort(option);
        }

        prop_assert_eq!(icons.get("settings").unwrap().position, anchor);
    }

    #[test]
    fn sort_reflow_never_overlaps(option in arb_sort(), pin in arb_icon_id()) {
        let mut icons = IconLayoutManager::new();
        icons.pin(&pin);
        icons.sort(option);

        let all: Vec<_> = icons.icons().to_vec();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                prop_assert!(
                    !overlaps(a.position, a.footprint, b.position, b.footprint),
                    "{} overlaps {}", a.id, b.id
                );
            }
        }
    }

    #[test]
    fn sort_is_idempotent(option in arb_sort()) {
        let mut icons = IconLayoutManager::new();
        icons.record_usage("calendar");
        icons.record_usage("calendar");
        icons.record_usage("bids");

        icons.sort(option);
        let first = icons.position_map();
        icons.sort(option);
        prop_assert_eq!(icons.position_map(), first);
    }

    #[test]
    fn free_slot_never_overlaps_existing(
        existing in prop::collection::vec(arb_position(), 0..12),
        start in arb_position(),
    ) {
        let footprint = Footprint::default();
        let occupied: Vec<(GridPosition, Footprint)> = existing
            .iter()
            .map(|&pos| (pos.clamped(footprint), footprint))
            .collect();

        let slot = find_next_free_slot(&occupied, footprint, start);

        prop_assert!(slot.in_bounds(footprint));
        for &(pos, size) in &occupied {
            prop_assert!(!overlaps(slot, footprint, pos, size));
        }
    }

    #[test]
    fn clamped_positions_stay_in_grid(pos in arb_position(), rows in 1i32..40, cols in 1i32..40) {
        let footprint = Footprint::new(rows, cols);
        let clamped = pos.clamped(footprint);

        prop_assert!(clamped.row >= GRID_MIN && clamped.col >= GRID_MIN);
        prop_assert!(clamped.row + footprint.rows - 1 <= GRID_UNITS);
        prop_assert!(clamped.col + footprint.cols - 1 <= GRID_UNITS);
    }

    #[test]
    fn unit_pixel_round_trip(units in 0i32..=200, width in 320.0f32..7680.0) {
        let px = grid_to_pixel(units, width);
        prop_assert_eq!(pixel_to_grid(px, width), units);
    }
}
