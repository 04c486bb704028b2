//! Unit/pixel conversion
//!
//! Grid units scale linearly with the viewport width: the full 200-unit
//! axis always spans the viewport, so layouts survive resolution changes.

use super::GRID_UNITS;

/// Viewport width assumed when the host cannot report one
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1920.0;

#[inline]
fn effective_width(viewport_width: f32) -> f32 {
    if viewport_width > 0.0 {
        viewport_width
    } else {
        DEFAULT_VIEWPORT_WIDTH
    }
}

/// Convert grid units to pixels for the given viewport width
#[inline]
pub fn grid_to_pixel(units: i32, viewport_width: f32) -> f32 {
    units as f32 * effective_width(viewport_width) / GRID_UNITS as f32
}

/// Convert pixels to grid units (rounded to the nearest cell)
#[inline]
pub fn pixel_to_grid(pixels: f32, viewport_width: f32) -> i32 {
    (pixels * GRID_UNITS as f32 / effective_width(viewport_width)).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_to_pixel_scales_linearly() {
        // 200 units span the full viewport width
        assert!((grid_to_pixel(200, 1920.0) - 1920.0).abs() < 0.001);
        assert!((grid_to_pixel(100, 1920.0) - 960.0).abs() < 0.001);
        assert!((grid_to_pixel(0, 1920.0)).abs() < 0.001);
    }

    #[test]
    fn test_pixel_to_grid_round_trip() {
        for units in [1, 50, 100, 199, 200] {
            let px = grid_to_pixel(units, 1366.0);
            assert_eq!(pixel_to_grid(px, 1366.0), units);
        }
    }

    #[test]
    fn test_default_viewport_fallback() {
        // Zero and negative widths fall back to 1920
        assert!((grid_to_pixel(100, 0.0) - 960.0).abs() < 0.001);
        assert!((grid_to_pixel(100, -50.0) - 960.0).abs() < 0.001);
        assert_eq!(pixel_to_grid(960.0, 0.0), 100);
    }
}
