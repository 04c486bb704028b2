//! Pixel-space geometry for window placement
//!
//! Windows live in viewport pixel coordinates; icons live on the abstract
//! grid (see [`crate::grid`]). These types cover the former.

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
