//! Pure math/data for SliderUI
//!
//! This crate contains the geometry primitives and color definitions that
//! are shared between the slider interaction core and whatever renders it.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
}
