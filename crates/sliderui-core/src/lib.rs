//! Elastic slider interaction core for SliderUI
//!
//! Maps a continuous drag gesture onto a bounded progress value. Drags past
//! either end of the track meet linear resistance and a hard overshoot
//! limit; releasing the pointer commits a rigidly clamped value in `[0, 1]`.
//! Progress is mirrored into an externally owned [`SharedProgress`] binding
//! which other code may also write.
//!
//! Rendering is left to the host: a [`SliderSnapshot`] carries everything a
//! stateless renderer needs.

mod binding;
mod configuration;
mod constants;
mod elastic;
mod error;
mod geometry;
mod gesture;
pub mod gesture_constants;
mod release_timer;
mod scale;
mod slider;

pub use binding::*;
pub use configuration::*;
pub use constants::*;
pub use elastic::*;
pub use error::*;
pub use geometry::*;
pub use gesture::*;
pub use release_timer::*;
pub use scale::*;
pub use slider::*;

pub use sliderui_graphics::{Color, Point, Rect, Size};
pub use sliderui_layout::{Alignment, Axis, Edge};

pub mod prelude {
    pub use crate::binding::SharedProgress;
    pub use crate::configuration::{FillType, SliderConfiguration};
    pub use crate::constants::SliderConstants;
    pub use crate::error::ConfigError;
    pub use crate::slider::{Slider, SliderChange, SliderChanges, SliderSnapshot};
    pub use sliderui_graphics::{Point, Rect, Size};
    pub use sliderui_layout::{Axis, Edge};
}

#[cfg(test)]
mod tests;
