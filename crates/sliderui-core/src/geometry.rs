use sliderui_graphics::{Rect, Size};
use sliderui_layout::Axis;

use crate::{ConfigError, SliderConstants};

/// Extent of the control along its active axis.
///
/// Supplied by the host on every layout pass and treated as an immutable
/// snapshot while an event is handled. The length is always finite and
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    length: f32,
    axis: Axis,
}

impl TrackGeometry {
    pub fn new(length: f32, axis: Axis) -> Result<Self, ConfigError> {
        if length.is_finite() && length > 0.0 {
            Ok(Self { length, axis })
        } else {
            Err(ConfigError::NonPositiveTrackLength(length))
        }
    }

    /// Builds the geometry from the control's laid-out size.
    pub fn from_size(size: Size, axis: Axis) -> Result<Self, ConfigError> {
        Self::new(axis.main_extent(size), axis)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Clamps an offset onto the physical track, `[0, length]`.
    /// NaN lands on the start of the track.
    #[inline]
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.length)
    }
}

/// Area that accepts a pointer-down, in the same space as `bounds`.
///
/// The control bounds are grown by `width_scale`/`height_scale` around
/// their center so thin sliders stay easy to grab.
pub fn hit_area(bounds: Rect, constants: &SliderConstants) -> Rect {
    bounds.scale_about_center(constants.width_scale, constants.height_scale)
}
