//! Visual squeeze derived from out-of-range progress.

use sliderui_layout::{Alignment, Axis, Edge};

/// Cross-axis shrink factor for the given progress.
///
/// `1.0` anywhere in `[0, 1]`; past either end the factor drops linearly
/// with the overshoot, so it is continuous at both boundaries.
pub fn scale_factor(progress: f32, scalieness: f32) -> f32 {
    if progress > 1.0 {
        1.0 - (progress - 1.0) * scalieness
    } else if progress < 0.0 {
        1.0 + progress * scalieness
    } else {
        1.0
    }
}

/// Edge the squeeze is anchored to: the one opposite the overscroll.
///
/// In range the anchor sits at the start of the track (leading for a
/// horizontal slider, bottom for a vertical one).
pub fn scale_anchor(progress: f32, axis: Axis) -> Edge {
    let start = match axis {
        Axis::Horizontal => Edge::Leading,
        Axis::Vertical => Edge::Bottom,
    };
    if progress < 0.0 {
        start.opposite()
    } else {
        start
    }
}

/// Per-axis scale plus anchor, ready to hand to a graphics layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleEffect {
    pub scale_x: f32,
    pub scale_y: f32,
    pub anchor: Edge,
}

impl ScaleEffect {
    /// The squeeze applies across the axis: a horizontal slider gets
    /// thinner, never shorter.
    pub fn compute(progress: f32, axis: Axis, scalieness: f32) -> Self {
        let factor = scale_factor(progress, scalieness);
        let (scale_x, scale_y) = match axis {
            Axis::Horizontal => (1.0, factor),
            Axis::Vertical => (factor, 1.0),
        };
        Self {
            scale_x,
            scale_y,
            anchor: scale_anchor(progress, axis),
        }
    }

    pub fn anchor_alignment(&self) -> Alignment {
        self.anchor.alignment()
    }

    pub fn is_identity(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0
    }
}
