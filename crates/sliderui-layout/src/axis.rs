use sliderui_graphics::{Point, Size};

/// The axis along which a slider tracks the pointer.
///
/// The main axis carries progress; the cross axis carries the compact
/// thickness and the visual squeeze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Progress grows left to right.
    #[default]
    Horizontal,

    /// Progress grows bottom to top.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Projects a pointer translation onto this axis.
    ///
    /// Screen `y` grows downwards, so the vertical projection is negated:
    /// dragging up yields a positive displacement.
    #[inline]
    pub fn project(self, translation: Point) -> f32 {
        match self {
            Axis::Horizontal => translation.x,
            Axis::Vertical => -translation.y,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn main_extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub fn cross_extent(self, size: Size) -> f32 {
        self.cross_axis().main_extent(size)
    }
}
