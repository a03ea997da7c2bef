//! Axis & edge contracts for SliderUI

mod alignment;
mod axis;

pub use alignment::*;
pub use axis::*;

pub mod prelude {
    pub use crate::alignment::{Alignment, Edge, HorizontalAlignment, VerticalAlignment};
    pub use crate::axis::Axis;
}
