use sliderui_graphics::Color;
use sliderui_layout::Axis;

/// How the presentation layer paints the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillType {
    /// Fill grows from the start of the track.
    #[default]
    Basic,
    /// Fill grows outwards from the middle of the track.
    Centered,
}

/// Construction-time configuration.
///
/// Only `axis` influences the interaction core. The remaining fields are
/// carried for the renderer and never read here.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfiguration {
    pub symbol: Option<String>,
    pub symbol_color: Color,
    pub axis: Axis,
    pub tint: Color,
    pub always_visible: bool,
    pub fill_type: FillType,
}

impl SliderConfiguration {
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_symbol_color(mut self, color: Color) -> Self {
        self.symbol_color = color;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_always_visible(mut self, always_visible: bool) -> Self {
        self.always_visible = always_visible;
        self
    }

    pub fn with_fill_type(mut self, fill_type: FillType) -> Self {
        self.fill_type = fill_type;
        self
    }
}

impl Default for SliderConfiguration {
    fn default() -> Self {
        Self {
            symbol: None,
            symbol_color: Color::GRAY,
            axis: Axis::Horizontal,
            tint: Color::WHITE,
            always_visible: false,
            fill_type: FillType::Basic,
        }
    }
}
