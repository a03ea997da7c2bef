//! Edges and alignment used to anchor visual effects

/// Alignment across both axes used for positioning content within a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Horizontal alignment component.
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment component.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Creates a new [`Alignment`] from explicit horizontal and vertical components.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const CENTER_START: Self =
        Self::new(HorizontalAlignment::Start, VerticalAlignment::CenterVertically);

    pub const CENTER_END: Self =
        Self::new(HorizontalAlignment::End, VerticalAlignment::CenterVertically);

    pub const TOP_CENTER: Self =
        Self::new(HorizontalAlignment::CenterHorizontally, VerticalAlignment::Top);

    pub const BOTTOM_CENTER: Self =
        Self::new(HorizontalAlignment::CenterHorizontally, VerticalAlignment::Bottom);
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Start,
    CenterHorizontally,
    End,
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    CenterVertically,
    Bottom,
}

/// One edge of a box.
///
/// `Leading`/`Trailing` are the horizontal edges, `Top`/`Bottom` the
/// vertical ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
    Top,
    Bottom,
}

impl Edge {
    /// Returns the edge on the other side of the box.
    pub fn opposite(self) -> Self {
        match self {
            Edge::Leading => Edge::Trailing,
            Edge::Trailing => Edge::Leading,
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
        }
    }

    /// The alignment that pins content to the middle of this edge.
    pub fn alignment(self) -> Alignment {
        match self {
            Edge::Leading => Alignment::CENTER_START,
            Edge::Trailing => Alignment::CENTER_END,
            Edge::Top => Alignment::TOP_CENTER,
            Edge::Bottom => Alignment::BOTTOM_CENTER,
        }
    }
}
