//! Block: one rectangle of a composition and the color it is painted with.

use crate::layout::Rect;

/// Color identifier carried by a block.
///
/// This names a role, not an RGB value; [`crate::canvas::Palette`] decides
/// what each role looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    /// The shared off-white every block starts with.
    #[default]
    Neutral,
    /// Red accent.
    Red,
    /// Blue accent.
    Blue,
    /// Yellow accent.
    Yellow,
    /// Black accent.
    Black,
}

impl Paint {
    /// The accents, in the order the colorizer hands them out.
    pub const PRIMARIES: [Self; 3] = [Self::Red, Self::Blue, Self::Yellow];

    /// Whether this is one of the accent colors.
    #[inline]
    pub const fn is_accent(self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

/// Orientation of a cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cut {
    /// A vertical line: two children side by side.
    Vertical,
    /// A horizontal line: two children stacked.
    Horizontal,
}

impl Cut {
    /// Apply this cut to `rect` at `offset` along the cut axis.
    #[inline]
    pub fn apply(self, rect: &Rect, offset: u16) -> (Rect, Rect) {
        match self {
            Self::Vertical => rect.split_at_column(offset),
            Self::Horizontal => rect.split_at_row(offset),
        }
    }

    /// The extent of `rect` this cut divides: width for vertical, height for horizontal.
    #[inline]
    pub const fn extent(self, rect: &Rect) -> u16 {
        match self {
            Self::Vertical => rect.width,
            Self::Horizontal => rect.height,
        }
    }
}

/// An axis-aligned block of a composition.
///
/// Geometry is fixed once a block exists; a split replaces the block with
/// two new ones. Only the paint changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Position and size on the logical canvas.
    pub rect: Rect,
    /// Color role.
    pub paint: Paint,
}

impl Block {
    /// Create a neutral block covering `rect`.
    #[inline]
    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            paint: Paint::Neutral,
        }
    }
}

/// Record of one successful split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// The block geometry that was removed.
    pub parent: Rect,
    /// Orientation of the cut.
    pub cut: Cut,
    /// Offset of the cut from the parent's left (vertical) or top (horizontal) edge.
    pub offset: u16,
}

impl Split {
    /// The two children this split produced.
    #[inline]
    pub fn children(&self) -> (Rect, Rect) {
        self.cut.apply(&self.parent, self.offset)
    }
}
