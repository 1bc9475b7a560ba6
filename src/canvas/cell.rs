//! Cell: one terminal cell of a painted canvas.

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A neutral gray with all channels at `level`.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create from a 24-bit hex color (e.g., 0xE10600).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    /// Formats as a CSS hex color, e.g. `#e10600`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A single terminal cell: a blank showing one background color.
///
/// Paintings carry the picture in the background, so a cell is written as
/// a space.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A black blank.
    pub const EMPTY: Self = Self { bg: Rgb::BLACK };

    /// The glyph every cell is written with.
    pub const GLYPH: u8 = b' ';

    /// A blank cell showing only `bg`.
    #[inline]
    pub const fn blank(bg: Rgb) -> Self {
        Self { bg }
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cell").field(&self.bg).finish()
    }
}
