//! Layout module: the rectangle primitive shared by the generator and the
//! renderers.
//!
//! Blocks live in logical canvas units (pixels for the SVG exporter, scaled
//! cells for the terminal). There is no tree: a composition is a flat list
//! of rectangles that tile the canvas.

mod rect;

pub use rect::Rect;
