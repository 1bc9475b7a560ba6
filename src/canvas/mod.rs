//! Canvas module: the terminal-side presentation of a composition.
//!
//! This module contains:
//! - [`Cell`]: one colored terminal cell
//! - [`Canvas`]: a grid of cells
//! - [`Rgb`]: true-color representation
//! - [`paint`]: rasterizes a composition onto a canvas
//! - [`diff`]: ANSI full redraw and minimal diff

mod cell;
mod grid;
mod paint;
pub mod diff;

pub use cell::{Cell, Rgb};
pub use grid::Canvas;
pub use paint::{paint, Palette, Style, Viewport};
