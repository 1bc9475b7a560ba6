//! Painting: rasterize a composition into a cell canvas.
//!
//! Every cell is sampled at its center in logical units. The background
//! goes down first, then the block fills, then a heavy outline around every
//! block. Outlines are square-capped: they run past the corners by the
//! same distance they extend past the edges.

use super::cell::{Cell, Rgb};
use super::grid::Canvas;
use crate::composition::{Composition, Paint};

/// The colors a composition is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Unassigned blocks.
    pub neutral: Rgb,
    /// Red accent.
    pub red: Rgb,
    /// Blue accent.
    pub blue: Rgb,
    /// Yellow accent.
    pub yellow: Rgb,
    /// Black accent.
    pub black: Rgb,
}

impl Palette {
    /// The classic primaries on off-white.
    pub const CLASSIC: Self = Self {
        neutral: Rgb::from_u32(0xF0_F0F0),
        red: Rgb::from_u32(0xE1_0600),
        blue: Rgb::from_u32(0x03_4AA6),
        yellow: Rgb::from_u32(0xF2_C500),
        black: Rgb::from_u32(0x11_1111),
    };

    /// Look up the color for a paint role.
    #[inline]
    pub const fn color(&self, paint: Paint) -> Rgb {
        match paint {
            Paint::Neutral => self.neutral,
            Paint::Red => self.red,
            Paint::Blue => self.blue,
            Paint::Yellow => self.yellow,
            Paint::Black => self.black,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// How a composition is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Block colors.
    pub palette: Palette,
    /// Canvas fill behind the blocks.
    pub background: Rgb,
    /// Outline color.
    pub stroke: Rgb,
    /// Outline width in logical units.
    pub stroke_weight: u16,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: Palette::CLASSIC,
            background: Rgb::gray(240),
            stroke: Rgb::gray(15),
            stroke_weight: 12,
        }
    }
}

/// Mapping between terminal cells and logical canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Logical units per column.
    pub cell_width: u16,
    /// Logical units per row.
    pub cell_height: u16,
}

impl Default for Viewport {
    /// Terminal cells are roughly twice as tall as they are wide.
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: 16,
        }
    }
}

impl Viewport {
    /// Logical canvas size for a grid of `columns` x `rows` cells.
    pub const fn logical_size(&self, columns: u16, rows: u16) -> (u16, u16) {
        (
            columns.saturating_mul(self.cell_width),
            rows.saturating_mul(self.cell_height),
        )
    }

    /// Center of cell (x, y) in logical units.
    #[inline]
    fn cell_center(&self, x: u16, y: u16) -> (f32, f32) {
        (
            (f32::from(x) + 0.5) * f32::from(self.cell_width),
            (f32::from(y) + 0.5) * f32::from(self.cell_height),
        )
    }

    /// Half the outline width along each axis, snapped to whole cells so
    /// every line has the same thickness wherever it falls.
    fn stroke_reach(&self, stroke_weight: u16) -> (f32, f32) {
        let reach = |cell: u16| {
            let cell = f32::from(cell);
            let cells = (f32::from(stroke_weight) / cell).round().max(1.0);
            cells * cell / 2.0
        };
        (reach(self.cell_width), reach(self.cell_height))
    }
}

/// Paint `composition` into `canvas`.
///
/// Cells whose center falls outside the composition keep the background.
/// Painting is a pure function of its inputs: painting the same composition
/// twice produces identical canvases.
pub fn paint(composition: &Composition, viewport: &Viewport, style: &Style, canvas: &mut Canvas) {
    canvas.clear(Cell::blank(style.background));

    let (reach_x, reach_y) = viewport.stroke_reach(style.stroke_weight);
    let stroke = Cell::blank(style.stroke);

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let (px, py) = viewport.cell_center(x, y);
            let mut cell = None;

            for block in composition.blocks() {
                let r = block.rect;
                let (left, top) = (f32::from(r.x), f32::from(r.y));
                let (right, bottom) = (f32::from(r.right()), f32::from(r.bottom()));

                let inside = px >= left && px < right && py >= top && py < bottom;
                if inside && cell.is_none() {
                    cell = Some(Cell::blank(style.palette.color(block.paint)));
                }

                let in_cap_box = px >= left - reach_x
                    && px < right + reach_x
                    && py >= top - reach_y
                    && py < bottom + reach_y;
                let near = |d: f32, reach: f32| d >= -reach && d < reach;
                let on_edge = near(px - left, reach_x)
                    || near(px - right, reach_x)
                    || near(py - top, reach_y)
                    || near(py - bottom, reach_y);

                if in_cap_box && on_edge {
                    cell = Some(stroke);
                    break;
                }
            }

            if let Some(cell) = cell {
                canvas.set(x, y, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::generate;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_palette_lookup() {
        let p = Palette::CLASSIC;
        assert_eq!(p.color(Paint::Red), Rgb::new(0xE1, 0x06, 0x00));
        assert_eq!(p.color(Paint::Neutral), Rgb::gray(0xF0));
    }

    #[test]
    fn test_logical_size() {
        let v = Viewport::default();
        assert_eq!(v.logical_size(100, 40), (800, 640));
        assert_eq!(v.logical_size(u16::MAX, 1), (u16::MAX, 16));
    }

    #[test]
    fn test_stroke_reach_whole_cells() {
        let v = Viewport::default();
        // 12 units is 1.5 columns (rounds to 2) and 0.75 rows (rounds to 1).
        assert_eq!(v.stroke_reach(12), (8.0, 8.0));
    }

    #[test]
    fn test_outline_and_fill() {
        let viewport = Viewport::default();
        let (w, h) = viewport.logical_size(20, 10);
        // Too small to cut: one red block.
        let c = generate(w.min(120), h.min(120), &mut Pcg32::seed_from_u64(0));
        assert_eq!(c.blocks().len(), 1);

        let style = Style::default();
        let mut canvas = Canvas::new(20, 10);
        paint(&c, &viewport, &style, &mut canvas);

        // Top-left corner and the first column sit on the outline.
        assert_eq!(canvas.get(0, 0).unwrap().bg(), style.stroke);
        assert_eq!(canvas.get(0, 3).unwrap().bg(), style.stroke);
        // Interior is red.
        assert_eq!(canvas.get(5, 3).unwrap().bg(), style.palette.red);
        // Past the 120-unit composition only background remains.
        assert_eq!(canvas.get(19, 9).unwrap().bg(), style.background);
    }

    #[test]
    fn test_every_block_edge_is_stroked() {
        let viewport = Viewport::default();
        let (w, h) = viewport.logical_size(100, 40);
        let c = generate(w, h, &mut Pcg32::seed_from_u64(11));
        let style = Style::default();
        let mut canvas = Canvas::new(100, 40);
        paint(&c, &viewport, &style, &mut canvas);

        // Each internal vertical edge shows up as a stroke cell in its rows.
        for split in c.splits() {
            let (first, second) = split.children();
            let (ex, ey) = match split.cut {
                crate::composition::Cut::Vertical => (second.x, first.y + first.height / 2),
                crate::composition::Cut::Horizontal => (first.x + first.width / 2, second.y),
            };
            let cx = ex / viewport.cell_width;
            let cy = ey / viewport.cell_height;
            let hit = [cx.saturating_sub(1), cx]
                .iter()
                .flat_map(|x| [cy.saturating_sub(1), cy].map(|y| (*x, y)))
                .any(|(x, y)| canvas.get(x, y).is_some_and(|c| c.bg() == style.stroke));
            assert!(hit, "no stroke near split {split:?}");
        }
    }

    #[test]
    fn test_paint_is_idempotent() {
        let viewport = Viewport::default();
        let (w, h) = viewport.logical_size(80, 24);
        let c = generate(w, h, &mut Pcg32::seed_from_u64(99));
        let style = Style::default();

        let mut a = Canvas::new(80, 24);
        let mut b = Canvas::new(80, 24);
        paint(&c, &viewport, &style, &mut a);
        paint(&c, &viewport, &style, &mut b);
        paint(&c, &viewport, &style, &mut b);
        assert_eq!(a, b);
    }
}
