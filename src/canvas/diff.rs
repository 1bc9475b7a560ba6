//! ANSI encoding: full redraws and minimal diffs between two canvases.
//!
//! 1. Compare the shown and the next canvas
//! 2. Emit escape sequences only for cells that changed
//! 3. Skip cursor moves when writing adjacent cells
//! 4. Track colors to avoid redundant SGR sequences
//!
//! All output is accumulated in one buffer so the caller can flush it
//! with a single write.

use super::{Canvas, Cell, Rgb};
use std::io::Write;

/// State tracker for the diffing algorithm.
///
/// Mirrors what the terminal currently has (cursor position and colors)
/// so repeated sequences can be skipped.
#[derive(Debug, Clone)]
pub struct DiffState {
    /// Last known cursor X position (0-indexed).
    cursor_x: u16,
    /// Last known cursor Y position (0-indexed).
    cursor_y: u16,
    /// Last emitted background color.
    bg: Option<Rgb>,
}

impl Default for DiffState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffState {
    /// Create a new diff state with the cursor at home and unknown colors.
    pub const fn new() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            bg: None,
        }
    }

    /// Forget everything (e.g., after a full redraw or a raw write).
    pub const fn reset(&mut self) {
        self.bg = None;
        // Force cursor move on next write
        self.cursor_x = u16::MAX;
        self.cursor_y = u16::MAX;
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of cells that were different.
    pub cells_changed: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
}

/// Write the changes from `current` to `next` into `output`.
///
/// Both canvases must have the same dimensions.
pub fn render_diff(
    current: &Canvas,
    next: &Canvas,
    output: &mut Vec<u8>,
    state: &mut DiffState,
) -> DiffResult {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut result = DiffResult::default();
    let width = next.width();

    for (y, (old_row, new_row)) in (0u16..).zip(current.rows().zip(next.rows())) {
        for (x, (old, new)) in (0u16..).zip(old_row.iter().zip(new_row)) {
            if old == new {
                continue;
            }
            result.cells_changed += 1;

            if state.cursor_y != y || state.cursor_x != x {
                emit_cursor_move(output, x, y);
                state.cursor_x = x;
                state.cursor_y = y;
                result.cursor_moves += 1;
            }

            result.color_changes += emit_color(output, new, &mut state.bg);
            output.push(Cell::GLYPH);

            // The terminal wraps at the right margin; treat the position as unknown.
            state.cursor_x += 1;
            if state.cursor_x >= width {
                state.cursor_x = u16::MAX;
            }
        }
    }

    result
}

/// Generate a full redraw sequence (no diffing).
///
/// Used for the first frame and whenever the terminal state is unknown.
/// The output depends only on the canvas, so redrawing an unchanged
/// canvas reproduces the same bytes.
pub fn render_full(canvas: &Canvas, output: &mut Vec<u8>) {
    // Hide cursor, move home
    output.extend_from_slice(b"\x1b[?25l\x1b[H");

    let mut bg = None;

    for (y, row) in canvas.rows().enumerate() {
        if y > 0 {
            output.extend_from_slice(b"\r\n");
        }
        for cell in row {
            emit_color(output, cell, &mut bg);
            output.push(Cell::GLYPH);
        }
    }

    output.extend_from_slice(b"\x1b[0m");
}

/// Emit a background change for `cell`, returning how many sequences were written.
#[inline]
fn emit_color(output: &mut Vec<u8>, cell: &Cell, bg: &mut Option<Rgb>) -> usize {
    if *bg == Some(cell.bg()) {
        return 0;
    }
    emit_bg_color(output, cell.bg());
    *bg = Some(cell.bg());
    1
}

/// Emit a cursor move sequence.
///
/// Uses the most compact representation:
/// - `\x1b[H` for home (1,1)
/// - `\x1b[{row}H` for column 1
/// - `\x1b[{row};{col}H` otherwise
#[inline]
fn emit_cursor_move(output: &mut Vec<u8>, x: u16, y: u16) {
    // ANSI uses 1-indexed positions
    let row = u32::from(y) + 1;
    let col = u32::from(x) + 1;

    if row == 1 && col == 1 {
        output.extend_from_slice(b"\x1b[H");
    } else if col == 1 {
        let _ = write!(output, "\x1b[{row}H");
    } else {
        let _ = write!(output, "\x1b[{row};{col}H");
    }
}

/// Emit a background color sequence (true color).
#[inline]
fn emit_bg_color(output: &mut Vec<u8>, color: Rgb) {
    let _ = write!(output, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(225, 6, 0);

    #[test]
    fn test_diff_identical_canvases() {
        let a = Canvas::new(10, 5);
        let b = Canvas::new(10, 5);
        let mut output = Vec::new();
        let mut state = DiffState::new();

        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_diff_single_cell_change() {
        let a = Canvas::new(10, 5);
        let mut b = Canvas::new(10, 5);
        b.set(5, 2, Cell::blank(RED));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 1);
        assert_eq!(result.cursor_moves, 1);
        assert_eq!(output, b"\x1b[3;6H\x1b[48;2;225;6;0m ");
    }

    #[test]
    fn test_diff_adjacent_cells_no_cursor_move() {
        let a = Canvas::new(10, 5);
        let mut b = Canvas::new(10, 5);
        let red = Cell::blank(RED);
        b.set(0, 0, red);
        b.set(1, 0, red);
        b.set(2, 0, red);

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 3);
        // Cursor starts at (0,0) and the cells are adjacent.
        assert_eq!(result.cursor_moves, 0);
        // Background once, then reused.
        assert_eq!(result.color_changes, 1);
    }

    #[test]
    fn test_diff_after_reset_moves_cursor() {
        let a = Canvas::new(4, 1);
        let mut b = Canvas::new(4, 1);
        b.set(0, 0, Cell::blank(RED));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        state.reset();
        let result = render_diff(&a, &b, &mut output, &mut state);
        assert_eq!(result.cursor_moves, 1);
        assert!(output.starts_with(b"\x1b[H"));
    }

    #[test]
    fn test_diff_wrap_forgets_cursor() {
        let a = Canvas::new(2, 2);
        let mut b = Canvas::new(2, 2);
        b.set(1, 0, Cell::blank(RED));
        b.set(0, 1, Cell::blank(RED));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);
        // One move to (1,0), one after the right margin.
        assert_eq!(result.cursor_moves, 2);
    }

    #[test]
    fn test_cursor_move_encoding() {
        let mut output = Vec::new();
        emit_cursor_move(&mut output, 0, 0);
        assert_eq!(&output, b"\x1b[H");

        output.clear();
        emit_cursor_move(&mut output, 0, 5);
        assert_eq!(&output, b"\x1b[6H");

        output.clear();
        emit_cursor_move(&mut output, 10, 5);
        assert_eq!(&output, b"\x1b[6;11H");
    }

    #[test]
    fn test_render_full() {
        let mut canvas = Canvas::new(3, 2);
        canvas.clear(Cell::blank(RED));

        let mut output = Vec::new();
        render_full(&canvas, &mut output);

        let output_str = String::from_utf8_lossy(&output);
        assert!(output_str.starts_with("\x1b[?25l\x1b[H"));
        // One color sequence for the whole uniform canvas.
        assert_eq!(output_str.matches("\x1b[48;2;").count(), 1);
        assert!(output_str.contains("   \r\n   "));
        assert!(output_str.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_render_full_is_repeatable() {
        let mut canvas = Canvas::new(6, 3);
        for x in 1..4 {
            canvas.set(x, 1, Cell::blank(Rgb::new(3, 74, 166)));
        }

        let mut first = Vec::new();
        let mut second = Vec::new();
        render_full(&canvas, &mut first);
        render_full(&canvas, &mut second);
        assert_eq!(first, second);
    }
}
