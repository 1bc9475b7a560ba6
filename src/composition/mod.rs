//! Composition module: generation of a Mondrian-style block layout.
//!
//! A generation runs in two phases on one owned block list:
//! - [`Partitioner`]: cuts the canvas 5 to 9 times
//! - [`colorize`]: hands out the red, blue, yellow (and maybe black) accents
//!
//! Randomness is always injected, so a seeded generator reproduces a
//! composition exactly.

mod block;
mod colorize;
mod partition;

pub use block::{Block, Cut, Paint, Split};
pub use colorize::{colorize, BLACK_MIN_BLOCKS, BLACK_PROBABILITY};
pub use partition::{
    is_eligible, orientation_for, Partitioner, ASPECT_LIMIT, CUT_COUNT, MIN_SPLIT_EXTENT,
    SPLIT_FRACTION,
};

use crate::layout::Rect;
use rand::Rng;
use tracing::debug_span;

/// A finished composition: the tiling plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    blocks: Vec<Block>,
    width: u16,
    height: u16,
    cuts_requested: usize,
    splits: Vec<Split>,
}

impl Composition {
    /// Canvas width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The canvas as a rectangle at the origin.
    #[inline]
    pub const fn canvas_rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Blocks in list order. Order carries no meaning.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Take ownership of the blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// How many cuts this generation asked for.
    #[inline]
    pub const fn cuts_requested(&self) -> usize {
        self.cuts_requested
    }

    /// The cuts that actually happened, in order.
    #[inline]
    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// Number of blocks carrying `paint`.
    pub fn count(&self, paint: Paint) -> usize {
        self.blocks.iter().filter(|b| b.paint == paint).count()
    }

    /// Check that the blocks exactly tile the canvas.
    ///
    /// Every block must be non-empty and inside the canvas, no two blocks may
    /// overlap, and the areas must add up to the canvas area.
    pub fn is_tiling(&self) -> bool {
        let canvas = self.canvas_rect();
        if self
            .blocks
            .iter()
            .any(|b| b.rect.is_empty() || !canvas.contains_rect(&b.rect))
        {
            return false;
        }

        for (i, a) in self.blocks.iter().enumerate() {
            if self.blocks[i + 1..]
                .iter()
                .any(|b| a.rect.intersection_area(&b.rect) > 0)
            {
                return false;
            }
        }

        let covered: u64 = self.blocks.iter().map(|b| u64::from(b.rect.area())).sum();
        covered == u64::from(canvas.area())
    }
}

/// Generate a composition for a `width` x `height` canvas.
///
/// Both dimensions must be non-zero.
pub fn generate<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Composition {
    let cuts = Partitioner::choose_cut_count(rng);
    generate_with_cuts(width, height, cuts, rng)
}

/// Generate a composition with a fixed number of attempted cuts.
pub fn generate_with_cuts<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    cuts: usize,
    rng: &mut R,
) -> Composition {
    let _span = debug_span!("generate", width, height, cuts).entered();

    let mut partitioner = Partitioner::new(width, height);
    let splits = partitioner.run(cuts, rng);
    let mut blocks = partitioner.into_blocks();
    colorize(&mut blocks, rng);

    tracing::debug!(
        blocks = blocks.len(),
        splits = splits.len(),
        "composition generated"
    );

    Composition {
        blocks,
        width,
        height,
        cuts_requested: cuts,
        splits,
    }
}
