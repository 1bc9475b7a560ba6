//! Partitioner: carves the canvas into blocks with a bounded number of cuts.
//!
//! Each cut picks one block that is still large in both dimensions and
//! divides it in two. Blocks at or under [`MIN_SPLIT_EXTENT`] on either side
//! are left alone as accents. Long thin blocks are always cut across their
//! long axis so slivers never appear.

use super::block::{Block, Cut, Split};
use crate::layout::Rect;
use rand::Rng;
use std::ops::{Range, RangeInclusive};
use tracing::{debug, trace};

/// A block must exceed this on both sides to be split.
pub const MIN_SPLIT_EXTENT: u16 = 150;

/// Ratio above which the cut orientation is forced along the long axis.
pub const ASPECT_LIMIT: f32 = 1.5;

/// Where along the divided extent a cut may land.
pub const SPLIT_FRACTION: Range<f64> = 0.3..0.7;

/// How many cuts one generation asks for.
pub const CUT_COUNT: RangeInclusive<usize> = 5..=9;

/// Whether a block is large enough to be split further.
#[inline]
pub const fn is_eligible(rect: &Rect) -> bool {
    rect.width > MIN_SPLIT_EXTENT && rect.height > MIN_SPLIT_EXTENT
}

/// Pick the cut orientation for `rect`.
///
/// `coin` is the unbiased draw (true means horizontal). It only decides
/// the outcome when the block is not clearly wide or clearly tall.
pub fn orientation_for(rect: &Rect, coin: bool) -> Cut {
    let (w, h) = (f32::from(rect.width), f32::from(rect.height));
    if w > h * ASPECT_LIMIT {
        Cut::Vertical
    } else if h > w * ASPECT_LIMIT {
        Cut::Horizontal
    } else if coin {
        Cut::Horizontal
    } else {
        Cut::Vertical
    }
}

/// Owns the block list while a composition is being cut.
#[derive(Debug, Clone)]
pub struct Partitioner {
    blocks: Vec<Block>,
}

impl Partitioner {
    /// Create a partitioner holding a single block that spans the canvas.
    pub fn new(width: u16, height: u16) -> Self {
        let mut partitioner = Self {
            blocks: Vec::with_capacity(1 + *CUT_COUNT.end()),
        };
        partitioner.reset(width, height);
        partitioner
    }

    /// Discard all blocks and start over from one neutral full-canvas block.
    pub fn reset(&mut self, width: u16, height: u16) {
        debug_assert!(width > 0 && height > 0, "canvas dimensions must be non-zero");
        self.blocks.clear();
        self.blocks.push(Block::new(Rect::from_size(width, height)));
    }

    /// Current blocks, in list order.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if there are no blocks (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Take ownership of the block list.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Draw the number of cuts for one generation, uniform over [`CUT_COUNT`].
    pub fn choose_cut_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
        rng.random_range(CUT_COUNT)
    }

    /// Attempt one cut.
    ///
    /// Returns `None`, leaving the blocks untouched, when no block is large
    /// enough. The children replace the parent at its position in the list.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn split<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Split> {
        let eligible: Vec<usize> = self
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| is_eligible(&block.rect))
            .map(|(index, _)| index)
            .collect();

        if eligible.is_empty() {
            debug!(blocks = self.blocks.len(), "no block large enough to split");
            return None;
        }

        let index = eligible[rng.random_range(0..eligible.len())];
        let parent = self.blocks[index].rect;

        let cut = orientation_for(&parent, rng.random_bool(0.5));
        let fraction = rng.random_range(SPLIT_FRACTION);
        // Truncation toward zero; extent > 150 keeps both children non-empty.
        let offset = (fraction * f64::from(cut.extent(&parent))) as u16;

        let (first, second) = cut.apply(&parent, offset);
        self.blocks[index] = Block::new(first);
        self.blocks.insert(index + 1, Block::new(second));

        trace!(?parent, ?cut, offset, "split block");
        Some(Split {
            parent,
            cut,
            offset,
        })
    }

    /// Attempt exactly `cuts` splits and return the ones that happened.
    ///
    /// Once nothing is eligible, the remaining attempts are no-ops.
    pub fn run<R: Rng + ?Sized>(&mut self, cuts: usize, rng: &mut R) -> Vec<Split> {
        let mut splits = Vec::with_capacity(cuts);
        for _ in 0..cuts {
            if let Some(split) = self.split(rng) {
                splits.push(split);
            }
        }
        splits
    }
}
