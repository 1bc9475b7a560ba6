//! Colorizer: spends a fixed accent budget on a random subset of blocks.
//!
//! Red, blue and yellow go to the first three blocks of a uniform
//! permutation. A fourth block may turn black, but only when the
//! composition has at least [`BLACK_MIN_BLOCKS`] blocks. Everything else
//! stays neutral and no block geometry is touched.

use super::block::{Block, Paint};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Minimum block count before the black accent is considered.
pub const BLACK_MIN_BLOCKS: usize = 6;

/// Chance of the black accent once [`BLACK_MIN_BLOCKS`] is met.
pub const BLACK_PROBABILITY: f64 = 0.5;

/// Assign accent colors in place.
///
/// Returns the block indices in the order they were drawn, so callers can
/// see which block received which accent.
pub fn colorize<R: Rng + ?Sized>(blocks: &mut [Block], rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..blocks.len()).collect();
    // Fisher-Yates: for i in (1..len).rev(), swap i with a uniform j in 0..=i.
    order.shuffle(rng);

    for (&index, paint) in order.iter().zip(Paint::PRIMARIES) {
        blocks[index].paint = paint;
        trace!(index, ?paint, "accent assigned");
    }

    if blocks.len() >= BLACK_MIN_BLOCKS && rng.random_bool(BLACK_PROBABILITY) {
        let index = order[3];
        blocks[index].paint = Paint::Black;
        trace!(index, "black accent assigned");
    }

    order
}
