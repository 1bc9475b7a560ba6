//! Property-based invariant tests for composition generation.
//!
//! These tests verify structural invariants that must hold for any canvas
//! size and any seed:
//!
//! 1. Blocks exactly tile the canvas.
//! 2. Block count is one more than the number of splits, bounded by the cut count.
//! 3. Only blocks larger than 150 units on both sides are ever split.
//! 4. Clearly wide blocks are cut vertically, clearly tall ones horizontally.
//! 5. Cut offsets stay inside the split fraction of the parent extent.
//! 6. Accent budget: one red, one blue, one yellow, at most one black.
//! 7. Same seed, same composition.
//! 8. Painting and full redraw depend only on the composition.

use mondrian::canvas::diff::render_full;
use mondrian::{
    composition::{ASPECT_LIMIT, BLACK_MIN_BLOCKS, CUT_COUNT, MIN_SPLIT_EXTENT, SPLIT_FRACTION},
    generate, generate_with_cuts, paint, Canvas, Cut, Paint, Style, Viewport,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

// ── Helpers ─────────────────────────────────────────────────────────────

fn canvas_size_strategy() -> impl Strategy<Value = (u16, u16)> {
    (1u16..=2400, 1u16..=2400)
}

fn rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Tiling
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn blocks_tile_canvas((w, h) in canvas_size_strategy(), seed in any::<u64>()) {
        let c = generate(w, h, &mut rng(seed));
        prop_assert!(c.is_tiling(), "not a tiling for {}x{} seed {}: {:?}", w, h, seed, c.blocks());
        prop_assert_eq!(c.width(), w);
        prop_assert_eq!(c.height(), h);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Block count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn block_count_follows_splits((w, h) in canvas_size_strategy(), seed in any::<u64>()) {
        let c = generate(w, h, &mut rng(seed));
        prop_assert!(CUT_COUNT.contains(&c.cuts_requested()));
        prop_assert!(c.splits().len() <= c.cuts_requested());
        prop_assert_eq!(c.blocks().len(), c.splits().len() + 1);
    }

    #[test]
    fn forced_cut_count_is_upper_bound(
        (w, h) in canvas_size_strategy(),
        cuts in 0usize..=12,
        seed in any::<u64>(),
    ) {
        let c = generate_with_cuts(w, h, cuts, &mut rng(seed));
        prop_assert_eq!(c.cuts_requested(), cuts);
        prop_assert!(c.blocks().len() <= cuts + 1);
        prop_assert!(c.is_tiling());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-5. Split rules
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn only_large_blocks_are_split((w, h) in canvas_size_strategy(), seed in any::<u64>()) {
        let c = generate(w, h, &mut rng(seed));
        for split in c.splits() {
            prop_assert!(split.parent.width > MIN_SPLIT_EXTENT, "{:?}", split);
            prop_assert!(split.parent.height > MIN_SPLIT_EXTENT, "{:?}", split);
        }
    }

    #[test]
    fn aspect_forces_orientation((w, h) in canvas_size_strategy(), seed in any::<u64>()) {
        let c = generate(w, h, &mut rng(seed));
        for split in c.splits() {
            let pw = f32::from(split.parent.width);
            let ph = f32::from(split.parent.height);
            if pw > ph * ASPECT_LIMIT {
                prop_assert_eq!(split.cut, Cut::Vertical, "wide parent {:?}", split.parent);
            }
            if ph > pw * ASPECT_LIMIT {
                prop_assert_eq!(split.cut, Cut::Horizontal, "tall parent {:?}", split.parent);
            }
        }
    }

    #[test]
    fn offsets_stay_in_fraction((w, h) in canvas_size_strategy(), seed in any::<u64>()) {
        let c = generate(w, h, &mut rng(seed));
        for split in c.splits() {
            let extent = split.cut.extent(&split.parent);
            let low = (SPLIT_FRACTION.start * f64::from(extent)) as u16;
            let high = (SPLIT_FRACTION.end * f64::from(extent)) as u16;
            prop_assert!(split.offset >= low && split.offset <= high, "{:?}", split);
            prop_assert!(split.offset > 0 && split.offset < extent);

            let (first, second) = split.children();
            prop_assert_eq!(first.area() + second.area(), split.parent.area());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Accent budget
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn accent_budget((w, h) in canvas_size_strategy(), seed in any::<u64>()) {
        let c = generate(w, h, &mut rng(seed));
        let n = c.blocks().len();

        prop_assert_eq!(c.count(Paint::Red), 1);
        prop_assert_eq!(c.count(Paint::Blue), usize::from(n >= 2));
        prop_assert_eq!(c.count(Paint::Yellow), usize::from(n >= 3));

        let black = c.count(Paint::Black);
        prop_assert!(black <= 1);
        if n < BLACK_MIN_BLOCKS {
            prop_assert_eq!(black, 0);
        }

        let accents = c.blocks().iter().filter(|b| b.paint.is_accent()).count();
        prop_assert_eq!(accents, n.min(3) + black);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_seed_same_composition((w, h) in canvas_size_strategy(), seed in any::<u64>()) {
        prop_assert_eq!(generate(w, h, &mut rng(seed)), generate(w, h, &mut rng(seed)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Presentation is a function of the composition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn paint_and_redraw_are_stable(
        columns in 1u16..=120,
        rows in 1u16..=40,
        seed in any::<u64>(),
    ) {
        let viewport = Viewport::default();
        let style = Style::default();
        let (w, h) = viewport.logical_size(columns, rows);
        let c = generate(w, h, &mut rng(seed));

        let mut a = Canvas::new(columns, rows);
        let mut b = Canvas::new(columns, rows);
        paint(&c, &viewport, &style, &mut a);
        paint(&c, &viewport, &style, &mut b);
        paint(&c, &viewport, &style, &mut b);
        prop_assert_eq!(&a, &b);

        let mut first = Vec::new();
        let mut second = Vec::new();
        render_full(&a, &mut first);
        render_full(&b, &mut second);
        prop_assert_eq!(first, second);
    }
}

// ── Fixed scenarios ─────────────────────────────────────────────────────

#[test]
fn small_canvas_is_single_red_block() {
    for seed in 0..50 {
        let c = generate(120, 90, &mut rng(seed));
        assert_eq!(c.blocks().len(), 1);
        assert_eq!(c.blocks()[0].paint, Paint::Red);
        assert!(c.splits().is_empty());
    }
}

#[test]
fn five_cuts_on_800x600_give_six_blocks() {
    for seed in 0..200 {
        let c = generate_with_cuts(800, 600, 5, &mut rng(seed));
        assert_eq!(c.blocks().len(), 6, "seed {seed}");
    }
}

#[test]
fn black_appears_on_large_canvases() {
    let blacks = (0..200)
        .map(|seed| generate(1600, 1200, &mut rng(seed)))
        .filter(|c| c.count(Paint::Black) == 1)
        .count();
    assert!((50..=150).contains(&blacks), "black in {blacks} of 200");
}
