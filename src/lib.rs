//! # Mondrian
//!
//! Procedural Mondrian-style compositions.
//!
//! A canvas is cut 5 to 9 times into axis-aligned blocks, a strict budget of
//! accent colors is spread over a random subset of them, and the result is
//! drawn with heavy dark outlines. The generator is pure and takes an
//! explicit random source; the terminal viewer and SVG exporter are thin
//! layers on top.
//!
//! ## Core Concepts
//!
//! - **Partitioner**: splits one large-enough block per cut, never below 150 units
//! - **Colorizer**: one red, one blue, one yellow, sometimes one black
//! - **Canvas**: a true-color cell grid the composition is painted into
//! - **Actor model**: isolated threads for input and rendering
//!
//! ## Example
//!
//! ```rust
//! use mondrian::{generate, Paint};
//! use rand::SeedableRng;
//! use rand_pcg::Pcg32;
//!
//! let mut rng = Pcg32::seed_from_u64(7);
//! let composition = generate(800, 600, &mut rng);
//!
//! assert!(composition.is_tiling());
//! assert_eq!(composition.count(Paint::Red), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod canvas;
pub mod composition;
pub mod export;
pub mod layout;

// Re-exports for convenience
pub use actor::{Action, Engine, EngineConfig, InputEvent, Studio};
pub use canvas::{paint, Canvas, Cell, Palette, Rgb, Style, Viewport};
pub use composition::{generate, generate_with_cuts, Block, Composition, Cut, Paint, Partitioner, Split};
pub use export::SvgExporter;
pub use layout::Rect;
