//! Actor Model: Message-passing front end for the terminal viewer.
//!
//! This module implements a simple actor system using crossbeam channels:
//! - **Input Actor**: Polls terminal events, forwards to main loop
//! - **Render Actor**: Receives painted canvases, diffs and flushes
//! - **Main Loop**: Maps events to actions and runs generation
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │  Main Loop   │
//! └──────────────┘                     │  (generate,  │
//!                                      │   paint)     │
//! ┌──────────────┐    RenderCommand    │              │
//! │Render Thread │ ◀────────────────── │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod renderer;

pub use engine::{Engine, EngineConfig, Studio};
pub use input::InputActor;
pub use messages::{Action, InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent, RenderCommand};
pub use renderer::{RenderStats, RendererActor};
