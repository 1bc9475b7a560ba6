//! Terminal viewer: a new composition on every click.
//!
//! Controls:
//! - mouse press, Space, Enter or `r`: regenerate
//! - `q`, Esc or Ctrl+C: quit
//!
//! Environment:
//! - `MONDRIAN_SEED`: fixed seed for a reproducible sequence
//! - `MONDRIAN_LOG`: log file path (logging is off otherwise; the
//!   terminal itself is the canvas)
//! - `RUST_LOG`: log filter, default `info`

use mondrian::{Action, Engine, EngineConfig};
use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

fn main() -> std::io::Result<()> {
    if let Ok(path) = std::env::var("MONDRIAN_LOG") {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let seed = std::env::var("MONDRIAN_SEED")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok());

    let mut engine = Engine::with_config(EngineConfig {
        seed,
        ..EngineConfig::default()
    })?;

    while engine.is_running() {
        let Some(event) = engine.wait_input(Duration::from_millis(100)) else {
            continue;
        };
        match event.action() {
            Some(Action::Regenerate) => engine.regenerate(),
            Some(Action::Resize { width, height }) => engine.handle_resize(width, height),
            Some(Action::Quit) => engine.stop(),
            None => {}
        }
    }

    Ok(())
}
