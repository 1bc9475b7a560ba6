//! SVG export: write one composition to stdout.
//!
//! Usage: `cargo run --example svg_export -- [WIDTH] [HEIGHT] [SEED] > out.svg`
//!
//! Defaults to 800x600 with a random seed. The seed in use is logged to
//! stderr so a composition can be reproduced.

use mondrian::{generate, SvgExporter};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::io::Write;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: u16| -> u16 {
        args.get(i)
            .and_then(|s| s.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(default)
    };
    let width = arg(0, 800);
    let height = arg(1, 600);
    let seed = args
        .get(2)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| rand::rng().random());

    tracing::info!(width, height, seed, "exporting composition");

    let composition = generate(width, height, &mut Pcg32::seed_from_u64(seed));
    let svg = SvgExporter::default().export(&composition);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(svg.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}
