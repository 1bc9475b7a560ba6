//! Renderer Actor: Dedicated thread for rendering to the terminal.
//!
//! This actor owns the canvas currently on screen. It receives finished
//! canvases from the main loop, encodes them as ANSI and flushes each
//! frame with a single write.

use super::messages::RenderCommand;
use crate::canvas::diff::{render_diff, render_full, DiffState};
use crate::canvas::Canvas;
use crossbeam_channel::Receiver;
use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Renderer actor that handles terminal output.
///
/// The thread runs until it receives [`RenderCommand::Shutdown`] or every
/// sender is dropped, so queued frames are always flushed first.
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
}

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total cells changed across diffed frames.
    pub cells_changed: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

/// Internal renderer state.
struct Renderer<W: Write> {
    /// Canvas currently on screen (`None` before the first frame).
    current: Option<Canvas>,
    /// Diff state for cursor/color tracking.
    diff_state: DiffState,
    /// Pre-allocated output buffer.
    output: Vec<u8>,
    /// Terminal output.
    writer: W,
    /// Render statistics.
    stats: RenderStats,
    /// Whether the next frame must be a full redraw.
    needs_full_redraw: bool,
}

impl<W: Write> Renderer<W> {
    fn new(writer: W) -> Self {
        Self {
            current: None,
            diff_state: DiffState::new(),
            output: Vec::with_capacity(65536),
            writer,
            stats: RenderStats::default(),
            needs_full_redraw: true,
        }
    }

    /// Show `next`, diffing against the current canvas when possible.
    fn render(&mut self, next: Canvas) -> io::Result<()> {
        let start = Instant::now();
        self.output.clear();

        match &self.current {
            Some(current)
                if !self.needs_full_redraw
                    && current.width() == next.width()
                    && current.height() == next.height() =>
            {
                let result = render_diff(current, &next, &mut self.output, &mut self.diff_state);
                self.stats.cells_changed += result.cells_changed as u64;
            }
            _ => {
                render_full(&next, &mut self.output);
                self.needs_full_redraw = false;
                // Colors were reset and the cursor sits at the last cell.
                self.diff_state.reset();
            }
        }

        if !self.output.is_empty() {
            self.writer.write_all(&self.output)?;
            self.writer.flush()?;
        }

        self.current = Some(next);

        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_render_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        tracing::trace!(
            frame = self.stats.frames,
            bytes = self.output.len(),
            us = self.stats.last_render_us,
            "frame flushed"
        );

        Ok(())
    }

    /// Process one command. Returns `false` when the loop should stop.
    fn handle(&mut self, command: RenderCommand) -> io::Result<bool> {
        match command {
            RenderCommand::Present(canvas) => self.render(*canvas)?,
            RenderCommand::Redraw(canvas) => {
                self.needs_full_redraw = true;
                self.render(*canvas)?;
            }
            RenderCommand::Resize { width, height } => {
                tracing::debug!(width, height, "renderer resized");
                self.needs_full_redraw = true;
            }
            RenderCommand::Shutdown => return Ok(false),
        }
        Ok(true)
    }
}

impl RendererActor {
    /// Spawn the renderer actor thread writing to stdout.
    pub fn spawn(receiver: Receiver<RenderCommand>) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name("mondrian-render".to_string())
            .spawn(move || {
                if let Err(e) = Self::run_loop(&receiver, io::stdout()) {
                    tracing::error!(error = %e, "render thread stopped");
                }
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the render thread to finish.
    ///
    /// Send [`RenderCommand::Shutdown`] (or drop the sender) first.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main render loop.
    fn run_loop<W: Write>(receiver: &Receiver<RenderCommand>, writer: W) -> io::Result<RenderStats> {
        let mut renderer = Renderer::new(writer);

        while let Ok(command) = receiver.recv() {
            if !renderer.handle(command)? {
                break;
            }
        }

        tracing::debug!(stats = ?renderer.stats, "render loop finished");
        Ok(renderer.stats)
    }
}
