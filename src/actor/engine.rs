//! Engine: Main coordinator that ties generation to the terminal.
//!
//! The Engine sets up the terminal, spawns the input and render actors,
//! and owns the current composition. Generation always runs on the
//! caller's thread; only the painted canvas crosses to the render thread.

use super::messages::{InputEvent, RenderCommand};
use super::{InputActor, RendererActor};
use crate::canvas::{paint, Canvas, Style, Viewport};
use crate::composition::{generate, Composition};
use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::io;
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to enable mouse capture (needed for click-to-regenerate).
    pub enable_mouse: bool,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Seed for the random source; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Cell to logical unit mapping.
    pub viewport: Viewport,
    /// Colors and stroke.
    pub style: Style,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            enable_mouse: true,
            alternate_screen: true,
            seed: None,
            viewport: Viewport::default(),
            style: Style::default(),
        }
    }
}

/// Owns the random source, the current composition and its painted canvas.
///
/// This is the part of the engine that does not touch the terminal.
#[derive(Debug, Clone)]
pub struct Studio {
    rng: Pcg32,
    viewport: Viewport,
    style: Style,
    canvas: Canvas,
    composition: Composition,
    generation: u64,
}

impl Studio {
    /// Create a studio for a `columns` x `rows` terminal and generate the
    /// first composition.
    ///
    /// # Panics
    /// Panics if `columns` or `rows` is 0.
    pub fn new(columns: u16, rows: u16, mut rng: Pcg32, viewport: Viewport, style: Style) -> Self {
        let (width, height) = viewport.logical_size(columns, rows);
        let composition = generate(width, height, &mut rng);
        let mut canvas = Canvas::new(columns, rows);
        paint(&composition, &viewport, &style, &mut canvas);
        tracing::info!(blocks = composition.blocks().len(), "initial composition");

        Self {
            rng,
            viewport,
            style,
            canvas,
            composition,
            generation: 1,
        }
    }

    /// Replace the composition with a new one for the current size.
    pub fn regenerate(&mut self) {
        let (width, height) = self
            .viewport
            .logical_size(self.canvas.width(), self.canvas.height());
        self.composition = generate(width, height, &mut self.rng);
        self.generation += 1;
        paint(&self.composition, &self.viewport, &self.style, &mut self.canvas);
        tracing::info!(
            generation = self.generation,
            blocks = self.composition.blocks().len(),
            cuts = self.composition.cuts_requested(),
            "regenerated"
        );
    }

    /// Repaint the current composition onto a canvas of a new size.
    ///
    /// The composition itself is kept; parts that no longer fit are
    /// clipped and new space shows the background.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.canvas.resize(columns, rows);
        paint(&self.composition, &self.viewport, &self.style, &mut self.canvas);
    }

    /// The current composition.
    pub const fn composition(&self) -> &Composition {
        &self.composition
    }

    /// The painted canvas.
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of compositions generated so far.
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// The interactive terminal viewer.
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Render command sender.
    render_tx: Sender<RenderCommand>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    /// Renderer actor handle.
    renderer_actor: Option<RendererActor>,
    /// Generation state.
    studio: Studio,
    /// Whether the engine is running.
    running: bool,
}

impl Engine {
    /// Create a new engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    ///
    /// The first composition is generated and shown before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] if the terminal reports a zero
    /// dimension, or any error from terminal setup or thread spawning. The
    /// terminal is restored before an error is returned.
    pub fn with_config(config: EngineConfig) -> io::Result<Self> {
        let (width, height) = checked_size(terminal::size()?)?;

        terminal::enable_raw_mode()?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let (render_tx, render_rx) = bounded::<RenderCommand>(16);

        let started = enter_screen(&config).and_then(|()| {
            let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout)?;
            let renderer_actor = RendererActor::spawn(render_rx)?;
            Ok((input_actor, renderer_actor))
        });
        let (input_actor, renderer_actor) = match started {
            Ok(actors) => actors,
            Err(e) => {
                restore_terminal(&config);
                return Err(e);
            }
        };

        let rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        tracing::info!(width, height, seed = ?config.seed, "engine started");

        let studio = Studio::new(width, height, rng, config.viewport, config.style);

        let engine = Self {
            config,
            input_rx,
            render_tx,
            input_actor: Some(input_actor),
            renderer_actor: Some(renderer_actor),
            studio,
            running: true,
        };
        engine.redraw();
        Ok(engine)
    }

    /// The current composition.
    pub const fn composition(&self) -> &Composition {
        self.studio.composition()
    }

    /// Generation state.
    pub const fn studio(&self) -> &Studio {
        &self.studio
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Wait for the next input event (blocking with timeout).
    pub fn wait_input(&self, timeout: Duration) -> Option<InputEvent> {
        self.input_rx.recv_timeout(timeout).ok()
    }

    /// Generate a new composition and show it.
    pub fn regenerate(&mut self) {
        self.studio.regenerate();
        self.present();
    }

    /// Send the painted canvas to the renderer as a diff update.
    pub fn present(&self) {
        let _ = self
            .render_tx
            .send(RenderCommand::Present(Box::new(self.studio.canvas().clone())));
    }

    /// Send the painted canvas to the renderer as a full redraw.
    pub fn redraw(&self) {
        let _ = self
            .render_tx
            .send(RenderCommand::Redraw(Box::new(self.studio.canvas().clone())));
    }

    /// Handle a resize event: repaint the current composition at the new size.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        if width == 0 || height == 0 {
            return;
        }
        self.studio.resize(width, height);
        let _ = self.render_tx.send(RenderCommand::Resize { width, height });
        self.redraw();
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        // Let the last frame flush before leaving the alternate screen.
        let _ = self.render_tx.send(RenderCommand::Shutdown);
        if let Some(actor) = self.renderer_actor.take() {
            actor.join();
        }

        restore_terminal(&self.config);
        tracing::info!(generations = self.studio.generation(), "engine stopped");
    }
}

/// Reject a terminal size with a zero dimension.
fn checked_size((width, height): (u16, u16)) -> io::Result<(u16, u16)> {
    if width == 0 || height == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("terminal size {width}x{height} has a zero dimension"),
        ));
    }
    Ok((width, height))
}

/// Switch to the alternate screen, capture the mouse and hide the cursor.
fn enter_screen(config: &EngineConfig) -> io::Result<()> {
    let mut stdout = io::stdout();
    if config.alternate_screen {
        execute!(stdout, EnterAlternateScreen)?;
    }
    if config.enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    execute!(stdout, cursor::Hide)
}

/// Undo [`enter_screen`] and raw mode. Errors are ignored.
fn restore_terminal(config: &EngineConfig) {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show);
    if config.enable_mouse {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    if config.alternate_screen {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
    let _ = terminal::disable_raw_mode();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Paint;

    fn studio(seed: u64) -> Studio {
        Studio::new(
            100,
            40,
            Pcg32::seed_from_u64(seed),
            Viewport::default(),
            Style::default(),
        )
    }

    #[test]
    fn test_zero_terminal_size_rejected() {
        for size in [(0, 24), (80, 0), (0, 0)] {
            let err = checked_size(size).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
        assert_eq!(checked_size((80, 24)).unwrap(), (80, 24));
        assert_eq!(checked_size((1, 1)).unwrap(), (1, 1));
    }

    #[test]
    fn test_studio_generates_at_logical_size() {
        let s = studio(1);
        assert_eq!(s.composition().width(), 800);
        assert_eq!(s.composition().height(), 640);
        assert!(s.composition().is_tiling());
        assert_eq!(s.canvas().width(), 100);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_regenerate_replaces_composition() {
        let mut s = studio(2);
        let first = s.composition().clone();
        s.regenerate();
        assert_eq!(s.generation(), 2);
        assert!(s.composition().is_tiling());
        // Fresh block list, not an extension of the old one.
        assert!(s.composition().blocks().len() <= 10);
        assert_ne!(&first, s.composition());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = studio(5);
        let mut b = studio(5);
        for _ in 0..3 {
            a.regenerate();
            b.regenerate();
            assert_eq!(a.composition(), b.composition());
            assert_eq!(a.canvas(), b.canvas());
        }
    }

    #[test]
    fn test_resize_keeps_composition() {
        let mut s = studio(3);
        let before = s.composition().clone();
        s.resize(60, 20);
        assert_eq!(s.composition(), &before);
        assert_eq!(s.canvas().width(), 60);
        assert_eq!(s.canvas().height(), 20);
    }

    #[test]
    fn test_studio_canvas_shows_accents() {
        let s = studio(4);
        let style = Style::default();
        let red = s.composition().count(Paint::Red);
        assert_eq!(red, 1);
        assert!(s
            .canvas()
            .cells()
            .iter()
            .any(|c| c.bg() == style.palette.red));
    }
}
