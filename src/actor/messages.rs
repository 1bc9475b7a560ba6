//! Message types for actor communication.
//!
//! These enums define the protocol between the input thread, the main loop
//! and the render thread.

use crate::canvas::Canvas;

/// Key codes for keyboard input.
///
/// A small subset of crossterm's `KeyCode`: only what the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Control only.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

/// A mouse press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
    /// Button pressed.
    pub button: MouseButton,
}

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Mouse button pressed.
    MouseDown(MouseEvent),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

/// What the viewer does in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Produce a new composition.
    Regenerate,
    /// Repaint the current composition at a new terminal size.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// Leave the viewer.
    Quit,
}

impl InputEvent {
    /// Map an event to a viewer action.
    ///
    /// Any mouse press, Space, Enter or `r` regenerates. `q`, Esc and
    /// Ctrl+C quit. Everything else is ignored.
    pub const fn action(&self) -> Option<Action> {
        match self {
            Self::MouseDown(_)
            | Self::Key {
                code: KeyCode::Char(' ' | 'r' | 'R') | KeyCode::Enter,
                modifiers: KeyModifiers { control: false, .. },
            } => Some(Action::Regenerate),
            Self::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers { control: true, .. },
            }
            | Self::Key {
                code: KeyCode::Char('q' | 'Q') | KeyCode::Esc,
                ..
            }
            | Self::Shutdown => Some(Action::Quit),
            Self::Resize { width, height } => Some(Action::Resize {
                width: *width,
                height: *height,
            }),
            Self::Key { .. } | Self::Error(_) => None,
        }
    }
}

/// Commands sent to the render thread.
#[derive(Debug)]
pub enum RenderCommand {
    /// Show a canvas, writing only the cells that changed.
    Present(Box<Canvas>),

    /// Show a canvas with a full redraw.
    Redraw(Box<Canvas>),

    /// The terminal changed size; the next frame is a full redraw.
    Resize {
        /// New width.
        width: u16,
        /// New height.
        height: u16,
    },

    /// Shutdown the render thread.
    Shutdown,
}
