//! Shape-history and redraw engine for a freehand drawing tool.
//!
//! The crate keeps an ordered log of committed shapes, enforces the linear
//! undo/redo discipline over that log, and deterministically replays it onto
//! a Cairo surface. Pointer sampling, preview rendering, and the color
//! picker UI are external collaborators; they talk to this core through
//! [`input::InputState`], plain-data geometry from [`draw::geometry`], and
//! the tolerant [`session`] persistence hook.

pub mod draw;
pub mod history;
pub mod input;
pub mod session;

pub use draw::{Color, Frame, Hsl, Point, Shape};
pub use history::{History, HistoryError};
pub use input::{InputState, MouseButton, Tool};
