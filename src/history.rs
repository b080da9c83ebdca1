//! Commit/undo/redo discipline over the shape log.
//!
//! History is linear, not a tree: committing a new shape after an undo
//! permanently discards the undone branch. Undo and redo move whole records
//! between the log and the redo stack by value; records are immutable, so no
//! cloning or serialisation is involved.

use crate::draw::{Frame, Shape};
use log::debug;
use thiserror::Error;

/// Errors reported at the commit boundary.
#[derive(Debug, Error, PartialEq)]
pub enum HistoryError {
    /// The record carried a NaN or infinite coordinate or thickness.
    #[error("shape has non-finite geometry")]
    InvalidGeometry,
}

/// Owns the committed shape log and the redo buffer.
///
/// Invariants:
/// - the redo stack is non-empty only as a result of [`History::undo`];
///   every successful [`History::commit`] clears it unconditionally;
/// - `redo(undo(s)) == s` and `undo(redo(s)) == s` whenever the respective
///   operation is legal.
#[derive(Debug, Default)]
pub struct History {
    frame: Frame,
    /// Undone shapes, most recently undone last.
    redo_stack: Vec<Shape>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            frame: Frame::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Builds a history from a restored shape sequence (e.g. a saved
    /// session). The redo buffer starts empty.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            frame: Frame::from_shapes(shapes),
            redo_stack: Vec::new(),
        }
    }

    /// Appends a finished shape to the log.
    ///
    /// Rejects records with non-finite geometry and leaves the state
    /// untouched in that case. On success the redo buffer is invalidated:
    /// shapes undone before this commit can never be redone.
    pub fn commit(&mut self, shape: Shape) -> Result<(), HistoryError> {
        if !shape.is_finite() {
            return Err(HistoryError::InvalidGeometry);
        }
        self.frame.push(shape);
        self.redo_stack.clear();
        Ok(())
    }

    /// Moves the most recent shape onto the redo stack.
    ///
    /// Returns `false` (and changes nothing) when the log is empty. After a
    /// successful undo the caller must run a full repaint; the bitmap model
    /// cannot remove a single shape incrementally.
    pub fn undo(&mut self) -> bool {
        match self.frame.pop() {
            Some(shape) => {
                self.redo_stack.push(shape);
                true
            }
            None => {
                debug!("nothing to undo");
                false
            }
        }
    }

    /// Moves the most recently undone shape back onto the log.
    ///
    /// Returns `false` (and changes nothing) when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(shape) => {
                self.frame.push(shape);
                true
            }
            None => {
                debug!("nothing to redo");
                false
            }
        }
    }

    /// Empties the log and the redo buffer.
    ///
    /// Clearing also drops undone shapes: redoing an old shape onto a
    /// freshly cleared canvas would be surprising, so clear resets the whole
    /// timeline like a new session.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.redo_stack.clear();
    }

    /// Returns true if there are shapes that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.frame.is_empty()
    }

    /// Returns true if there are shapes that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The committed shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.frame.shapes
    }

    /// The underlying frame (e.g. for session snapshots).
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.frame.len()
    }

    /// Returns true when nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }
}
