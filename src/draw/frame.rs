//! Frame container: the ordered log of committed shapes.

use super::shape::Shape;
use serde::{Deserialize, Serialize};

/// The system-of-record for "what has been drawn".
///
/// Shapes are kept in draw order (first = bottom layer, last = top layer);
/// insertion order is the only z-order the bitmap model has. The frame only
/// grows at the tail and shrinks at the tail, so replaying it is always
/// deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Vector of all committed shapes in draw order
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Wraps an existing shape sequence (e.g. a restored session).
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Adds a shape at the top of the draw order.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes and returns the most recently added shape, if any.
    pub fn pop(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    /// Removes all shapes from the frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
