//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types of the crate:
//! - [`Color`]: RGBA color representation plus the picker's HSL triple
//! - [`Shape`]: committed drawing records (pencil, rectangle, ellipse, line)
//! - [`Frame`]: the ordered log of committed shapes
//! - [`geometry`]: pure resolution from drag coordinates to stroke parameters
//! - [`render`]: full-surface replay and single-shape rendering over Cairo

pub mod color;
pub mod frame;
pub mod geometry;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::{Color, Hsl};
pub use frame::Frame;
pub use geometry::Point;
pub use render::{clear_surface, render_pencil, render_shape, render_shapes, repaint};
pub use shape::Shape;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
