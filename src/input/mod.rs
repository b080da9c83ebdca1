//! Input handling and tool state machine.
//!
//! This module translates backend pointer events into drawing actions. It
//! maintains the selected tool, the drawing parameters (color, thickness),
//! and the drag state machine that turns each press/move/release gesture
//! into at most one committed shape.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use state::{DrawingState, InputState};
pub use tool::Tool;
