//! Generic input event types for cross-backend compatibility.

/// Mouse button identification.
///
/// Backend implementations map their native button codes to these generic
/// values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (cancels the active drag)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
