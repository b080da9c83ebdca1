//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines what shape record a completed drag gesture
/// produces. Selection comes from the tool palette in the presentation
/// layer; the rectangle starts selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path
    Pencil,
    /// Rectangle outline - from corner to corner (initial selection)
    #[default]
    Rectangle,
    /// Ellipse outline - inscribed in the drag rectangle
    Ellipse,
    /// Straight line - between start and end points
    Line,
}
