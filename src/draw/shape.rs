//! Shape record definitions.

use super::color::Color;
use super::geometry::Point;
use serde::{Deserialize, Serialize};

/// One committed drawing primitive.
///
/// Each variant keeps the raw pointer coordinates captured during the drag;
/// geometry resolution happens at render time (see [`super::geometry`]).
/// Every shape owns its stroke color and width, fixed at commit time, and is
/// immutable once committed: edits are modelled as undo plus a new commit,
/// never in-place mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Freehand stroke - polyline through every sampled drag position
    Pencil {
        /// Sequence of pointer positions traced during the drag
        points: Vec<Point>,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Rectangle outline between two drag corners
    Rectangle {
        /// Pointer position at drag start
        origin: Point,
        /// Pointer position at drag end
        end: Point,
        /// Border color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
    },
    /// Ellipse outline inscribed in the drag rectangle
    Ellipse {
        /// Pointer position at drag start
        origin: Point,
        /// Pointer position at drag end
        end: Point,
        /// Border color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
    },
    /// Straight line between the drag endpoints
    Line {
        /// Pointer position at drag start
        origin: Point,
        /// Pointer position at drag end
        end: Point,
        /// Line color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
}

impl Shape {
    /// Returns the stroke color of this shape.
    pub fn color(&self) -> Color {
        match self {
            Shape::Pencil { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Ellipse { color, .. }
            | Shape::Line { color, .. } => *color,
        }
    }

    /// Returns the stroke thickness of this shape.
    pub fn thickness(&self) -> f64 {
        match self {
            Shape::Pencil { thick, .. }
            | Shape::Rectangle { thick, .. }
            | Shape::Ellipse { thick, .. }
            | Shape::Line { thick, .. } => *thick,
        }
    }

    /// Returns true when every coordinate and the thickness are finite.
    ///
    /// Non-finite values come from a buggy interaction layer; the history
    /// rejects such records at the commit boundary rather than letting them
    /// corrupt the surface.
    pub fn is_finite(&self) -> bool {
        let coords_finite = match self {
            Shape::Pencil { points, .. } => points.iter().all(Point::is_finite),
            Shape::Rectangle { origin, end, .. }
            | Shape::Ellipse { origin, end, .. }
            | Shape::Line { origin, end, .. } => origin.is_finite() && end.is_finite(),
        };
        coords_finite && self.thickness().is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn finite_check_accepts_zero_size_shapes() {
        let p = Point::new(5.0, 5.0);
        let shapes = [
            Shape::Pencil {
                points: vec![],
                color: RED,
                thick: 1.0,
            },
            Shape::Rectangle {
                origin: p,
                end: p,
                color: RED,
                thick: 1.0,
            },
            Shape::Line {
                origin: p,
                end: p,
                color: RED,
                thick: 1.0,
            },
        ];
        for shape in &shapes {
            assert!(shape.is_finite(), "{shape:?} should be finite");
        }
    }

    #[test]
    fn finite_check_rejects_nan_and_infinity() {
        let bad = Shape::Line {
            origin: Point::new(f64::NAN, 0.0),
            end: Point::new(1.0, 1.0),
            color: RED,
            thick: 1.0,
        };
        assert!(!bad.is_finite());

        let bad_pencil = Shape::Pencil {
            points: vec![Point::new(0.0, 0.0), Point::new(f64::INFINITY, 2.0)],
            color: RED,
            thick: 1.0,
        };
        assert!(!bad_pencil.is_finite());

        let bad_thick = Shape::Rectangle {
            origin: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
            color: RED,
            thick: f64::NAN,
        };
        assert!(!bad_thick.is_finite());
    }

    #[test]
    fn records_round_trip_through_json() {
        let shape = Shape::Ellipse {
            origin: Point::new(10.0, 20.0),
            end: Point::new(50.0, 40.0),
            color: RED,
            thick: 1.0,
        };
        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, back);
    }
}
