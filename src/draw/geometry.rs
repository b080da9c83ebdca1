//! Pure geometry resolution from raw pointer coordinates.
//!
//! Shapes store the two raw drag coordinates; the functions here convert
//! them into the parameters a stroking backend needs. Everything is plain
//! data, so a preview layer can resolve the in-progress drag with the same
//! code path the repaint engine uses for committed shapes.

use serde::{Deserialize, Serialize};

/// A raw pointer coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Rectangle parameters with signed extents.
///
/// `width`/`height` are negative when the drag extended left/up from its
/// origin; [`RectParams::normalized`] folds the sign away for backends that
/// need a top-left corner and non-negative size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectParams {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectParams {
    /// Returns `(x, y, width, height)` with non-negative extents.
    pub fn normalized(&self) -> (f64, f64, f64, f64) {
        let (x, w) = if self.width >= 0.0 {
            (self.x, self.width)
        } else {
            (self.x + self.width, -self.width)
        };
        let (y, h) = if self.height >= 0.0 {
            (self.y, self.height)
        } else {
            (self.y + self.height, -self.height)
        };
        (x, y, w, h)
    }
}

/// Line endpoints, carried through verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineParams {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Ellipse center and radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseParams {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

/// Resolves a drag pair into rectangle parameters.
///
/// The origin corner is kept verbatim and the extents stay signed.
pub fn rect_params(origin: Point, end: Point) -> RectParams {
    RectParams {
        x: origin.x,
        y: origin.y,
        width: end.x - origin.x,
        height: end.y - origin.y,
    }
}

/// Resolves a drag pair into line endpoints (identity mapping).
pub fn line_params(origin: Point, end: Point) -> LineParams {
    LineParams {
        x1: origin.x,
        y1: origin.y,
        x2: end.x,
        y2: end.y,
    }
}

/// Resolves a drag pair into ellipse center and radii.
///
/// The center is the drag midpoint and each radius is half the absolute
/// extent, so a zero-length drag yields a zero-size ellipse.
pub fn ellipse_params(origin: Point, end: Point) -> EllipseParams {
    EllipseParams {
        cx: (origin.x + end.x) / 2.0,
        cy: (origin.y + end.y) / 2.0,
        rx: (origin.x - end.x).abs() / 2.0,
        ry: (origin.y - end.y).abs() / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_extents_stay_signed() {
        let params = rect_params(Point::new(50.0, 40.0), Point::new(10.0, 70.0));
        assert_eq!(params.x, 50.0);
        assert_eq!(params.y, 40.0);
        assert_eq!(params.width, -40.0);
        assert_eq!(params.height, 30.0);

        let (x, y, w, h) = params.normalized();
        assert_eq!((x, y, w, h), (10.0, 40.0, 40.0, 30.0));
    }

    #[test]
    fn line_endpoints_pass_through() {
        let params = line_params(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!((params.x1, params.y1), (1.0, 2.0));
        assert_eq!((params.x2, params.y2), (3.0, 4.0));
    }

    #[test]
    fn ellipse_center_is_midpoint_regardless_of_drag_direction() {
        let forward = ellipse_params(Point::new(10.0, 20.0), Point::new(50.0, 60.0));
        let backward = ellipse_params(Point::new(50.0, 60.0), Point::new(10.0, 20.0));
        assert_eq!(forward, backward);
        assert_eq!((forward.cx, forward.cy), (30.0, 40.0));
        assert_eq!((forward.rx, forward.ry), (20.0, 20.0));
    }

    #[test]
    fn ellipse_center_matches_smaller_corner_plus_radius() {
        // The midpoint formula must agree with "smaller coordinate + radius".
        let origin = Point::new(73.0, 12.0);
        let end = Point::new(21.0, 88.0);
        let params = ellipse_params(origin, end);
        assert_eq!(params.cx, origin.x.min(end.x) + params.rx);
        assert_eq!(params.cy, origin.y.min(end.y) + params.ry);
    }

    #[test]
    fn zero_length_drags_resolve_to_zero_size() {
        let p = Point::new(5.0, 5.0);
        let rect = rect_params(p, p);
        assert_eq!((rect.width, rect.height), (0.0, 0.0));

        let ellipse = ellipse_params(p, p);
        assert_eq!((ellipse.rx, ellipse.ry), (0.0, 0.0));

        let line = line_params(p, p);
        assert_eq!((line.x1, line.y1), (line.x2, line.y2));
    }
}
