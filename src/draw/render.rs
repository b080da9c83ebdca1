//! Cairo-based repaint engine.
//!
//! The surface is a plain bitmap, so removal of an occluding shape cannot be
//! done incrementally: undo, redo, and clear all go through [`repaint`],
//! which erases the full surface and replays the committed log in order. A
//! fresh commit may instead be painted alone via [`render_shape`]; the result
//! is pixel-identical to including it in a full replay.

use super::color::Color;
use super::geometry::{self, Point};
use super::shape::Shape;

/// Clears the whole surface and deterministically replays `shapes` in order.
///
/// Total over any record sequence: an empty slice yields a blank surface.
/// Calling this twice with the same slice produces pixel-identical output.
pub fn repaint(ctx: &cairo::Context, shapes: &[Shape]) {
    clear_surface(ctx);
    render_shapes(ctx, shapes);
}

/// Erases the entire surface, regardless of prior contents.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.restore().ok();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches on the shape kind; each stroke is committed to the surface
/// before this returns.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Pencil {
            points,
            color,
            thick,
        } => {
            render_pencil(ctx, points, *color, *thick);
        }
        Shape::Rectangle {
            origin,
            end,
            color,
            thick,
        } => {
            render_rect(ctx, *origin, *end, *color, *thick);
        }
        Shape::Ellipse {
            origin,
            end,
            color,
            thick,
        } => {
            render_ellipse(ctx, *origin, *end, *color, *thick);
        }
        Shape::Line {
            origin,
            end,
            color,
            thick,
        } => {
            render_line(ctx, *origin, *end, *color, *thick);
        }
    }
}

/// Render a freehand stroke (polyline through points).
///
/// Accepts a borrowed slice so the interaction layer can preview the
/// in-progress point sequence without cloning it.
pub fn render_pencil(ctx: &cairo::Context, points: &[Point], color: Color, thick: f64) {
    if points.is_empty() {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(points[0].x, points[0].y);
    for point in &points[1..] {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
}

/// Render a straight line between the drag endpoints.
fn render_line(ctx: &cairo::Context, origin: Point, end: Point, color: Color, thick: f64) {
    let params = geometry::line_params(origin, end);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(params.x1, params.y1);
    ctx.line_to(params.x2, params.y2);
    let _ = ctx.stroke();
}

/// Render a rectangle outline.
fn render_rect(ctx: &cairo::Context, origin: Point, end: Point, color: Color, thick: f64) {
    let params = geometry::rect_params(origin, end);
    // Signed extents are normalized here so drags in any direction render
    // the same outline.
    let (x, y, w, h) = params.normalized();

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();
}

/// Render an ellipse using Cairo's arc with scaling.
fn render_ellipse(ctx: &cairo::Context, origin: Point, end: Point, color: Color, thick: f64) {
    let params = geometry::ellipse_params(origin, end);
    if params.rx == 0.0 || params.ry == 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);

    ctx.save().ok();
    ctx.translate(params.cx, params.cy);
    ctx.scale(params.rx, params.ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}
