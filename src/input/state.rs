//! Drawing state machine and input state management.

use crate::draw::{Color, Point, Shape, color};
use crate::history::History;
use crate::input::{events::MouseButton, tool::Tool};
use log::warn;

/// Current drawing mode state machine.
///
/// The `Drawing` payload is the drag session: it is created on press,
/// overwritten (never merged) by each new press, and discarded on cancel.
/// Only its result - a finished [`Shape`] - ever reaches the history.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Actively drawing a shape (mouse button held down)
    Drawing {
        /// Which tool is being used for this shape
        tool: Tool,
        /// Pointer position where the drag started
        origin: Point,
        /// Accumulated points for pencil drawing
        points: Vec<Point>,
    },
}

/// Main input state containing all drawing session state.
///
/// Holds the shape history, the current drawing parameters (tool, color,
/// thickness), and the drag state machine. It translates pointer events
/// from the presentation layer into at most one committed shape per
/// gesture, and raises `needs_redraw` whenever the surface must be
/// repainted.
pub struct InputState {
    /// Committed shape log with undo/redo
    pub history: History,
    /// Currently selected drawing tool
    pub selected_tool: Tool,
    /// Current drawing color (fixed onto each shape at commit time)
    pub current_color: Color,
    /// Current stroke thickness in pixels
    pub current_thickness: f64,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(color::RED, 1.0)
    }
}

impl InputState {
    /// Creates a new input state with an empty history.
    pub fn new(color: Color, thickness: f64) -> Self {
        Self {
            history: History::new(),
            selected_tool: Tool::default(),
            current_color: color,
            current_thickness: thickness,
            state: DrawingState::Idle,
            needs_redraw: true,
        }
    }

    /// Selects the tool used by the next drag gesture.
    pub fn select_tool(&mut self, tool: Tool) {
        self.selected_tool = tool;
    }

    /// Updates the current color (from the picker).
    ///
    /// Already-committed shapes are unaffected; each record owns the color
    /// it was drawn with.
    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.current_color = color.into();
    }

    /// Processes a mouse button press event.
    ///
    /// Left press while idle starts a drag with the selected tool. Right
    /// press cancels the active drag, discarding it without a commit.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        match button {
            MouseButton::Left => {
                if matches!(self.state, DrawingState::Idle) {
                    let origin = Point::new(x, y);
                    self.state = DrawingState::Drawing {
                        tool: self.selected_tool,
                        origin,
                        points: vec![origin],
                    };
                    self.needs_redraw = true;
                }
            }
            MouseButton::Right => {
                if !matches!(self.state, DrawingState::Idle) {
                    self.state = DrawingState::Idle;
                    self.needs_redraw = true;
                }
            }
            _ => {}
        }
    }

    /// Processes mouse motion (dragging) events.
    ///
    /// Ignored unless a drag is active. The pencil accumulates every
    /// sampled position; other tools only need the final position, which
    /// arrives with the release event.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        if let DrawingState::Drawing { tool, points, .. } = &mut self.state {
            if *tool == Tool::Pencil {
                points.push(Point::new(x, y));
            }
            self.needs_redraw = true;
        }
    }

    /// Processes mouse button release events.
    ///
    /// A left release during a drag finalises the shape from the drag
    /// origin and the release position, commits it, and returns to idle.
    /// A zero-length drag still commits a valid zero-size shape.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        if let DrawingState::Drawing {
            tool,
            origin,
            ref points,
        } = self.state
        {
            let shape = self.assemble_shape(tool, origin, points, Point::new(x, y));
            if let Err(err) = self.history.commit(shape) {
                warn!("discarding shape at commit: {err}");
            }
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }

    /// The in-progress shape at the given cursor position, as plain data.
    ///
    /// This is the live preview ("fake drawing"): any rendering backend can
    /// stroke it the same way it strokes committed shapes. Returns `None`
    /// when no drag is active.
    pub fn provisional_shape(&self, cursor: Point) -> Option<Shape> {
        match self.state {
            DrawingState::Drawing {
                tool,
                origin,
                ref points,
            } => Some(self.assemble_shape(tool, origin, points, cursor)),
            DrawingState::Idle => None,
        }
    }

    fn assemble_shape(&self, tool: Tool, origin: Point, points: &[Point], end: Point) -> Shape {
        match tool {
            Tool::Pencil => Shape::Pencil {
                points: points.to_vec(),
                color: self.current_color,
                thick: self.current_thickness,
            },
            Tool::Rectangle => Shape::Rectangle {
                origin,
                end,
                color: self.current_color,
                thick: self.current_thickness,
            },
            Tool::Ellipse => Shape::Ellipse {
                origin,
                end,
                color: self.current_color,
                thick: self.current_thickness,
            },
            Tool::Line => Shape::Line {
                origin,
                end,
                color: self.current_color,
                thick: self.current_thickness,
            },
        }
    }

    /// Undoes the most recent commit; returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Redoes the most recently undone shape; returns whether anything
    /// changed.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Clears the canvas, dropping the whole timeline.
    pub fn clear_canvas(&mut self) {
        self.history.clear();
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }
}
