//! End-to-end checks: gestures feed the history, and the repaint engine
//! replays the log deterministically onto a Cairo image surface.

use inkboard::draw::color::{BLUE, RED};
use inkboard::draw::{render, Point, Shape};
use inkboard::{History, InputState, MouseButton, Tool};

const SIZE: i32 = 64;

fn surface_pair() -> (cairo::ImageSurface, cairo::Context) {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, SIZE, SIZE).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();
    (surface, ctx)
}

// `ImageSurface::data` needs exclusive access, which the live context holds;
// snapshot through a copy instead.
fn snapshot(surface: &cairo::ImageSurface) -> Vec<u8> {
    let mut copy =
        cairo::ImageSurface::create(cairo::Format::ARgb32, surface.width(), surface.height())
            .unwrap();
    {
        let ctx = cairo::Context::new(&copy).unwrap();
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_surface(surface, 0.0, 0.0).unwrap();
        ctx.paint().unwrap();
    }
    copy.flush();
    copy.data().unwrap().to_vec()
}

fn pixel(data: &[u8], x: usize, y: usize) -> [u8; 4] {
    let offset = (y * SIZE as usize + x) * 4;
    data[offset..offset + 4].try_into().unwrap()
}

fn rect(tag: f64) -> Shape {
    Shape::Rectangle {
        origin: Point::new(tag, tag),
        end: Point::new(tag + 20.0, tag + 20.0),
        color: RED,
        thick: 1.0,
    }
}

#[test]
fn committed_rectangle_replays_as_red_outline() {
    let mut state = InputState::default();
    state.select_tool(Tool::Rectangle);
    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(25.0, 30.0);
    state.on_mouse_release(MouseButton::Left, 50.0, 40.0);
    assert_eq!(state.history.len(), 1);

    let (surface, ctx) = surface_pair();
    render::repaint(&ctx, state.history.shapes());
    let data = snapshot(&surface);

    // ARGB32 stores premultiplied BGRA on little-endian: outline pixels are
    // red with no green/blue, the interior stays untouched.
    let top_edge = pixel(&data, 30, 10);
    assert!(top_edge[3] > 0, "top edge painted");
    assert!(top_edge[2] > 0, "red channel set");
    assert_eq!(top_edge[1], 0, "no green");
    assert_eq!(top_edge[0], 0, "no blue");
    assert_eq!(pixel(&data, 30, 25), [0, 0, 0, 0], "interior empty");
}

#[test]
fn pencil_stroke_replays_connected_segments() {
    let shape = Shape::Pencil {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ],
        color: BLUE,
        thick: 2.0,
    };

    let (surface, ctx) = surface_pair();
    render::repaint(&ctx, std::slice::from_ref(&shape));
    let data = snapshot(&surface);

    // Midpoints of the two segments (0,0)-(5,5) and (5,5)-(10,0).
    assert!(pixel(&data, 2, 2)[3] > 0, "first segment painted");
    assert!(pixel(&data, 7, 2)[3] > 0, "second segment painted");
    assert_eq!(pixel(&data, 40, 40), [0, 0, 0, 0], "far pixel untouched");
}

#[test]
fn undo_repaint_removes_the_shape_from_the_surface() {
    let mut history = History::new();
    history.commit(rect(10.0)).unwrap();
    let (only_first, first_ctx) = surface_pair();
    render::repaint(&first_ctx, history.shapes());
    let baseline = snapshot(&only_first);

    // An overlapping second shape, then undo: the full replay must produce
    // exactly the single-shape surface again.
    history.commit(rect(18.0)).unwrap();
    let (surface, ctx) = surface_pair();
    render::repaint(&ctx, history.shapes());
    assert_ne!(snapshot(&surface), baseline);

    assert!(history.undo());
    render::repaint(&ctx, history.shapes());
    assert_eq!(snapshot(&surface), baseline);
}

#[test]
fn redo_repaint_restores_the_undone_shape() {
    let mut history = History::new();
    history.commit(rect(10.0)).unwrap();
    history.commit(rect(18.0)).unwrap();

    let (surface, ctx) = surface_pair();
    render::repaint(&ctx, history.shapes());
    let both = snapshot(&surface);

    assert!(history.undo());
    assert!(history.redo());
    render::repaint(&ctx, history.shapes());
    assert_eq!(snapshot(&surface), both);
}

#[test]
fn clear_repaint_yields_a_blank_surface() {
    let mut state = InputState::default();
    state.select_tool(Tool::Line);
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_release(MouseButton::Left, 60.0, 60.0);

    let (surface, ctx) = surface_pair();
    render::repaint(&ctx, state.history.shapes());
    assert!(snapshot(&surface).iter().any(|&b| b != 0));

    state.clear_canvas();
    render::repaint(&ctx, state.history.shapes());
    assert!(snapshot(&surface).iter().all(|&b| b == 0));
}

#[test]
fn gesture_after_undo_drops_the_redo_branch() {
    let mut state = InputState::default();
    state.select_tool(Tool::Rectangle);
    state.on_mouse_press(MouseButton::Left, 5.0, 5.0);
    state.on_mouse_release(MouseButton::Left, 15.0, 15.0);
    assert!(state.undo());
    assert!(state.history.can_redo());

    state.select_tool(Tool::Ellipse);
    state.on_mouse_press(MouseButton::Left, 20.0, 20.0);
    state.on_mouse_release(MouseButton::Left, 40.0, 50.0);

    // No ghost redo of the undone rectangle.
    assert!(!state.history.can_redo());
    assert_eq!(state.history.len(), 1);
    assert!(matches!(state.history.shapes()[0], Shape::Ellipse { .. }));
}
