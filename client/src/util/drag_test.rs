use super::*;

const DESK: Size = Size { width: 1280.0, height: 720.0 };

#[test]
fn drag_follows_pointer_delta() {
    let session = DragSession::start(150.0, 110.0, Position { x: 100.0, y: 100.0 });
    let pos = session.position_at(200.0, 90.0, WINDOW_SIZE, Some(DESK));
    assert_eq!(pos, Position { x: 150.0, y: 80.0 });
}

#[test]
fn drag_is_clamped_to_desktop_edges() {
    let session = DragSession::start(0.0, 0.0, Position { x: 100.0, y: 100.0 });

    let top_left = session.position_at(-500.0, -500.0, WINDOW_SIZE, Some(DESK));
    assert_eq!(top_left, Position { x: 0.0, y: 0.0 });

    let bottom_right = session.position_at(5000.0, 5000.0, WINDOW_SIZE, Some(DESK));
    assert_eq!(bottom_right, Position { x: 680.0, y: 320.0 });
}

#[test]
fn drag_without_bounds_is_unclamped() {
    let session = DragSession::start(0.0, 0.0, Position { x: 10.0, y: 10.0 });
    let pos = session.position_at(-50.0, -20.0, WINDOW_SIZE, None);
    assert_eq!(pos, Position { x: -40.0, y: -10.0 });
}

#[test]
fn oversized_window_is_pinned_top_left() {
    let small = Size { width: 400.0, height: 300.0 };
    let pos = clamp_to_bounds(Position { x: 50.0, y: 50.0 }, WINDOW_SIZE, small);
    assert_eq!(pos, Position { x: 0.0, y: 0.0 });
}
