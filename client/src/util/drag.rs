//! Pointer-drag math for desktop windows.
//!
//! Windows move by their header and stay inside the desktop surface, the
//! same way the bounds of the parent element constrain a draggable panel.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::state::desk::Position;

/// Default window width in CSS pixels.
pub const WINDOW_WIDTH: f64 = 600.0;
/// Default window height in CSS pixels.
pub const WINDOW_HEIGHT: f64 = 400.0;

/// Width/height of a rectangle in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Default window size.
pub const WINDOW_SIZE: Size = Size { width: WINDOW_WIDTH, height: WINDOW_HEIGHT };

/// An in-progress drag: where the pointer went down and where the window was.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub origin: Position,
}

impl DragSession {
    #[must_use]
    pub fn start(pointer_x: f64, pointer_y: f64, origin: Position) -> Self {
        Self { pointer_x, pointer_y, origin }
    }

    /// Window position for the current pointer, kept inside `bounds`.
    /// Without known bounds the window follows the pointer freely.
    #[must_use]
    pub fn position_at(&self, pointer_x: f64, pointer_y: f64, window: Size, bounds: Option<Size>) -> Position {
        let moved = Position {
            x: self.origin.x + (pointer_x - self.pointer_x),
            y: self.origin.y + (pointer_y - self.pointer_y),
        };
        match bounds {
            Some(bounds) => clamp_to_bounds(moved, window, bounds),
            None => moved,
        }
    }
}

/// Clamp a window's top-left corner so it stays within `bounds`. A window
/// larger than its bounds is pinned to the top-left edge.
#[must_use]
pub fn clamp_to_bounds(position: Position, window: Size, bounds: Size) -> Position {
    let max_x = (bounds.width - window.width).max(0.0);
    let max_y = (bounds.height - window.height).max(0.0);
    Position {
        x: position.x.clamp(0.0, max_x),
        y: position.y.clamp(0.0, max_y),
    }
}
