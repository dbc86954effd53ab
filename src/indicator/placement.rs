//! Where the indicator is surfaced on screen.
//!
//! All coordinates are physical screen pixels; sizes and offsets given
//! in DIPs are scaled by the DPI scale of the chosen monitor.

use crate::model::constants::{CARET_GAP, CURSOR_GAP, WINDOW_OFFSET};
use crate::model::PlacementMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Rectangle with exclusive right/bottom edges, like Win32 `RECT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

/// One monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub bounds: Rect,
    /// Bounds minus the taskbar and docked app bars.
    pub work_area: Rect,
    /// DPI scale (1.0 = 96 DPI).
    pub scale: f64,
    pub primary: bool,
}

/// Positions the indicator can be anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchors {
    pub caret: Option<Rect>,
    pub cursor: Option<Point>,
}

/// Final window geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: Point,
    pub size: Size,
    pub scale: f64,
}

/// Screen containing `p`, else the primary screen, else the first one.
pub fn select_screen(screens: &[Screen], p: Option<Point>) -> Option<&Screen> {
    p.and_then(|p| screens.iter().find(|s| s.bounds.contains(p)))
        .or_else(|| screens.iter().find(|s| s.primary))
        .or_else(|| screens.first())
}

fn scaled(dip: f64, scale: f64) -> i32 {
    (dip * scale).round() as i32
}

/// Keep a window of `size` inside `area`. Left/top win when it does not fit.
fn clamp_into(origin: Point, size: Size, area: &Rect) -> Point {
    Point {
        x: origin.x.min(area.right - size.width).max(area.left),
        y: origin.y.min(area.bottom - size.height).max(area.top),
    }
}

enum Anchor {
    Caret(Rect),
    Cursor(Point),
    Corner,
}

/// Compute where a window of `size_dip` (width, height) is shown.
pub fn place(
    mode: PlacementMode,
    anchors: &Anchors,
    screens: &[Screen],
    size_dip: (f64, f64),
) -> Placement {
    let cursor = anchors.cursor.map(Anchor::Cursor);
    let anchor = match mode {
        PlacementMode::Caret => anchors.caret.map(Anchor::Caret).or(cursor),
        PlacementMode::Cursor => cursor,
        PlacementMode::Corner => None,
    }
    .unwrap_or(Anchor::Corner);

    let reference = match anchor {
        Anchor::Caret(r) => Some(Point::new(r.left, r.top)),
        Anchor::Cursor(p) => Some(p),
        Anchor::Corner => anchors.cursor,
    };

    let screen = select_screen(screens, reference);
    let scale = screen.map_or(1.0, |s| s.scale);
    let size = Size {
        width: scaled(size_dip.0, scale),
        height: scaled(size_dip.1, scale),
    };

    let origin = match (anchor, screen) {
        (Anchor::Caret(r), Some(s)) => {
            let gap = scaled(CARET_GAP, scale);
            let below = r.bottom + gap;
            // Flip above the caret rather than cover it at the bottom edge
            let y = if below + size.height > s.work_area.bottom {
                r.top - gap - size.height
            } else {
                below
            };
            Point::new(r.left, y)
        }
        (Anchor::Caret(r), None) => Point::new(r.left, r.bottom + scaled(CARET_GAP, scale)),
        (Anchor::Cursor(p), _) => {
            let gap = scaled(CURSOR_GAP, scale);
            Point::new(p.x + gap, p.y + gap)
        }
        (Anchor::Corner, Some(s)) => {
            let inset = scaled(WINDOW_OFFSET, scale);
            Point::new(
                s.work_area.right - size.width - inset,
                s.work_area.bottom - size.height - inset,
            )
        }
        (Anchor::Corner, None) => Point::default(),
    };

    let origin = match screen {
        Some(s) => clamp_into(origin, size, &s.work_area),
        None => origin,
    };

    Placement {
        origin,
        size,
        scale,
    }
}
