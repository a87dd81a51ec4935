//! Bresenham line

use super::Surface;
use crate::color::Color;

/// Draw a 1px line from (x0, y0) to (x1, y1), both endpoints inclusive
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    walk(x0, y0, x1, y1, |x, y| surface.plot(x, y, color));
}

/// The pixel path `draw` would plot, in stepping order
pub fn points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    walk(x0, y0, x1, y1, |x, y| out.push((x, y)));
    out
}

/// Step along the line, calling `visit` once per pixel
///
/// Endpoints are visited lexicographically smaller first. Bresenham breaks
/// error-term ties toward the starting point, so a fixed order is what keeps
/// (a -> b) and (b -> a) on the same pixels. Stepping runs in `i64` so any
/// pair of `i32` endpoints works; the visited pixels stay between them.
fn walk(x0: i32, y0: i32, x1: i32, y1: i32, mut visit: impl FnMut(i32, i32)) {
    let ((x, y), (x1, y1)) = if (x1, y1) < (x0, y0) {
        ((x1, y1), (x0, y0))
    } else {
        ((x0, y0), (x1, y1))
    };
    let (mut x, mut y) = (i64::from(x), i64::from(y));
    let (x1, y1) = (i64::from(x1), i64::from(y1));

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        visit(x as i32, y as i32);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
