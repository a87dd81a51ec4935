//! Midpoint circle outline

use super::Surface;
use crate::color::Color;

/// Draw a 1px circle outline centered on (cx, cy)
///
/// Computes one octant with an integer decision variable and mirrors it
/// into the other seven. Radius 0 plots the center only; a negative radius
/// plots nothing.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut decision = 1 - radius;

    while y <= x {
        surface.plot(cx + x, cy + y, color);
        surface.plot(cx - x, cy + y, color);
        surface.plot(cx + x, cy - y, color);
        surface.plot(cx - x, cy - y, color);
        surface.plot(cx + y, cy + x, color);
        surface.plot(cx - y, cy + x, color);
        surface.plot(cx + y, cy - x, color);
        surface.plot(cx - y, cy - x, color);

        y += 1;
        if decision <= 0 {
            decision += 2 * y + 1;
        } else {
            x -= 1;
            decision += 2 * (y - x) + 1;
        }
    }
}
