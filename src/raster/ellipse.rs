//! Two-region midpoint ellipse outline

use super::Surface;
use crate::color::Color;

/// Plot (cx + dx, cy + dy) when it lands in `i32` space; anything past that
/// is off every canvas
fn plot_offset<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    dx: i64,
    dy: i64,
    color: Color,
) {
    let x = i32::try_from(i64::from(cx) + dx);
    let y = i32::try_from(i64::from(cy) + dy);
    if let (Ok(x), Ok(y)) = (x, y) {
        surface.plot(x, y, color);
    }
}

/// Draw an axis-aligned ellipse outline centered on (cx, cy)
///
/// Region 1 walks x outward from the top of the ellipse while the slope
/// magnitude is below 1, region 2 walks y down to the major axis. Each
/// step plots the four mirrored points. `rx == 0` or `ry == 0` collapses to
/// the segment between the extreme points; negative radii plot nothing.
///
/// Decision terms grow with rx² * ry², so they are kept in `i128`; every
/// non-negative `i32` radius pair is exact.
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    rx: i32,
    ry: i32,
    color: Color,
) {
    if rx < 0 || ry < 0 {
        return;
    }
    if rx == 0 || ry == 0 {
        let reach = i64::from(rx.max(ry));
        for t in -reach..=reach {
            let (dx, dy) = if ry == 0 { (t, 0) } else { (0, t) };
            plot_offset(surface, cx, cy, dx, dy, color);
        }
        return;
    }

    let mut plot4 = |x: i128, y: i128| {
        // |x| <= rx and |y| <= ry, so both fit in i64
        let (x, y) = (x as i64, y as i64);
        plot_offset(surface, cx, cy, x, y, color);
        plot_offset(surface, cx, cy, -x, y, color);
        plot_offset(surface, cx, cy, x, -y, color);
        plot_offset(surface, cx, cy, -x, -y, color);
    };

    let rx = i128::from(rx);
    let ry = i128::from(ry);
    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let two_rx_sq = 2 * rx_sq;
    let two_ry_sq = 2 * ry_sq;

    let mut x = 0;
    let mut y = ry;
    // 2*ry^2*x and 2*rx^2*y; region 1 ends once they cross
    let mut px = 0;
    let mut py = two_rx_sq * y;

    // Region 1: ry^2 - rx^2*ry + rx^2/4, truncated toward zero
    let mut p = (4 * (ry_sq - rx_sq * ry) + rx_sq) / 4;
    while px < py {
        plot4(x, y);
        x += 1;
        px += two_ry_sq;
        if p < 0 {
            p += ry_sq + px;
        } else {
            y -= 1;
            py -= two_rx_sq;
            p += ry_sq + px - py;
        }
    }

    // Region 2 starts on the pixel region 1 stepped to:
    // ry^2*(x + 1/2)^2 + rx^2*(y - 1)^2 - rx^2*ry^2, truncated toward zero
    let (x2, y1) = (2 * x + 1, y - 1);
    let mut p = (ry_sq * x2 * x2 + 4 * rx_sq * y1 * y1 - 4 * rx_sq * ry_sq) / 4;
    let mut tip = x;
    while y >= 0 {
        plot4(x, y);
        tip = x;
        y -= 1;
        py -= two_rx_sq;
        if p > 0 {
            p += rx_sq - py;
        } else {
            x += 1;
            px += two_ry_sq;
            p += rx_sq - py + px;
        }
    }

    // Flat ellipses reach the major axis early; finish the run to the tip
    for x in tip + 1..=rx {
        plot4(x, 0);
    }
}
