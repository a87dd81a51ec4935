//! Polar layout helpers for radial patterns

use std::f64::consts::PI;

/// Angle in radians of spoke `index` out of `count` evenly spaced spokes
///
/// Evaluated as `2π / count * index` (divide first) so every layer that
/// shares a spoke index lands on the same angle.
#[inline]
pub fn spoke_angle(index: u32, count: u32) -> f64 {
    2.0 * PI / f64::from(count) * f64::from(index)
}

/// Point at `radius` from (cx, cy) along `angle`
///
/// Offsets truncate toward zero (not round, not floor): a point at -147.7
/// lands on -147.
#[inline]
pub fn polar_offset(cx: i32, cy: i32, radius: i32, angle: f64) -> (i32, i32) {
    let r = f64::from(radius);
    (cx + (r * angle.cos()) as i32, cy + (r * angle.sin()) as i32)
}
