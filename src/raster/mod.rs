//! Integer rasterization primitives
//!
//! Every algorithm writes through [`Surface::plot`] and never reads back.
//! Coordinates may fall outside the target; clipping is the surface's job.

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod shapes;

use crate::color::Color;

/// Anything primitives can be drawn onto
pub trait Surface {
    /// Write one pixel. Must silently ignore coordinates outside the surface.
    fn plot(&mut self, x: i32, y: i32, color: Color);

    /// Midpoint circle outline
    fn circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        circle::draw(self, cx, cy, radius, color);
    }

    /// Bresenham line, both endpoints inclusive
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        line::draw(self, x0, y0, x1, y1, color);
    }

    /// Two-region midpoint ellipse outline
    fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Color) {
        ellipse::draw(self, cx, cy, rx, ry, color);
    }

    /// Rectangle outline from four lines
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        shapes::rectangle(self, x, y, w, h, color);
    }

    fn square(&mut self, x: i32, y: i32, side: i32, color: Color) {
        shapes::square(self, x, y, side, color);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Surface;
    use crate::color::Color;
    use std::collections::HashSet;

    /// Records every plot call in order, including duplicates and
    /// off-canvas coordinates
    #[derive(Default)]
    pub struct Recorder {
        pub plots: Vec<(i32, i32)>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn points(&self) -> HashSet<(i32, i32)> {
            self.plots.iter().copied().collect()
        }
    }

    impl Surface for Recorder {
        fn plot(&mut self, x: i32, y: i32, _color: Color) {
            self.plots.push((x, y));
        }
    }

    /// True if every point has an 8-connected neighbour in the set
    pub fn every_point_has_neighbour(points: &HashSet<(i32, i32)>) -> bool {
        points.iter().all(|&(x, y)| {
            (-1..=1)
                .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
                .filter(|&d| d != (0, 0))
                .any(|(dx, dy)| points.contains(&(x + dx, y + dy)))
        })
    }
}
