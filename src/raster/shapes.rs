//! Outlines composed from line primitives

use super::{line, Surface};
use crate::color::Color;

/// Rectangle outline with top-left (x0, y0) spanning `w` x `h`
/// Drawn as top, right, bottom, left; adjacent edges share their corner pixel.
pub fn rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x0: i32,
    y0: i32,
    w: i32,
    h: i32,
    color: Color,
) {
    let (x1, y1) = (x0 + w, y0 + h);
    line::draw(surface, x0, y0, x1, y0, color);
    line::draw(surface, x1, y0, x1, y1, color);
    line::draw(surface, x1, y1, x0, y1, color);
    line::draw(surface, x0, y1, x0, y0, color);
}

#[inline]
pub fn square<S: Surface + ?Sized>(surface: &mut S, x0: i32, y0: i32, side: i32, color: Color) {
    rectangle(surface, x0, y0, side, side, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PixelBuffer;
    use crate::raster::testing::{every_point_has_neighbour, Recorder};

    #[test]
    fn test_rectangle_is_closed_loop() {
        let mut rec = Recorder::new();
        rectangle(&mut rec, 2, 3, 6, 4, Color::GREEN);
        let pts = rec.points();

        for corner in [(2, 3), (8, 3), (8, 7), (2, 7)] {
            assert!(pts.contains(&corner), "missing corner {:?}", corner);
        }
        // perimeter of a 7x5 pixel box
        assert_eq!(pts.len(), 2 * 7 + 2 * 3);
        assert!(every_point_has_neighbour(&pts));
        assert!(pts.iter().all(|&(x, y)| x == 2 || x == 8 || y == 3 || y == 7));
        // four lines: 7 + 5 + 7 + 5 plots, the corners twice each
        assert_eq!(rec.plots.len(), 24);
    }

    #[test]
    fn test_square_matches_rectangle() {
        let mut a = Recorder::new();
        let mut b = Recorder::new();
        square(&mut a, -5, 1, 30, Color::GREEN);
        rectangle(&mut b, -5, 1, 30, 30, Color::GREEN);
        assert_eq!(a.plots, b.plots);
    }

    #[test]
    fn test_zero_size_square_is_a_point() {
        let mut rec = Recorder::new();
        square(&mut rec, 4, 4, 0, Color::GREEN);
        assert_eq!(rec.points().len(), 1);
    }

    #[test]
    fn test_square_on_buffer_edge() {
        let mut buffer = PixelBuffer::with_size(10, 10);
        buffer.square(-2, -2, 4, Color::GREEN);
        // only the right and bottom edges inside the canvas
        assert_eq!(buffer.get_pixel(2, 0), Some(Color::GREEN));
        assert_eq!(buffer.get_pixel(0, 2), Some(Color::GREEN));
        assert_eq!(buffer.get_pixel(1, 1), Some(Color::BLACK));
        assert_eq!(buffer.count_color(Color::GREEN), 5);
    }
}
