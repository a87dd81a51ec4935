//! Radial pattern composition
//!
//! [`Mandala`] turns a [`PatternConfig`] into an ordered list of [`Shape`]s:
//! concentric rings, then spokes, then satellite ellipses, then satellite
//! squares. Later shapes overwrite earlier ones where they cross.

pub mod config;

pub use config::{
    PatternConfig, RingConfig, SatelliteEllipseConfig, SatelliteSquareConfig, SpokeConfig,
};

use crate::color::Color;
use crate::display::PixelBuffer;
use crate::error::Error;
use crate::geometry::{polar_offset, spoke_angle};
use crate::raster::Surface;

/// One primitive draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
    Ellipse {
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        color: Color,
    },
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    Square {
        x: i32,
        y: i32,
        side: i32,
        color: Color,
    },
}

impl Shape {
    pub fn color(&self) -> Color {
        match *self {
            Shape::Circle { color, .. }
            | Shape::Line { color, .. }
            | Shape::Ellipse { color, .. }
            | Shape::Rect { color, .. }
            | Shape::Square { color, .. } => color,
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match *self {
            Shape::Circle { cx, cy, radius, color } => surface.circle(cx, cy, radius, color),
            Shape::Line { x0, y0, x1, y1, color } => surface.line(x0, y0, x1, y1, color),
            Shape::Ellipse { cx, cy, rx, ry, color } => surface.ellipse(cx, cy, rx, ry, color),
            Shape::Rect { x, y, w, h, color } => surface.rect(x, y, w, h, color),
            Shape::Square { x, y, side, color } => surface.square(x, y, side, color),
        }
    }
}

/// Validated layout for one canvas size
#[derive(Debug, Clone)]
pub struct Mandala {
    width: u32,
    height: u32,
    config: PatternConfig,
}

impl Mandala {
    /// Fails fast on a zero-sized canvas or an invalid config; nothing is
    /// ever half drawn.
    pub fn new(width: u32, height: u32, config: PatternConfig) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::config(format!(
                "canvas must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(Error::config(format!("canvas {}x{} is too large", width, height)));
        }
        config.validate()?;
        Ok(Self {
            width,
            height,
            config,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Canvas center, rounded down on odd sizes
    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Concentric circles, outermost first, hue sweeping with the ring index
    pub fn rings(&self) -> Vec<Shape> {
        let (cx, cy) = self.center();
        let rings = &self.config.rings;
        (0..rings.count)
            .map(|i| Shape::Circle {
                cx,
                cy,
                radius: self.config.ring_radius(i),
                color: Color::from_hsb(
                    i as f32 / rings.count as f32,
                    rings.saturation,
                    rings.brightness,
                ),
            })
            .collect()
    }

    /// Center-to-rim lines, colors alternating by index parity
    pub fn spokes(&self) -> Vec<Shape> {
        let (cx, cy) = self.center();
        let spokes = &self.config.spokes;
        let radius = self.config.base_radius as i32;
        (0..spokes.count)
            .map(|i| {
                let (x1, y1) = polar_offset(cx, cy, radius, spoke_angle(i, spokes.count));
                Shape::Line {
                    x0: cx,
                    y0: cy,
                    x1,
                    y1,
                    color: if i % 2 == 0 {
                        spokes.even_color
                    } else {
                        spokes.odd_color
                    },
                }
            })
            .collect()
    }

    /// Ellipses centered just outside the rim on every n-th spoke angle
    pub fn satellite_ellipses(&self) -> Vec<Shape> {
        let (cx, cy) = self.center();
        let count = self.config.spokes.count;
        let ellipses = &self.config.ellipses;
        let radius = (self.config.base_radius + ellipses.offset) as i32;
        (0..count)
            .step_by(ellipses.every as usize)
            .map(|i| {
                let (ex, ey) = polar_offset(cx, cy, radius, spoke_angle(i, count));
                Shape::Ellipse {
                    cx: ex,
                    cy: ey,
                    rx: ellipses.rx as i32,
                    ry: ellipses.ry as i32,
                    color: ellipses.color,
                }
            })
            .collect()
    }

    /// Squares centered further out on every n-th spoke angle
    ///
    /// The top-left corner is the truncated polar point minus half the side
    /// (integer halving); an odd side puts its extra pixel right and below.
    pub fn satellite_squares(&self) -> Vec<Shape> {
        let (cx, cy) = self.center();
        let count = self.config.spokes.count;
        let squares = &self.config.squares;
        let radius = (self.config.base_radius + squares.offset) as i32;
        let side = squares.side as i32;
        (0..count)
            .step_by(squares.every as usize)
            .map(|i| {
                let (sx, sy) = polar_offset(cx, cy, radius, spoke_angle(i, count));
                Shape::Square {
                    x: sx - side / 2,
                    y: sy - side / 2,
                    side,
                    color: squares.color,
                }
            })
            .collect()
    }

    /// Every shape in draw order
    pub fn shapes(&self) -> Vec<Shape> {
        let rings = self.rings();
        let spokes = self.spokes();
        let ellipses = self.satellite_ellipses();
        let squares = self.satellite_squares();
        log::debug!(
            "layout: {} rings, {} spokes, {} ellipses, {} squares",
            rings.len(),
            spokes.len(),
            ellipses.len(),
            squares.len()
        );

        let mut shapes =
            Vec::with_capacity(rings.len() + spokes.len() + ellipses.len() + squares.len());
        shapes.extend(rings);
        shapes.extend(spokes);
        shapes.extend(ellipses);
        shapes.extend(squares);
        shapes
    }

    /// Draw the whole pattern onto an existing surface (no background fill)
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for shape in self.shapes() {
            shape.draw(surface);
        }
    }

    /// Fresh buffer: background fill, then every shape
    pub fn render(&self) -> PixelBuffer {
        let mut buffer = PixelBuffer::with_size(self.width, self.height);
        buffer.fill(self.config.background);
        self.draw(&mut buffer);
        log::debug!("rendered {}x{} mandala", self.width, self.height);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::testing::Recorder;

    fn reference() -> Mandala {
        Mandala::new(800, 800, PatternConfig::default()).unwrap()
    }

    #[test_log::test]
    fn test_outer_ring_is_base_radius_at_center() {
        let mandala = reference();
        assert_eq!(mandala.center(), (400, 400));
        let rings = mandala.rings();
        assert_eq!(rings.len(), 10);
        assert_eq!(
            rings[0],
            Shape::Circle {
                cx: 400,
                cy: 400,
                radius: 150,
                color: Color::rgb(204, 41, 41),
            }
        );
        assert!(matches!(rings[9], Shape::Circle { radius: 15, .. }));
        assert_eq!(mandala.shapes()[0], rings[0]);
    }

    #[test_log::test]
    fn test_spoke_endpoints_truncate() {
        let spokes = reference().spokes();
        assert_eq!(spokes.len(), 36);
        assert_eq!(
            spokes[0],
            Shape::Line {
                x0: 400,
                y0: 400,
                x1: 550,
                y1: 400,
                color: Color::RED,
            }
        );
        assert!(matches!(spokes[1], Shape::Line { x1: 547, y1: 426, .. }));
        assert!(matches!(spokes[9], Shape::Line { x1: 400, y1: 550, .. }));
        // 190°: -147.7 and -26.05 truncate toward zero
        assert!(matches!(spokes[19], Shape::Line { x1: 253, y1: 374, .. }));
    }

    #[test_log::test]
    fn test_spoke_colors_alternate() {
        let spokes = reference().spokes();
        assert_eq!(spokes[0].color(), spokes[2].color());
        assert_ne!(spokes[0].color(), spokes[1].color());
        assert_eq!(spokes[1].color(), Color::BLUE);
        assert_eq!(spokes[35].color(), Color::BLUE);
    }

    #[test_log::test]
    fn test_satellite_layout() {
        let mandala = reference();
        let ellipses = mandala.satellite_ellipses();
        assert_eq!(ellipses.len(), 12);
        assert_eq!(
            ellipses[0],
            Shape::Ellipse {
                cx: 580,
                cy: 400,
                rx: 20,
                ry: 40,
                color: Color::MAGENTA,
            }
        );
        // spoke 3: 180 * sin(30°) evaluates to 89.999..., truncated to 89
        assert!(matches!(ellipses[1], Shape::Ellipse { cx: 555, cy: 489, .. }));

        let squares = mandala.satellite_squares();
        assert_eq!(squares.len(), 9);
        assert_eq!(
            squares[0],
            Shape::Square {
                x: 595,
                y: 385,
                side: 30,
                color: Color::GREEN,
            }
        );
        // spoke 20 (200°): (-197.3, -71.8) -> (-197, -71), then minus 15
        assert!(matches!(squares[5], Shape::Square { x: 188, y: 314, .. }));
    }

    #[test_log::test]
    fn test_shapes_in_layer_order() {
        let shapes = reference().shapes();
        assert_eq!(shapes.len(), 10 + 36 + 12 + 9);
        assert!(matches!(shapes[9], Shape::Circle { .. }));
        assert!(matches!(shapes[10], Shape::Line { .. }));
        assert!(matches!(shapes[46], Shape::Ellipse { .. }));
        assert!(matches!(shapes[58], Shape::Square { .. }));
    }

    #[test_log::test]
    fn test_render_reference_pixels() {
        let mandala = reference();
        let buffer = mandala.render();
        assert_eq!((buffer.width(), buffer.height()), (800, 800));
        assert_eq!(buffer.get_pixel(0, 0), Some(Color::WHITE));
        // spoke 0 is drawn after ring 0 and wins the shared pixel
        assert_eq!(buffer.get_pixel(550, 400), Some(Color::RED));
        // every spoke starts at the center; the last one is odd
        assert_eq!(buffer.get_pixel(400, 400), Some(Color::BLUE));
        assert_eq!(buffer.get_pixel(580, 360), Some(Color::MAGENTA));
        assert_eq!(buffer.get_pixel(560, 400), Some(Color::MAGENTA));
        assert_eq!(buffer.get_pixel(595, 385), Some(Color::GREEN));
        assert_eq!(buffer.get_pixel(625, 415), Some(Color::GREEN));
    }

    #[test_log::test]
    fn test_rings_alone_hit_their_radii() {
        let mandala = reference();
        let mut buffer = PixelBuffer::with_size(800, 800);
        for ring in mandala.rings() {
            ring.draw(&mut buffer);
        }
        for (i, ring) in mandala.rings().iter().enumerate() {
            let radius = 150 - 15 * i as i32;
            assert_eq!(buffer.get_pixel(400 + radius, 400), Some(ring.color()), "ring {}", i);
            assert_eq!(buffer.get_pixel(400, 400 - radius), Some(ring.color()), "ring {}", i);
        }
    }

    #[test_log::test]
    fn test_render_is_idempotent() {
        let mandala = reference();
        assert_eq!(mandala.render(), mandala.render());
        let again = Mandala::new(800, 800, PatternConfig::default()).unwrap();
        assert_eq!(mandala.render(), again.render());
    }

    #[test_log::test]
    fn test_draw_plots_every_shape() {
        let mandala = reference();
        let mut rec = Recorder::new();
        mandala.draw(&mut rec);
        assert!(rec.points().contains(&(550, 400)));
        // one extra recorder per shape gives the same total
        let total: usize = mandala
            .shapes()
            .iter()
            .map(|s| {
                let mut r = Recorder::new();
                s.draw(&mut r);
                r.plots.len()
            })
            .sum();
        assert_eq!(rec.plots.len(), total);
    }

    #[test_log::test]
    fn test_tiny_canvas_clips_without_panicking() {
        let mandala = Mandala::new(7, 5, PatternConfig::default()).unwrap();
        assert_eq!(mandala.center(), (3, 2));
        let buffer = mandala.render();
        assert_eq!((buffer.width(), buffer.height()), (7, 5));
        assert_ne!(buffer.count_color(Color::WHITE), 35);
    }

    #[test_log::test]
    fn test_huge_satellite_ellipses_render() {
        let mut config = PatternConfig::default();
        config.ellipses.rx = 60_000;
        config.ellipses.ry = 60_000;
        let mandala = Mandala::new(200, 200, config).unwrap();
        let buffer = mandala.render();
        assert_eq!((buffer.width(), buffer.height()), (200, 200));
        // every outline is far off canvas; the visible rings survive
        assert_eq!(buffer.count_color(Color::MAGENTA), 0);
        assert_ne!(buffer.count_color(Color::WHITE), 200 * 200);
    }

    #[test_log::test]
    fn test_rejects_bad_construction() {
        assert!(Mandala::new(0, 800, PatternConfig::default()).is_err());
        assert!(Mandala::new(800, 0, PatternConfig::default()).is_err());

        let mut config = PatternConfig::default();
        config.spokes.count = 0;
        assert!(matches!(Mandala::new(800, 800, config), Err(Error::InvalidConfig(_))));

        let mut config = PatternConfig::default();
        config.rings.step = 20;
        assert!(Mandala::new(800, 800, config).is_err());
    }

    #[test_log::test]
    fn test_custom_rect_shape_draws_outline() {
        let mut buffer = PixelBuffer::with_size(6, 6);
        Shape::Rect {
            x: 1,
            y: 1,
            w: 3,
            h: 2,
            color: Color::BLUE,
        }
        .draw(&mut buffer);
        assert_eq!(buffer.count_color(Color::BLUE), 10);
        assert_eq!(buffer.get_pixel(2, 2), Some(Color::BLACK));
    }
}
