//! Tunable constants of the radial pattern
//!
//! Every field has a default, so a config file only needs to name what it
//! changes. Counts and sizes are unsigned: a negative value fails while the
//! JSON is parsed, before `validate` ever runs.

use crate::color::Color;
use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Radius of the outermost ring and length of every spoke
    pub base_radius: u32,
    /// Canvas color before anything is drawn
    pub background: Color,
    pub rings: RingConfig,
    pub spokes: SpokeConfig,
    pub ellipses: SatelliteEllipseConfig,
    pub squares: SatelliteSquareConfig,
}

/// Concentric circles shrinking inward from `base_radius`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub count: u32,
    /// Radius decrement per ring
    pub step: u32,
    pub saturation: f32,
    pub brightness: f32,
}

/// Lines from the center out to `base_radius`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpokeConfig {
    pub count: u32,
    pub even_color: Color,
    pub odd_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SatelliteEllipseConfig {
    /// Place one on every n-th spoke angle
    pub every: u32,
    /// Distance beyond `base_radius`
    pub offset: u32,
    pub rx: u32,
    pub ry: u32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SatelliteSquareConfig {
    pub every: u32,
    pub offset: u32,
    pub side: u32,
    pub color: Color,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            base_radius: 150,
            background: Color::WHITE,
            rings: RingConfig::default(),
            spokes: SpokeConfig::default(),
            ellipses: SatelliteEllipseConfig::default(),
            squares: SatelliteSquareConfig::default(),
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            count: 10,
            step: 15,
            saturation: 0.8,
            brightness: 0.8,
        }
    }
}

impl Default for SpokeConfig {
    fn default() -> Self {
        Self {
            count: 36,
            even_color: Color::RED,
            odd_color: Color::BLUE,
        }
    }
}

impl Default for SatelliteEllipseConfig {
    fn default() -> Self {
        Self {
            every: 3,
            offset: 30,
            rx: 20,
            ry: 40,
            color: Color::MAGENTA,
        }
    }
}

impl Default for SatelliteSquareConfig {
    fn default() -> Self {
        Self {
            every: 4,
            offset: 60,
            side: 30,
            color: Color::GREEN,
        }
    }
}

impl PatternConfig {
    /// Reject configurations that would draw garbage
    ///
    /// Rings are never clamped: if the innermost ring radius would be
    /// negative the whole config is refused.
    pub fn validate(&self) -> Result<(), Error> {
        // radii end up as i32 pixel math
        let limit = i32::MAX as u64 / 4;
        let too_big = |name: &str, v: u64| {
            if v > limit {
                Err(Error::config(format!("{name} {v} is too large")))
            } else {
                Ok(())
            }
        };

        if self.spokes.count == 0 {
            return Err(Error::config("spoke count must be at least 1"));
        }
        if self.ellipses.every == 0 {
            return Err(Error::config("satellite ellipse spacing must be at least 1"));
        }
        if self.squares.every == 0 {
            return Err(Error::config("satellite square spacing must be at least 1"));
        }

        let innermost = u64::from(self.rings.count.saturating_sub(1)) * u64::from(self.rings.step);
        if innermost > u64::from(self.base_radius) {
            return Err(Error::config(format!(
                "{} rings stepping by {} would shrink past radius 0 (base radius {})",
                self.rings.count, self.rings.step, self.base_radius
            )));
        }

        let hsb = [("saturation", self.rings.saturation), ("brightness", self.rings.brightness)];
        for (name, v) in hsb {
            if !(0.0..=1.0).contains(&v) {
                return Err(Error::config(format!("ring {name} {v} is outside 0..=1")));
            }
        }

        let radius = u64::from(self.base_radius);
        too_big("base radius", radius)?;
        let ellipse = &self.ellipses;
        too_big(
            "ellipse reach",
            radius + u64::from(ellipse.offset) + u64::from(ellipse.rx.max(ellipse.ry)),
        )?;
        let square = &self.squares;
        too_big("square reach", radius + u64::from(square.offset) + u64::from(square.side))?;
        Ok(())
    }

    /// Radius of ring `index`; only meaningful for a validated config
    pub fn ring_radius(&self, index: u32) -> i32 {
        (i64::from(self.base_radius) - i64::from(index) * i64::from(self.rings.step)) as i32
    }
}
