//! Vertical two-color gradients
//!
//! A gradient is parameterized by a single position `t` in `[0, 1)`, where row
//! `y` of an image with `height` rows sits at `t = y / height`. The first row is
//! always exactly the start color and the last row approaches, but never
//! reaches, the end color.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Cyan `#00E5FF`
    pub const CYAN: Color = Color::new(0, 229, 255);
    /// Magenta `#FF00FF`
    pub const MAGENTA: Color = Color::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parses any CSS color (`#00e5ff`, `magenta`, `rgb(0, 229, 255)`).
/// The alpha component, if any, is ignored.
impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let srgb = css_color::Srgb::from_str(s.trim())
            .map_err(|_| anyhow!("Invalid color: {s:?} (expected a CSS color such as #00E5FF)"))?;

        Ok(Color::new(
            unit_to_byte(srgb.red),
            unit_to_byte(srgb.green),
            unit_to_byte(srgb.blue),
        ))
    }
}

fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The two endpoint colors of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub start: Color,
    pub end: Color,
}

impl GradientSpec {
    pub fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Color of every pixel in row `y` of an image `height` rows tall
    pub fn color_for_row(&self, y: u32, height: u32) -> Color {
        color_at(self.start, self.end, row_t(y, height))
    }

    /// One color per row, top to bottom. Empty when `height` is zero.
    pub fn row_colors(&self, height: u32) -> Vec<Color> {
        (0..height).map(|y| self.color_for_row(y, height)).collect()
    }
}

/// Cyan to magenta
impl Default for GradientSpec {
    fn default() -> Self {
        Self::new(Color::CYAN, Color::MAGENTA)
    }
}

/// Position of row `y` along the gradient.
pub fn row_t(y: u32, height: u32) -> f64 {
    if height == 0 {
        return 0.0;
    }
    f64::from(y) / f64::from(height)
}

/// Linear interpolation between `start` and `end` at position `t`.
///
/// Each channel is `start + round((end - start) * t)`, rounding half away from
/// zero, so `t = 0.5` between 0 and 255 gives 128 and between 229 and 0 gives 114.
pub fn color_at(start: Color, end: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let [r, g, b] = [
        (start.r, end.r),
        (start.g, end.g),
        (start.b, end.b),
    ]
    .map(|(from, to)| lerp_channel(from, to, t));

    Color::new(r, g, b)
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let delta = (f64::from(to) - f64::from(from)) * t;
    (f64::from(from) + delta.round()).clamp(0.0, 255.0) as u8
}
