//! 8-bit RGB colour and linear interpolation between two endpoints.

use std::fmt;

/// A display colour for one seat.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#e0e0e0`, used when a seat has no noise value.
    pub const NEUTRAL: Rgb = Rgb::new(224, 224, 224);
    /// `#f97316`, loud end of the noise ramp.
    pub const ORANGE: Rgb = Rgb::new(249, 115, 22);
    /// `#22c55e`, quiet end of the noise ramp.
    pub const GREEN: Rgb = Rgb::new(34, 197, 94);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Interpolate from `self` (t = 0) to `other` (t = 1), rounding each
    /// channel to the nearest integer.  `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    /// CSS functional form, `rgb(r,g,b)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
