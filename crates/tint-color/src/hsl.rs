// SPDX-License-Identifier: MIT
//
// HSL color support — cylindrical hue/saturation/lightness with hex
// composites.
//
// Single-character variable names (r, g, b, h, s, l, c, x, m, d) are the
// standard mathematical convention in color work.
#![allow(clippy::many_single_char_names)]
//
// HSL here is the classic display-referred cylinder over gamma-encoded
// sRGB, not a perceptual space: hue in degrees [0, 360), saturation and
// lightness in percent [0, 100]. The theme tool reasons about palettes in
// these terms (rotate a hue, pin a lightness band), so the conversions
// keep that scale end to end.

use std::fmt;

use crate::rgb::Rgb;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL cylindrical coordinates.
///
/// `h` is the hue angle in degrees, `s` and `l` are percentages.
/// [`Hsl::new`] normalizes on construction: hue wraps modulo 360,
/// saturation and lightness clamp to [0, 100]. [`Hsl::to_rgb`] applies the
/// same normalization, so values written directly to the fields cannot
/// escape the cylinder either.
#[derive(Debug, Clone, Copy)]
pub struct Hsl {
    /// Hue angle in degrees: 0 = red, 120 = green, 240 = blue.
    pub h: f32,
    /// Saturation percent: 0 (gray) to 100 (fully saturated).
    pub s: f32,
    /// Lightness percent: 0 (black) to 100 (white).
    pub l: f32,
}

impl Hsl {
    /// Create a normalized HSL value.
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Decompose an RGB triple using the standard max/min derivation.
    ///
    /// The hue of an achromatic color (max == min) is defined as 0.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f32::from(rgb.r) / 255.0;
        let g = f32::from(rgb.g) / 255.0;
        let b = f32::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Channel order is decided on the exact u8 values, so ties behave
        // identically on every platform.
        if rgb.r == rgb.g && rgb.g == rgb.b {
            return Self { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if rgb.r >= rgb.g && rgb.r >= rgb.b {
            ((g - b) / d).rem_euclid(6.0)
        } else if rgb.g >= rgb.b {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: h * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Re-encode to RGB using the chroma/midpoint formula.
    ///
    /// The hue is normalized modulo 360 before use; saturation and
    /// lightness are clamped to [0, 100]. Encoding the whole cylinder
    /// through one formula avoids the channel-by-channel branching that
    /// plagues piecewise HSL encoders.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::from_f32((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
    }

    /// Decompose a hex color (lenient parsing, see [`Rgb::parse_lenient`]).
    #[must_use]
    pub fn from_hex(s: &str) -> Self {
        Self::from_rgb(Rgb::parse_lenient(s))
    }

    /// Encode to canonical lowercase hex.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Return a copy rotated by `degrees` around the hue wheel.
    ///
    /// Saturation and lightness are carried over bit for bit.
    #[must_use]
    pub fn rotate_hue(self, degrees: f32) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Whether the lightness sits in the dark half of the cylinder.
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        self.l < 50.0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f32 = 1e-4;
        (self.s - other.s).abs() < EPS
            && (self.l - other.l).abs() < EPS
            && (self.s < EPS || other.s < EPS || hue_diff(self.h, other.h) < EPS)
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
