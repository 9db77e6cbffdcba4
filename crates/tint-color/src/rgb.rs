// SPDX-License-Identifier: MIT
//
// RGB primitives — hex parsing and encoding for the theme engine.
//
// Single-character variable names (r, g, b, v) are the standard
// mathematical convention in color work.
#![allow(clippy::many_single_char_names)]
//
// Two parsing policies live side by side:
//
//   Rgb::parse          strict: Option, accepts an optional '#' plus
//                       exactly six hex digits and nothing else
//   Rgb::parse_lenient  per-group zero-fill: a malformed or missing
//                       2-digit group resolves to channel 0
//
// The lenient form is the conversion-path default: the theme tool treats a
// bad hex fragment as a zeroed channel, never as a hard error. The strict
// form backs validation, where malformed colors must not reach the store.

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color triple.
///
/// Channels are in [0, 255] by construction. The canonical textual form is
/// lowercase `#rrggbb`; parsing accepts either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create from integer channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from float channels on the 0–255 scale.
    ///
    /// Each channel is rounded to the nearest integer and clamped to
    /// [0, 255], so fractional and out-of-range inputs are safe.
    #[must_use]
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }

    /// Parse a hex color strictly.
    ///
    /// Accepts an optional leading `#` followed by exactly six hex digits,
    /// either case. Returns `None` for any other shape.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        let bytes = s.as_bytes();
        let r = parse_hex_byte(&bytes[0..2])?;
        let g = parse_hex_byte(&bytes[2..4])?;
        let b = parse_hex_byte(&bytes[4..6])?;
        Some(Self { r, g, b })
    }

    /// Parse a hex color leniently.
    ///
    /// Each 2-digit group is parsed independently; a group that is missing
    /// or fails to parse degrades to channel value 0 instead of failing.
    /// `"#zzff00"` is therefore `(0, 255, 0)` and `"#f"` is black.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();
        let group = |at: usize| bytes.get(at..at + 2).and_then(parse_hex_byte).unwrap_or(0);
        Self {
            r: group(0),
            g: group(2),
            b: group(4),
        }
    }

    /// The channel triple.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Encode as canonical lowercase hex (`#rrggbb`).
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ─── Channel helpers ─────────────────────────────────────────────────────────

/// Parse one hex digit (either case) to its value.
#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a 2-digit hex group.
#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Round and clamp a 0–255-scale float to a u8 channel.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f32) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── WCAG linearization ──────────────────────────────────────────────────────

/// Linearize one sRGB channel (0.0–1.0) for relative-luminance math.
///
/// Uses the WCAG 2.x piecewise curve: values at or below 0.03928 scale
/// linearly by 1/12.92, larger values gamma-expand via
/// `((v + 0.055) / 1.055)^2.4`.
#[inline]
#[must_use]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── Strict parsing ──────────────────────────────────────────────

    #[test]
    fn parse_with_hash() {
        assert_eq!(Rgb::parse("#0ea5e9"), Some(Rgb::new(14, 165, 233)));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(Rgb::parse("0ea5e9"), Some(Rgb::new(14, 165, 233)));
    }

    #[test]
    fn parse_uppercase() {
        assert_eq!(Rgb::parse("#0EA5E9"), Some(Rgb::new(14, 165, 233)));
    }

    #[test]
    fn parse_rejects_short() {
        assert!(Rgb::parse("#fff").is_none());
        assert!(Rgb::parse("#0ea5e").is_none());
        assert!(Rgb::parse("").is_none());
    }

    #[test]
    fn parse_rejects_long() {
        assert!(Rgb::parse("#0ea5e9ff").is_none());
    }

    #[test]
    fn parse_rejects_bad_digit() {
        assert!(Rgb::parse("#0ea5ez").is_none());
        assert!(Rgb::parse("#zzff00").is_none());
    }

    // ── Lenient parsing ─────────────────────────────────────────────

    #[test]
    fn lenient_well_formed() {
        assert_eq!(Rgb::parse_lenient("#0ea5e9"), Rgb::new(14, 165, 233));
    }

    #[test]
    fn lenient_uppercase() {
        assert_eq!(Rgb::parse_lenient("#0EA5E9"), Rgb::new(14, 165, 233));
    }

    #[test]
    fn lenient_bad_group_is_zero() {
        assert_eq!(Rgb::parse_lenient("#zzff00"), Rgb::new(0, 255, 0));
    }

    #[test]
    fn lenient_short_input() {
        assert_eq!(Rgb::parse_lenient("#f"), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::parse_lenient(""), Rgb::new(0, 0, 0));
    }

    #[test]
    fn lenient_garbage_is_black() {
        assert_eq!(Rgb::parse_lenient("not-a-color"), Rgb::new(0, 0, 0));
    }

    #[test]
    fn lenient_trailing_bytes_ignored() {
        // Only the first three groups matter.
        assert_eq!(Rgb::parse_lenient("#0ea5e9ff"), Rgb::new(14, 165, 233));
    }

    // ── Encoding and round-trips ────────────────────────────────────

    #[test]
    fn to_hex_is_lowercase_padded() {
        assert_eq!(Rgb::new(14, 165, 233).to_hex(), "#0ea5e9");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
    }

    #[test]
    fn hex_roundtrip_is_exact() {
        for hex in ["#000000", "#ffffff", "#0ea5e9", "#ff0080", "#12ab9c"] {
            assert_eq!(Rgb::parse_lenient(hex).to_hex(), hex);
        }
    }

    #[test]
    fn hex_roundtrip_sampled_channels() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let hex = Rgb::new(r, g, b).to_hex();
                    assert_eq!(Rgb::parse_lenient(&hex), Rgb::new(r, g, b));
                }
            }
        }
    }

    #[test]
    fn from_f32_rounds_and_clamps() {
        assert_eq!(Rgb::from_f32(-5.0, 300.0, 127.5), Rgb::new(0, 255, 128));
        assert_eq!(Rgb::from_f32(127.4, 0.6, 254.5), Rgb::new(127, 1, 255));
    }

    #[test]
    fn display_matches_hex() {
        assert_eq!(Rgb::new(255, 0, 128).to_string(), "#ff0080");
    }

    // ── Linearization ───────────────────────────────────────────────

    #[test]
    fn linear_endpoints() {
        assert!((srgb_to_linear(0.0)).abs() < 1e-12);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linear_knee_is_continuous() {
        let below = srgb_to_linear(0.03928);
        let above = srgb_to_linear(0.03929);
        assert!(below < above, "curve must stay monotonic at the knee");
        assert!((below - 0.03928 / 12.92).abs() < 1e-12);
    }

    #[test]
    fn linear_mid_gray() {
        // sRGB 0.5 linearizes to ~0.2140.
        let mid = srgb_to_linear(0.5);
        assert!((mid - 0.2140).abs() < 0.001, "mid gray: {mid}");
    }
}
