//! Color-wheel harmonies derived from a base color.
//!
//! Every harmony is a fixed set of hue rotations applied in HSL space.
//! Saturation and lightness pass through untouched, so the derived
//! colors keep the base color's weight and only move around the wheel.

use tint_color::Hsl;

/// The four supported harmony families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// One color directly opposite the base (+180).
    Complementary,
    /// Two near neighbors (+30 and -30).
    Analogous,
    /// Two colors at thirds of the wheel (+120 and +240).
    Triadic,
    /// The two neighbors of the complement (+150 and +210).
    SplitComplementary,
}

impl HarmonyKind {
    /// Hue offsets in degrees, applied to the base hue in order.
    #[must_use]
    pub const fn rotations(self) -> &'static [f32] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[30.0, -30.0],
            Self::Triadic => &[120.0, 240.0],
            Self::SplitComplementary => &[150.0, 210.0],
        }
    }

    /// Derive the harmony partners of `base` in HSL space.
    #[must_use]
    pub fn derive_hsl(self, base: Hsl) -> Vec<Hsl> {
        self.rotations()
            .iter()
            .map(|&degrees| base.rotate_hue(degrees))
            .collect()
    }

    /// Derive the harmony partners of a hex color, as hex.
    #[must_use]
    pub fn derive(self, base: &str) -> Vec<String> {
        self.derive_hsl(Hsl::from_hex(base))
            .into_iter()
            .map(Hsl::to_hex)
            .collect()
    }

    /// The user-facing name of this harmony.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// Parse a harmony name as printed by [`Self::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "complementary" => Some(Self::Complementary),
            "analogous" => Some(Self::Analogous),
            "triadic" => Some(Self::Triadic),
            "split-complementary" => Some(Self::SplitComplementary),
            _ => None,
        }
    }

    /// All harmony kinds, in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::SplitComplementary,
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
