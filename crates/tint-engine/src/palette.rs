//! Seeded palette synthesis — four role tokens from one draw sequence.
//!
//! A palette is a coherent set of role colors (background, text, accent,
//! secondary surface) sampled in HSL space. All roles share a single base
//! hue except the accent, which is offset around the wheel, so the result
//! reads as one scheme rather than four unrelated colors.
//!
//! Generation is fully determined by the seed. The same seed always
//! produces the same four hex strings, which makes palettes shareable as
//! plain numbers and keeps the sampling testable.

use std::time::{SystemTime, UNIX_EPOCH};

use tint_color::Hsl;

// ---------------------------------------------------------------------------
// Xorshift32 — the seedable PRNG behind generate()
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG for reproducible palette draws.
struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    fn new(seed: u32) -> Self {
        // Xorshift has a fixed point at zero; floor the seed to 1.
        Self { state: seed.max(1) }
    }

    const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform f32 in [lo, hi].
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        let t = f64::from(self.next()) / f64::from(u32::MAX);
        (hi - lo).mul_add(t as f32, lo)
    }

    /// Pick one element of `slice` at random.
    fn pick<'a, T>(&mut self, slice: &'a [T]) -> &'a T {
        let idx = (self.next() as usize) % slice.len();
        &slice[idx]
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The four role tokens of a theme, as canonical lowercase hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Primary surface behind everything else.
    pub bg: String,
    /// Body text on the primary surface.
    pub text: String,
    /// Interactive highlights (links, buttons, focus rings).
    pub accent: String,
    /// Panels and cards one step off the primary surface.
    pub secondary: String,
}

impl Palette {
    /// Build a palette from four hex tokens. No validation happens here;
    /// callers that need well-formed tokens validate on the store's save
    /// path or synthesize via [`Self::generate`].
    #[must_use]
    pub fn new(
        bg: impl Into<String>,
        text: impl Into<String>,
        accent: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            bg: bg.into(),
            text: text.into(),
            accent: accent.into(),
            secondary: secondary.into(),
        }
    }

    /// Synthesize a palette from a seed.
    ///
    /// The draw sequence: base hue uniform on the wheel, then a dark/light
    /// coin weighted 80/20 toward dark, then the role channels for the
    /// chosen mode. Identical seeds produce identical palettes.
    #[must_use]
    pub fn generate(seed: u32) -> Self {
        let mut rng = Xorshift32::new(seed);
        let base_hue = rng.range_f32(0.0, 360.0);
        let is_dark = rng.range_f32(0.0, 1.0) < 0.8;

        if is_dark {
            Self::generate_dark(base_hue, &mut rng)
        } else {
            Self::generate_light(base_hue, &mut rng)
        }
    }

    /// Synthesize from the current time's subsecond nanos.
    #[must_use]
    pub fn random() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(42, |d| d.subsec_nanos());
        Self::generate(seed)
    }

    fn generate_dark(base_hue: f32, rng: &mut Xorshift32) -> Self {
        // Background first; the secondary surface offsets from its
        // lightness, staying on the dark side.
        let bg_l = rng.range_f32(5.0, 15.0);
        let bg = Hsl::new(base_hue, rng.range_f32(15.0, 35.0), bg_l);
        let text = Hsl::new(base_hue, rng.range_f32(10.0, 30.0), rng.range_f32(88.0, 98.0));
        let secondary = Hsl::new(
            base_hue,
            rng.range_f32(20.0, 40.0),
            bg_l + rng.range_f32(5.0, 13.0),
        );

        // Accent leaves the base hue by a bounded offset in either
        // direction, saturated enough to stand out on a muted ground.
        let dir = *rng.pick(&[-1.0_f32, 1.0]);
        let accent = Hsl::new(
            dir.mul_add(rng.range_f32(10.0, 50.0), base_hue),
            rng.range_f32(60.0, 95.0),
            rng.range_f32(50.0, 65.0),
        );

        Self::new(bg.to_hex(), text.to_hex(), accent.to_hex(), secondary.to_hex())
    }

    fn generate_light(base_hue: f32, rng: &mut Xorshift32) -> Self {
        let bg_l = rng.range_f32(93.0, 98.0);
        let bg = Hsl::new(base_hue, rng.range_f32(15.0, 35.0), bg_l);
        let text = Hsl::new(base_hue, rng.range_f32(10.0, 30.0), rng.range_f32(8.0, 20.0));
        let secondary = Hsl::new(
            base_hue,
            rng.range_f32(20.0, 40.0),
            bg_l - rng.range_f32(5.0, 13.0),
        );

        let dir = *rng.pick(&[-1.0_f32, 1.0]);
        let accent = Hsl::new(
            dir.mul_add(rng.range_f32(10.0, 50.0), base_hue),
            rng.range_f32(60.0, 95.0),
            rng.range_f32(50.0, 65.0),
        );

        Self::new(bg.to_hex(), text.to_hex(), accent.to_hex(), secondary.to_hex())
    }

    /// Whether the background sits on the dark half of the lightness scale.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        Hsl::from_hex(&self.bg).is_dark()
    }

    /// The tokens in application order, paired with their role names.
    #[must_use]
    pub fn tokens(&self) -> [(&'static str, &str); 4] {
        [
            ("bg", self.bg.as_str()),
            ("text", self.text.as_str()),
            ("accent", self.accent.as_str()),
            ("secondary", self.secondary.as_str()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
