//! # tint-engine — palette synthesis, checking, and keeping
//!
//! Everything above raw color math: WCAG contrast verdicts, color-wheel
//! harmonies, seeded palette synthesis, the capacity-bounded store of
//! named themes, and the live-preview controller.
//!
//! # Architecture
//!
//! ```text
//! "#0ea5e9" (hex in)
//!     │
//!     ▼
//! tint-color:  Rgb / Hsl conversions (pure math)
//!     │
//!     ├──▶ contrast.rs  WCAG luminance, ratios, AA/AAA verdicts
//!     ├──▶ harmony.rs   hue-rotation families on the color wheel
//!     └──▶ palette.rs   seeded four-token synthesis
//!              │
//!              ▼
//!          store.rs     named themes, capacity-bounded, JSON in/out
//!          persist.rs   storage ports (file / in-memory)
//!          preview.rs   live token override with guaranteed revert
//! ```
//!
//! # Conventions
//!
//! Colors cross every public boundary as lowercase `#rrggbb` strings;
//! HSL only appears inside the math. Synthesis is seed-deterministic,
//! so a palette is reproducible from one `u32`. The store's persistence
//! is best-effort: port failures degrade it to in-memory, they never
//! fail a mutation.

// Color-role and channel variable names are inherently similar.
#![allow(clippy::similar_names)]
// PRNG draws run in f64 and intentionally land in f32 channel fields.
#![allow(clippy::cast_possible_truncation)]

pub mod contrast;
pub mod harmony;
pub mod palette;
pub mod persist;
pub mod presets;
pub mod preview;
pub mod store;

pub use contrast::{
    ContrastReport, best_text_on, check_contrast, contrast_ratio, relative_luminance,
};
pub use harmony::HarmonyKind;
pub use palette::Palette;
pub use persist::{FileStorage, MemoryStorage, ThemeStorage};
pub use presets::{preset, preset_names};
pub use preview::{PreviewController, TokenSink};
pub use store::{CustomTheme, PaletteStore, StoreError};
