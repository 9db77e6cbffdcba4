// SPDX-License-Identifier: MIT
//
// tint-color — color primitives for tintlab.
//
// The theme engine's lingua franca is the 6-digit hex string: every
// operation takes hex in and hands hex back, with RGB and HSL as the
// computational forms in between. This crate owns those forms and the
// conversions:
//
//   hex string ↔ Rgb (8-bit channels) ↔ Hsl (degrees / percent cylinder)
//
// Parsing is deliberately two-faced: a strict parser for validation paths
// and a lenient per-group parser for the conversion paths, where the tool
// has always treated a malformed group as channel zero rather than an
// error. Both live in `rgb`, documented on the functions.
//
// Everything here is pure and synchronous. No terminal, no I/O, no
// dependencies.

pub mod hsl;
pub mod rgb;

pub use hsl::{Hsl, normalize_hue};
pub use rgb::{Rgb, srgb_to_linear};
