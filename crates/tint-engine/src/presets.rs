//! Named preset palettes — ready-to-use starting points.
//!
//! Six hand-tuned palettes, four dark and two light. Every text/background
//! pairing clears AA with room to spare, so a preset is always a safe
//! answer before the synthesizer gets involved.

use crate::palette::Palette;

/// Look up a preset palette by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<Palette> {
    let (bg, text, accent, secondary) = match name {
        "default" | "midnight" => ("#0d1321", "#e9ecf2", "#31a5f2", "#1c253b"),
        "ocean" => ("#0a1f29", "#e4eef1", "#29e0bc", "#193543"),
        "forest" => ("#0f1f17", "#e6efe9", "#7dd742", "#1d3429"),
        "orchid" => ("#1e1122", "#f0e9f2", "#ec51b8", "#34213b"),
        "paper" => ("#f8f6f2", "#2d251b", "#d45911", "#eae5dc"),
        "mist" => ("#eff2f5", "#1c2431", "#3d31c4", "#d7dee4"),
        _ => return None,
    };
    Some(Palette::new(bg, text, accent, secondary))
}

/// List all preset names, in display order.
#[must_use]
pub const fn preset_names() -> &'static [&'static str] {
    &["midnight", "ocean", "forest", "orchid", "paper", "mist"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{check_contrast, contrast_ratio};

    #[test]
    fn all_presets_resolve() {
        for name in preset_names() {
            assert!(preset(name).is_some(), "preset '{name}' missing");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(preset("nonexistent").is_none());
        assert!(preset("").is_none());
    }

    #[test]
    fn default_is_midnight() {
        assert_eq!(preset("default"), preset("midnight"));
    }

    #[test]
    fn text_is_readable_on_every_preset() {
        for name in preset_names() {
            let p = preset(name).unwrap();
            let report = check_contrast(&p.text, &p.bg);
            assert!(
                report.aa && report.aaa,
                "preset '{name}': text/bg ratio {}",
                report.ratio
            );
        }
    }

    #[test]
    fn accents_stand_out_from_their_background() {
        // Accents are decorative rather than body text; hold them to the
        // AA large-text floor of 3:1.
        for name in preset_names() {
            let p = preset(name).unwrap();
            let ratio = contrast_ratio(&p.accent, &p.bg);
            assert!(ratio >= 3.0, "preset '{name}': accent/bg ratio {ratio}");
        }
    }

    #[test]
    fn dark_and_light_presets_both_exist() {
        let dark = preset_names()
            .iter()
            .filter(|name| preset(name).unwrap().is_dark())
            .count();
        assert_eq!(dark, 4, "expected four dark presets");
    }

    #[test]
    fn each_preset_is_distinct() {
        let names = preset_names();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(preset(a), preset(b), "presets '{a}' and '{b}' collide");
            }
        }
    }
}
