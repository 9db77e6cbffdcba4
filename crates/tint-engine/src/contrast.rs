//! WCAG contrast evaluation for text/background pairings.
//!
//! The tool promises nothing about the palettes it generates except the
//! numbers reported here: every pairing can be checked, and the check is
//! the fixed WCAG 2.x math with no tunable thresholds.
//!
//! Luminance math runs in f64. The 0.03928 linearization knee is the
//! WCAG relative-luminance definition (not the 0.04045 display-transfer
//! variant), so ratios line up with the values accessibility checkers
//! report.

use tint_color::{Rgb, srgb_to_linear};

/// Contrast ratio required for AA normal text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Contrast ratio required for AAA normal text.
pub const AAA_NORMAL_TEXT: f64 = 7.0;

/// Compute the relative luminance of a hex color per WCAG 2.1.
///
/// Each channel is divided by 255, linearized, then weighted:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white. The
/// color is parsed leniently, so a malformed group reads as a zero
/// channel.
#[must_use]
pub fn relative_luminance(color: &str) -> f64 {
    let Rgb { r, g, b } = Rgb::parse_lenient(color);
    let r_lin = srgb_to_linear(f64::from(r) / 255.0);
    let g_lin = srgb_to_linear(f64::from(g) / 255.0);
    let b_lin = srgb_to_linear(f64::from(b) / 255.0);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two hex colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is the same regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// The verdict for one text/background pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    /// Contrast ratio in [1, 21].
    pub ratio: f64,
    /// Meets AA for normal text (ratio >= 4.5).
    pub aa: bool,
    /// Meets AAA for normal text (ratio >= 7.0).
    pub aaa: bool,
}

/// Evaluate a text color against a background.
#[must_use]
pub fn check_contrast(text: &str, bg: &str) -> ContrastReport {
    let ratio = contrast_ratio(text, bg);
    ContrastReport {
        ratio,
        aa: ratio >= AA_NORMAL_TEXT,
        aaa: ratio >= AAA_NORMAL_TEXT,
    }
}

/// Pick black or white, whichever reads better on `bg`.
#[must_use]
pub fn best_text_on(bg: &str) -> &'static str {
    if contrast_ratio("#000000", bg) >= contrast_ratio("#ffffff", bg) {
        "#000000"
    } else {
        "#ffffff"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance("#000000");
        assert!(approx_eq(lum, 0.0, 1e-9), "black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance("#ffffff");
        assert!(approx_eq(lum, 1.0, 1e-9), "white luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance("#ff0000");
        assert!(approx_eq(lum, 0.2126, 1e-6), "red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance("#00ff00");
        assert!(approx_eq(lum, 0.7152, 1e-6), "green luminance: {lum}");
    }

    #[test]
    fn luminance_sky_blue() {
        let lum = relative_luminance("#0ea5e9");
        assert!(approx_eq(lum, 0.3289, 0.001), "sky luminance: {lum}");
    }

    #[test]
    fn luminance_is_case_insensitive() {
        let a = relative_luminance("#0EA5E9");
        let b = relative_luminance("#0ea5e9");
        assert!(approx_eq(a, b, 1e-12));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!(approx_eq(ratio, 21.0, 1e-9), "b/w contrast: {ratio}");
    }

    #[test]
    fn same_color_is_1() {
        let ratio = contrast_ratio("#0ea5e9", "#0ea5e9");
        assert!(approx_eq(ratio, 1.0, 1e-12), "same-color contrast: {ratio}");
    }

    #[test]
    fn ratio_is_symmetric() {
        let ab = contrast_ratio("#e9520e", "#0d1321");
        let ba = contrast_ratio("#0d1321", "#e9520e");
        assert!(approx_eq(ab, ba, 1e-12), "asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn ratio_stays_in_bounds() {
        let pairs = [
            ("#000000", "#ffffff"),
            ("#ff0000", "#00ff00"),
            ("#0ea5e9", "#1c253b"),
            ("#777777", "#777777"),
            ("#f8f6f2", "#2d251b"),
        ];
        for (a, b) in pairs {
            let ratio = contrast_ratio(a, b);
            assert!((1.0..=21.0).contains(&ratio), "{a}/{b} ratio: {ratio}");
        }
    }

    #[test]
    fn malformed_input_reads_as_black() {
        // Lenient parsing means garbage compares like black.
        let ratio = contrast_ratio("not-a-color", "#000000");
        assert!(approx_eq(ratio, 1.0, 1e-12), "garbage ratio: {ratio}");
    }

    // ── check_contrast ──────────────────────────────────────────────

    #[test]
    fn aa_boundary_passes() {
        // 4.54:1, the classic minimum-passing gray on white.
        let report = check_contrast("#767676", "#ffffff");
        assert!(report.aa, "ratio: {}", report.ratio);
        assert!(!report.aaa, "ratio: {}", report.ratio);
    }

    #[test]
    fn just_below_aa_fails() {
        // 4.48:1, one step lighter than the boundary gray.
        let report = check_contrast("#777777", "#ffffff");
        assert!(!report.aa, "ratio: {}", report.ratio);
    }

    #[test]
    fn aaa_passes() {
        let report = check_contrast("#585858", "#ffffff");
        assert!(report.aa && report.aaa, "ratio: {}", report.ratio);
    }

    #[test]
    fn report_carries_ratio() {
        let report = check_contrast("#000000", "#ffffff");
        assert!(approx_eq(report.ratio, 21.0, 1e-9));
        assert!(report.aa && report.aaa);
    }

    // ── best_text_on ────────────────────────────────────────────────

    #[test]
    fn dark_backgrounds_get_white() {
        assert_eq!(best_text_on("#0d1321"), "#ffffff");
        assert_eq!(best_text_on("#000000"), "#ffffff");
    }

    #[test]
    fn light_backgrounds_get_black() {
        assert_eq!(best_text_on("#f8f6f2"), "#000000");
        assert_eq!(best_text_on("#ffffff"), "#000000");
    }

    #[test]
    fn mid_blue_prefers_black() {
        // Luminance ~0.33 sits above the 0.179 crossover.
        assert_eq!(best_text_on("#0ea5e9"), "#000000");
    }
}
