//! Color constants for the void-dark theme.
//!
//! The palette is lifted from the deck's visual language: black void,
//! near-black panels, white text at graded emphasis, and the single
//! "jirai pink" accent.

use iced::Color;

// =============================================================================
// SURFACES
// =============================================================================

/// The void - application background.
pub const VOID: Color = Color::BLACK;

/// Panel surface (#1C1C1E).
pub const PANEL: Color = Color::from_rgb(0.11, 0.11, 0.12);

/// Recessed panel surface (#0A0A0A).
pub const PANEL_DEEP: Color = Color::from_rgb(0.04, 0.04, 0.04);

// =============================================================================
// TEXT
// =============================================================================

/// Primary text.
pub const TEXT: Color = Color::WHITE;

/// Secondary "academic gray" text.
pub const TEXT_DIM: Color = Color::from_rgb(0.61, 0.64, 0.69);

/// Tertiary text - captions, inactive labels.
pub const TEXT_FAINT: Color = Color::from_rgb(0.42, 0.45, 0.50);

/// Barely-there text - disabled controls, watermarks.
pub const MUTED: Color = Color::from_rgb(0.28, 0.28, 0.31);

// =============================================================================
// ACCENTS & STATUS
// =============================================================================

/// Jirai pink (#FF4D80) - the deck's single accent.
pub const ACCENT: Color = Color::from_rgb(1.0, 0.302, 0.502);

/// Accent at panel-tint strength.
pub const ACCENT_SOFT: Color = Color::from_rgba(1.0, 0.302, 0.502, 0.10);

/// Positive verdicts.
pub const SUCCESS: Color = Color::from_rgb(0.29, 0.87, 0.50);

/// Success tint for verdict panels.
pub const SUCCESS_SOFT: Color = Color::from_rgba(0.13, 0.77, 0.37, 0.10);

/// High-risk highlights.
pub const DANGER: Color = Color::from_rgb(0.97, 0.44, 0.44);

/// Danger tint for risk panels.
pub const DANGER_SOFT: Color = Color::from_rgba(0.94, 0.27, 0.27, 0.10);

/// Feedback/info highlights.
pub const INFO: Color = Color::from_rgb(0.38, 0.65, 0.98);

/// Warning - present for palette completeness.
pub const WARNING: Color = Color::from_rgb(0.95, 0.65, 0.05);

// =============================================================================
// TRANSLUCENT WHITES (borders, dividers, hover washes)
// =============================================================================

/// White at 5% - resting panel fill.
pub const WHITE_05: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.05);

/// White at 10% - borders and dividers.
pub const WHITE_10: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.10);

/// White at 20% - emphasized borders.
pub const WHITE_20: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.20);

/// `color` with its alpha replaced by `alpha`.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(with_alpha(ACCENT, 2.0).a, 1.0);
        assert_eq!(with_alpha(ACCENT, -1.0).a, 0.0);
        let half = with_alpha(TEXT, 0.5);
        assert_eq!(half.a, 0.5);
        assert_eq!(half.r, TEXT.r);
    }
}
