//! Void-dark theme for the research deck.
//!
//! The deck renders over a black "void" with translucent panels and a
//! single pink accent. This module provides:
//! - Color constants (`palette`)
//! - Spacing constants (`spacing`)
//! - The custom Iced theme and shared widget style functions (`styles`)

pub mod palette;
pub mod spacing;
pub mod styles;

pub use palette::{
    ACCENT, ACCENT_SOFT, DANGER, DANGER_SOFT, INFO, MUTED, PANEL, PANEL_DEEP, SUCCESS,
    SUCCESS_SOFT, TEXT, TEXT_DIM, TEXT_FAINT, VOID, WARNING, WHITE_05, WHITE_10, WHITE_20,
    with_alpha,
};

pub use spacing::{
    RADIUS_FULL, RADIUS_LG, RADIUS_MD, RADIUS_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL,
    SPACING_XS,
};

pub use styles::{
    accent_rule, chrome_bar, deck_theme, ghost_button, glass_card, panel_deep, panel_glass, pill,
};
