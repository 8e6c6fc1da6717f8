//! The custom Iced theme and shared widget style functions.
//!
//! Style functions receive `&Theme` and a widget status, matching Iced's
//! style-closure signature so views can write `.style(panel_glass)` or
//! compose their own closures for stateful styling.

use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::palette::{
    ACCENT, DANGER, PANEL, PANEL_DEEP, SUCCESS, TEXT, TEXT_DIM, VOID, WARNING, WHITE_05, WHITE_10,
    with_alpha,
};
use super::spacing::{RADIUS_FULL, RADIUS_LG};

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the void-dark theme.
pub fn deck_theme() -> Theme {
    Theme::custom(
        "Void Dark".to_string(),
        iced::theme::Palette {
            background: VOID,
            text: TEXT,
            primary: ACCENT,
            success: SUCCESS,
            warning: WARNING,
            danger: DANGER,
        },
    )
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Translucent glass panel - the workhorse surface.
pub fn panel_glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE_05.into()),
        border: Border {
            color: WHITE_10,
            width: 1.0,
            radius: RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Recessed dark panel - simulation viewports.
pub fn panel_deep(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(PANEL_DEEP.into()),
        border: Border {
            color: WHITE_05,
            width: 1.0,
            radius: RADIUS_LG.into(),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.5),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Opaque card surface.
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(PANEL.into()),
        border: Border {
            color: WHITE_10,
            width: 1.0,
            radius: RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Translucent chrome bar along the top of the window.
pub fn chrome_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(with_alpha(Color::BLACK, 0.20).into()),
        border: Border {
            color: WHITE_05,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Floating pill housing the navigation controls.
pub fn pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(with_alpha(PANEL, 0.80).into()),
        border: Border {
            color: WHITE_10,
            width: 1.0,
            radius: RADIUS_FULL.into(),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.6),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 30.0,
        },
        ..Default::default()
    }
}

/// Thin accent rule used as a title underline.
pub fn accent_rule(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(ACCENT.into()),
        border: Border {
            radius: RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Borderless button that washes in on hover.
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (Some(WHITE_10.into()), TEXT),
        button::Status::Disabled => (None, with_alpha(TEXT, 0.20)),
        button::Status::Active => (None, TEXT_DIM),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
