//! Spacing and radius constants.

/// Extra-small gap.
pub const SPACING_XS: f32 = 4.0;

/// Small gap.
pub const SPACING_SM: f32 = 8.0;

/// Medium gap - default between related elements.
pub const SPACING_MD: f32 = 16.0;

/// Large gap - between sections.
pub const SPACING_LG: f32 = 24.0;

/// Extra-large gap - page margins.
pub const SPACING_XL: f32 = 40.0;

/// Small corner radius - chips, tags.
pub const RADIUS_SM: f32 = 6.0;

/// Medium corner radius - cards, buttons.
pub const RADIUS_MD: f32 = 10.0;

/// Large corner radius - panels.
pub const RADIUS_LG: f32 = 16.0;

/// Fully rounded - pills.
pub const RADIUS_FULL: f32 = 999.0;
