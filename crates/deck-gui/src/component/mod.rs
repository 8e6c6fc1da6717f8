//! Reusable view components.

pub mod controls;
pub mod panel;

pub use controls::nav_pill;
pub use panel::{glass_panel, kicker, mode_tag, output_panel, section_label, verdict_panel};
