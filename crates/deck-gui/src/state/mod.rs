//! Application state.

pub mod app_state;
pub mod slide_ui;

pub use app_state::AppState;
pub use slide_ui::{Baseline, Dataset, PipelineStage, SlideUi};
