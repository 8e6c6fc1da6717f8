//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and timer events flow through these types; the
//! `update` function processes them to modify application state.

use std::time::Instant;

use iced::keyboard;

use crate::state::{Baseline, Dataset};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Advance one slide (next button or advance key).
    NextSlide,

    /// Retreat one slide (previous button or retreat key).
    PreviousSlide,

    /// Jump directly to the first slide.
    JumpToFirst,

    /// Jump directly to the last slide.
    JumpToLast,

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event from the global listener.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// Frame tick driving the transition machine and ambient background.
    AnimationTick(Instant),

    // =========================================================================
    // Slide-local simulations
    // =========================================================================
    /// Phase timer firing for the mounted slide's choreography.
    SimulationTick,

    /// Auto-advance timer firing for the methodology pipeline.
    PipelineTick,

    /// A baseline variant was clicked in the related-work gallery.
    BaselineSelected(Baseline),

    /// A pipeline stage node was clicked on the methodology slide.
    StageSelected(usize),

    /// The benchmark dataset toggle was clicked on the results slide.
    DatasetSelected(Dataset),

    // =========================================================================
    // External actions
    // =========================================================================
    /// Open a reference link in the system browser.
    OpenUrl(&'static str),

    /// No operation - used for events with no effect.
    Noop,
}
