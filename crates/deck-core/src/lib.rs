//! Slide navigation and timed-animation state engine.
//!
//! This crate is the UI-framework-agnostic core of the presentation client:
//! it owns which slide is active and in which direction navigation moved
//! (`SlideSequencer`), drives the exit-then-enter transition state machine
//! (`TransitionCoordinator`), and provides the small state objects that
//! slide-local simulations are built from (`ReplayableSelector`,
//! `PhaseState`, `AutoAdvance`).
//!
//! # Design
//!
//! - Every operation is total: out-of-range requests are clamped or
//!   ignored, never errors. The only fallible surface is catalogue
//!   construction (`Deck::new`).
//! - Nothing here owns a timer. Callers advance state by calling `tick`
//!   and `advance` from whatever scheduler the host provides; scoping a
//!   timer's lifetime to a mount is the host's responsibility.
//! - No global state. Each presentation instance constructs its own
//!   `Deck`, `SlideSequencer`, and `TransitionCoordinator`, so multiple
//!   instances can coexist and tests stay isolated.

pub mod autoplay;
pub mod deck;
pub mod easing;
pub mod phase;
pub mod selector;
pub mod sequencer;
pub mod transition;

pub use autoplay::AutoAdvance;
pub use deck::{Deck, DeckError, Slide, SlideTag};
pub use easing::{CubicBezier, EASE_SLIDE};
pub use phase::PhaseState;
pub use selector::ReplayableSelector;
pub use sequencer::{Direction, SlideSequencer};
pub use transition::{SlidePose, TransitionCoordinator, TransitionEvent, TransitionTiming};
