//! Application-level state.
//!
//! `AppState` is the root of all state: the slide catalogue, the
//! navigation engine, the transition machine, the mounted slide's UI
//! state, and the ambient background. It is an explicitly owned object
//! constructed per instance - never ambient or global - so multiple
//! presentation windows could coexist and tests build isolated instances.

use std::time::Instant;

use deck_core::{Deck, Slide, SlideSequencer, TransitionCoordinator};

use crate::background::BackgroundState;

use super::SlideUi;

/// Top-level application state.
pub struct AppState {
    /// The immutable slide catalogue.
    pub deck: Deck,
    /// Navigation engine - the only writer of the current index.
    pub sequencer: SlideSequencer,
    /// Exit-then-enter transition machine.
    pub transition: TransitionCoordinator,
    /// Interactive state of the mounted slide; replaced on mount swap.
    pub slide_ui: SlideUi,
    /// Ambient particle background.
    pub background: BackgroundState,
    /// Instant of the most recent animation tick, sampled by the view.
    pub frame_now: Instant,
}

impl AppState {
    /// Fresh state on the first slide, mid initial fade-in.
    pub fn new() -> Self {
        let deck = Deck::standard();
        let now = Instant::now();
        let sequencer = SlideSequencer::new(deck.len());
        let transition = TransitionCoordinator::new(sequencer.current(), now);
        let slide_ui = SlideUi::for_slide(deck.clamped(sequencer.current()).tag);

        Self {
            deck,
            sequencer,
            transition,
            slide_ui,
            background: BackgroundState::new(),
            frame_now: now,
        }
    }

    /// The slide whose content is currently rendered.
    ///
    /// During an exit leg this is still the outgoing slide.
    pub fn visible_slide(&self) -> &Slide {
        self.deck.clamped(self.transition.visible_slide())
    }

    /// The slide the sequencer considers current (the transition target).
    pub fn current_slide(&self) -> &Slide {
        self.deck.clamped(self.sequencer.current())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
