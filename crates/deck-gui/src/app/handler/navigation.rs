//! Navigation wiring: sequencer mutations feed the transition machine,
//! and the frame tick advances it.
//!
//! The mounted slide's UI state is replaced exactly when the coordinator
//! reports its mount swap - that single point is where the previous
//! slide's selectors, phases, and auto-advance ticker cease to exist.

use std::time::Instant;

use deck_core::TransitionEvent;

use crate::app::App;
use crate::background::tint_for;
use crate::state::SlideUi;

impl App {
    pub(crate) fn go_next(&mut self) {
        if self.state.sequencer.next() {
            self.begin_transition();
        }
    }

    pub(crate) fn go_previous(&mut self) {
        if self.state.sequencer.previous() {
            self.begin_transition();
        }
    }

    pub(crate) fn jump_to(&mut self, index: usize) {
        if self.state.sequencer.jump_to(index) {
            self.begin_transition();
        }
    }

    fn begin_transition(&mut self) {
        let now = Instant::now();
        self.state.frame_now = now;
        self.state.transition.start(
            self.state.sequencer.current(),
            self.state.sequencer.direction(),
            now,
        );
    }

    /// Frame tick: advance the transition machine and the background.
    pub(crate) fn on_animation_tick(&mut self, now: Instant) {
        self.state.frame_now = now;

        if let Some(TransitionEvent::MountSwapped(index)) = self.state.transition.tick(now) {
            let tag = self.state.deck.clamped(index).tag;
            self.state.slide_ui = SlideUi::for_slide(tag);
            tracing::debug!(index, ?tag, "slide state rebuilt");
        }

        // The background follows the navigation target, not the visuals:
        // its tint starts blending the moment the index changes.
        let target = tint_for(self.state.current_slide().tag);
        self.state.background.tick(now, target);
    }
}
