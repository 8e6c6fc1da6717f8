//! Slide-local simulation handlers.
//!
//! These only ever touch the mounted slide's `SlideUi`; a message that
//! outlives its mount (a timer firing raced against a mount swap) finds a
//! non-matching variant and falls through without touching anything.

use deck_core::PhaseState;

use crate::app::App;
use crate::constants::STAGE_BEATS;
use crate::state::{Baseline, Dataset, SlideUi};

impl App {
    /// Phase timer firing for whichever choreography is mounted.
    pub(crate) fn on_simulation_tick(&mut self) {
        match &mut self.state.slide_ui {
            SlideUi::RelatedWork { sim, .. } => {
                sim.advance();
            }
            SlideUi::Methodology { stage_sim, .. } => {
                stage_sim.advance();
            }
            _ => {}
        }
    }

    /// Auto-advance timer firing on the methodology slide.
    pub(crate) fn on_pipeline_tick(&mut self) {
        if let SlideUi::Methodology {
            pipeline,
            stage_sim,
        } = &mut self.state.slide_ui
            && pipeline.tick()
        {
            // New stage, new choreography.
            *stage_sim = PhaseState::new(STAGE_BEATS);
        }
    }

    /// Baseline clicked in the related-work gallery.
    pub(crate) fn select_baseline(&mut self, baseline: Baseline) {
        if let SlideUi::RelatedWork { selector, sim } = &mut self.state.slide_ui {
            selector.select(baseline);
            // The composite key changed either way (switch or replay), so
            // the choreography restarts from phase zero.
            *sim = PhaseState::new(selector.active().terminal_phase());
            tracing::debug!(
                ?baseline,
                token = selector.replay_token(),
                "simulation remounted"
            );
        }
    }

    /// Pipeline stage node clicked on the methodology slide.
    pub(crate) fn select_stage(&mut self, stage: usize) {
        if let SlideUi::Methodology {
            pipeline,
            stage_sim,
        } = &mut self.state.slide_ui
        {
            pipeline.select(stage);
            *stage_sim = PhaseState::new(STAGE_BEATS);
        }
    }

    /// Dataset toggle clicked on the results slide.
    pub(crate) fn select_dataset(&mut self, dataset: Dataset) {
        if let SlideUi::Results { dataset: current } = &mut self.state.slide_ui {
            *current = dataset;
        }
    }
}
