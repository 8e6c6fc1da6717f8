//! Per-mounted-slide UI state.
//!
//! # Architecture
//!
//! Instead of a bag of per-slide fields living forever on `AppState`, the
//! mounted slide's interactive state is one enum value:
//! - The variant is chosen from the slide's tag when the transition
//!   machine swaps mounts.
//! - Navigation replaces the entire value, which destroys the old slide's
//!   simulation state and constructs fresh state for the new one.
//!
//! This is the explicit-lifecycle equivalent of remount-by-key: revisiting
//! a slide always starts its selectors, phases, and auto-advance ticker
//! from their initial values, and no timer state can leak across mounts.

use std::time::Duration;

use deck_core::{AutoAdvance, PhaseState, ReplayableSelector, SlideTag};

use crate::constants::STAGE_BEATS;

// =============================================================================
// BASELINE VARIANTS (related-work gallery)
// =============================================================================

/// A baseline method the related-work gallery can demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Baseline {
    /// Direct inference against static weights.
    ZeroShot,
    /// Step-by-step reasoning before answering.
    ChainOfThought,
    /// Explicit planning phase, then execution.
    PlanAndSolve,
    /// Iterative feedback/refine loop.
    SelfRefine,
    /// Multi-perspective analysis with aggregation.
    S3Agent,
    /// Tool-use retrieval agent.
    OwlAgent,
}

impl Baseline {
    /// All variants in display order.
    pub const ALL: [Baseline; 6] = [
        Self::ZeroShot,
        Self::ChainOfThought,
        Self::PlanAndSolve,
        Self::SelfRefine,
        Self::S3Agent,
        Self::OwlAgent,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ZeroShot => "Zero-Shot",
            Self::ChainOfThought => "Chain-of-Thought",
            Self::PlanAndSolve => "Plan-and-Solve",
            Self::SelfRefine => "Self-Refine",
            Self::S3Agent => "S3 Agent",
            Self::OwlAgent => "OWL Agent",
        }
    }

    /// One-line dataflow summary shown under the label.
    pub fn flow(&self) -> &'static str {
        match self {
            Self::ZeroShot => "Input → Static Weights",
            Self::ChainOfThought => "Input → Step-by-Step Reasoning",
            Self::PlanAndSolve => "Input → Plan → Execute",
            Self::SelfRefine => "Initial → Feedback Loop (x3)",
            Self::S3Agent => "Surface + Semantic + Sentiment",
            Self::OwlAgent => "Tool-Use Retrieval",
        }
    }

    /// Mode caption shown in the simulation panel's corner.
    pub fn mode_label(&self) -> &'static str {
        match self {
            Self::ZeroShot => "MODE: ZERO_SHOT",
            Self::ChainOfThought => "MODE: CHAIN_OF_THOUGHT",
            Self::PlanAndSolve => "MODE: PLAN_AND_SOLVE",
            Self::SelfRefine => "MODE: SELF_REFINE (ITERATIVE)",
            Self::S3Agent => "MODE: S3_AGENT (MULTI-VIEW)",
            Self::OwlAgent => "MODE: OWL_AGENT (TOOL-USE)",
        }
    }

    /// Whether the variant belongs to the agentic-optimization group.
    pub fn is_agentic(&self) -> bool {
        matches!(self, Self::SelfRefine | Self::S3Agent | Self::OwlAgent)
    }

    /// Terminal phase of this variant's choreography.
    pub fn terminal_phase(&self) -> u32 {
        match self {
            Self::ZeroShot => 3,
            Self::ChainOfThought => 7,
            Self::PlanAndSolve => 6,
            Self::SelfRefine => 5,
            Self::S3Agent => 6,
            Self::OwlAgent => 4,
        }
    }

    /// Period between choreography beats.
    pub fn beat_period(&self) -> Duration {
        match self {
            Self::ZeroShot => Duration::from_millis(600),
            Self::ChainOfThought => Duration::from_millis(800),
            Self::PlanAndSolve => Duration::from_millis(800),
            // The refine loop deliberately breathes slower than the rest.
            Self::SelfRefine => Duration::from_millis(1500),
            Self::S3Agent => Duration::from_millis(700),
            Self::OwlAgent => Duration::from_millis(900),
        }
    }
}

// =============================================================================
// DATASET TOGGLE (results slide)
// =============================================================================

/// Benchmark dataset shown on the results slide.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// Chinese-language benchmark split.
    #[default]
    Chinese,
    /// Japanese-language benchmark split.
    Japanese,
}

impl Dataset {
    /// Both datasets in display order.
    pub const ALL: [Dataset; 2] = [Self::Chinese, Self::Japanese];

    /// Toggle-button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chinese => "CHINESE BENCHMARK",
            Self::Japanese => "JAPANESE BENCHMARK",
        }
    }
}

// =============================================================================
// PIPELINE STAGES (methodology slide)
// =============================================================================

/// One stage of the SAS pipeline walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// External index queries for live slang usage.
    Retrieval,
    /// Synthesis of retrieved fragments into a definition report.
    Alignment,
    /// Final classification against the report.
    Solver,
}

impl PipelineStage {
    /// All stages in pipeline order.
    pub const ALL: [PipelineStage; 3] = [Self::Retrieval, Self::Alignment, Self::Solver];

    /// Stage at `index`, clamped to the last stage.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Position in the pipeline.
    pub fn index(&self) -> usize {
        match self {
            Self::Retrieval => 0,
            Self::Alignment => 1,
            Self::Solver => 2,
        }
    }

    /// Node label under the pipeline graph.
    pub fn node_label(&self) -> &'static str {
        match self {
            Self::Retrieval => "RETRIEVAL",
            Self::Alignment => "ALIGNMENT",
            Self::Solver => "SOLVER",
        }
    }

    /// Stage title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Retrieval => "Subculture Retrieval",
            Self::Alignment => "Alignment Report",
            Self::Solver => "Culture Solver",
        }
    }

    /// Stage subtitle.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Retrieval => "Knowledge Update",
            Self::Alignment => "Context Synthesis",
            Self::Solver => "Inference & Labeling",
        }
    }

    /// Descriptive paragraph for the left column.
    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Retrieval => {
                "Dynamically queries external indices (Google/Bing) to fetch \
                 real-time usage contexts of slang terms, bridging the temporal \
                 gap of static LLMs."
            }
            Self::Alignment => {
                "Synthesizes retrieved fragments into a structured 'Subculture \
                 Definition' that maps benign surface meanings to their hidden \
                 risk semantics."
            }
            Self::Solver => {
                "The final classification head utilizes the Alignment Report as \
                 a 'decoder ring' to correctly interpret the input sentence and \
                 assign risk labels."
            }
        }
    }

    /// Input/output protocol snippet.
    pub fn protocol(&self) -> &'static str {
        match self {
            Self::Retrieval => ">> GET /query?q=\"Jirai Kei\"\n<< [200 OK] { keywords: [...] }",
            Self::Alignment => ">> SYNTHESIZE(keywords)\n<< Report_ID: 0x8F2A",
            Self::Solver => ">> CLASSIFY(input, Report_ID)\n<< LABEL: \"DANGER_HIGH\"",
        }
    }
}

// =============================================================================
// SLIDE UI STATE
// =============================================================================

/// Interactive state of the mounted slide.
///
/// Constructed fresh on every mount swap and dropped wholesale on the
/// next; slides without interactive state share the `Still` variant.
#[derive(Debug, Clone)]
pub enum SlideUi {
    /// Purely presentational slide.
    Still,

    /// Related-work gallery: which baseline plays, and where its
    /// choreography currently stands.
    RelatedWork {
        /// Active baseline plus replay token (the remount key).
        selector: ReplayableSelector<Baseline>,
        /// Choreography of the active baseline, rebuilt on every select.
        sim: PhaseState,
    },

    /// Methodology pipeline walkthrough.
    Methodology {
        /// Cyclic stage ticker with the one-way auto-to-manual switch.
        pipeline: AutoAdvance,
        /// Choreography of the active stage's visualization.
        stage_sim: PhaseState,
    },

    /// Results slide with its dataset toggle.
    Results {
        /// Selected benchmark split.
        dataset: Dataset,
    },
}

impl SlideUi {
    /// Fresh state for a slide that just mounted.
    pub fn for_slide(tag: SlideTag) -> Self {
        match tag {
            SlideTag::RelatedWork => {
                let selector = ReplayableSelector::new(Baseline::ZeroShot);
                let sim = PhaseState::new(selector.active().terminal_phase());
                Self::RelatedWork { selector, sim }
            }
            SlideTag::Methodology => Self::Methodology {
                pipeline: AutoAdvance::new(PipelineStage::ALL.len()),
                stage_sim: PhaseState::new(STAGE_BEATS),
            },
            SlideTag::Results => Self::Results {
                dataset: Dataset::default(),
            },
            _ => Self::Still,
        }
    }

    /// Period of the phase timer this state needs, if any.
    ///
    /// `None` both for slides without choreography and once the current
    /// choreography has reached its terminal phase - the subscription
    /// layer turns the timer off in either case.
    pub fn beat_period(&self) -> Option<Duration> {
        match self {
            Self::RelatedWork { selector, sim } if !sim.is_terminal() => {
                Some(selector.active().beat_period())
            }
            Self::Methodology { stage_sim, .. } if !stage_sim.is_terminal() => {
                Some(crate::constants::STAGE_BEAT_PERIOD)
            }
            _ => None,
        }
    }

    /// Whether the auto-advance timer should be running.
    pub fn wants_auto_advance(&self) -> bool {
        matches!(self, Self::Methodology { pipeline, .. } if pipeline.is_enabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::SlideTag;

    #[test]
    fn every_baseline_has_positive_choreography() {
        for baseline in Baseline::ALL {
            assert!(baseline.terminal_phase() > 0, "{baseline:?}");
            assert!(!baseline.beat_period().is_zero(), "{baseline:?}");
        }
    }

    #[test]
    fn mount_state_matches_slide_tag() {
        assert!(matches!(
            SlideUi::for_slide(SlideTag::RelatedWork),
            SlideUi::RelatedWork { .. }
        ));
        assert!(matches!(
            SlideUi::for_slide(SlideTag::Methodology),
            SlideUi::Methodology { .. }
        ));
        assert!(matches!(
            SlideUi::for_slide(SlideTag::Results),
            SlideUi::Results { .. }
        ));
        assert!(matches!(SlideUi::for_slide(SlideTag::Intro), SlideUi::Still));
    }

    #[test]
    fn beat_timer_turns_off_at_terminal_phase() {
        let mut ui = SlideUi::for_slide(SlideTag::RelatedWork);
        assert!(ui.beat_period().is_some());
        if let SlideUi::RelatedWork { sim, .. } = &mut ui {
            while sim.advance() {}
        }
        assert_eq!(ui.beat_period(), None);
    }

    #[test]
    fn still_slides_request_no_timers() {
        let ui = SlideUi::for_slide(SlideTag::Conclusion);
        assert_eq!(ui.beat_period(), None);
        assert!(!ui.wants_auto_advance());
    }

    #[test]
    fn stage_from_index_clamps() {
        assert_eq!(PipelineStage::from_index(0), PipelineStage::Retrieval);
        assert_eq!(PipelineStage::from_index(2), PipelineStage::Solver);
        assert_eq!(PipelineStage::from_index(99), PipelineStage::Solver);
    }
}
