//! Engine-level scenarios exercising the sequencer, transition
//! coordinator, and slide-local simulation state together.

use std::time::{Duration, Instant};

use deck_core::{
    AutoAdvance, Deck, Direction, PhaseState, ReplayableSelector, SlideSequencer,
    TransitionCoordinator, TransitionEvent,
};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Baseline {
    ZeroShot,
    SelfRefine,
}

/// The full walkthrough: load, hammer the advance key past the end, step
/// back, let the methodology demo cycle, then pin a stage manually.
#[test]
fn end_to_end_presentation_walkthrough() {
    let deck = Deck::standard();
    let mut seq = SlideSequencer::new(deck.len());

    // Load: index 0, no direction.
    assert_eq!(seq.current(), 0);
    assert_eq!(seq.direction(), Direction::None);

    // ArrowRight seven times lands on the last slide...
    for _ in 0..7 {
        seq.next();
    }
    assert_eq!(seq.current(), 7);
    assert!(seq.is_last());

    // ...and an eighth press is a no-op.
    assert!(!seq.next());
    assert_eq!(seq.current(), 7);

    // ArrowLeft steps back once.
    assert!(seq.previous());
    assert_eq!(seq.current(), 6);
    assert_eq!(seq.direction(), Direction::Backward);

    // On the methodology slide, the untouched demo cycles 0 -> 1 -> 2 -> 0.
    let mut pipeline = AutoAdvance::new(3);
    let mut observed = vec![pipeline.step()];
    for _ in 0..3 {
        pipeline.tick();
        observed.push(pipeline.step());
    }
    assert_eq!(observed, vec![0, 1, 2, 0]);

    // Clicking stage 1 pins it and permanently leaves demo mode.
    pipeline.select(1);
    assert_eq!(pipeline.step(), 1);
    assert!(!pipeline.is_enabled());
    pipeline.tick();
    assert_eq!(pipeline.step(), 1);
}

/// A remount (selector key change) rebuilds phase state from zero, and the
/// old state object is gone - nothing can advance it afterwards.
#[test]
fn replay_rebuilds_choreography_from_phase_zero() {
    let mut selector = ReplayableSelector::new(Baseline::ZeroShot);
    let mut sim = PhaseState::new(3);
    sim.advance();
    sim.advance();
    assert_eq!(sim.phase(), 2);

    // Reselecting the active variant changes the key; the host constructs
    // a fresh simulation for it.
    let previous_key = selector.key();
    selector.select(Baseline::ZeroShot);
    assert_ne!(selector.key(), previous_key);
    sim = PhaseState::new(3);
    assert_eq!(sim.phase(), 0);

    // Switching variants resets the token as well.
    selector.select(Baseline::SelfRefine);
    assert_eq!(selector.key(), (Baseline::SelfRefine, 0));
}

/// Sequencer navigation keyed into the coordinator settles on the
/// sequencer's index even under rapid repeated presses mid-transition.
#[test]
fn rapid_navigation_converges_on_sequencer_index() {
    let deck = Deck::standard();
    let mut seq = SlideSequencer::new(deck.len());
    let t0 = Instant::now();
    let mut coord = TransitionCoordinator::new(seq.current(), t0);

    // Finish the initial fade-in.
    let mut now = t0 + Duration::from_millis(900);
    assert_eq!(coord.tick(now), Some(TransitionEvent::Finished(0)));

    // Three presses, 100 ms apart - far faster than a transition leg.
    for _ in 0..3 {
        now += Duration::from_millis(100);
        if seq.next() {
            coord.start(seq.current(), seq.direction(), now);
        }
    }
    assert_eq!(seq.current(), 3);

    // Drive ticks until the machine goes idle; the only mount swap is the
    // final target.
    let mut swaps = Vec::new();
    for _ in 0..100 {
        now += Duration::from_millis(50);
        match coord.tick(now) {
            Some(TransitionEvent::MountSwapped(idx)) => swaps.push(idx),
            Some(TransitionEvent::Finished(_)) => break,
            None => {}
        }
    }
    assert_eq!(swaps, vec![3]);
    assert!(coord.is_idle());
    assert_eq!(coord.visible_slide(), seq.current());
}

proptest! {
    /// For all n: n advances from 0 over L slides yields min(n, L-1).
    #[test]
    fn next_saturates(n in 0usize..64, len in 1usize..16) {
        let mut seq = SlideSequencer::new(len);
        for _ in 0..n {
            seq.next();
        }
        prop_assert_eq!(seq.current(), n.min(len - 1));
    }

    /// Any interleaving of navigation requests keeps the index in range.
    #[test]
    fn index_never_leaves_range(ops in prop::collection::vec(0u8..3, 0..128), len in 1usize..16) {
        let mut seq = SlideSequencer::new(len);
        for op in ops {
            match op {
                0 => { seq.next(); }
                1 => { seq.previous(); }
                _ => { seq.jump_to(usize::from(op) * 7); }
            }
            prop_assert!(seq.current() < len);
        }
    }

    /// Phase never exceeds its terminal value regardless of firing count.
    #[test]
    fn phase_is_capped(terminal in 0u32..16, firings in 0usize..64) {
        let mut state = PhaseState::new(terminal);
        for _ in 0..firings {
            state.advance();
        }
        prop_assert_eq!(u64::from(state.phase()), (firings as u64).min(u64::from(terminal)));
    }
}
