//! End-to-end navigation scenarios driven through `App::update` with
//! synthetic messages and instants - no Iced runtime required.

use std::time::{Duration, Instant};

use deck_gui::app::App;
use deck_gui::message::Message;
use deck_gui::state::{Baseline, Dataset, SlideUi};
use iced::keyboard::key::Named;

fn press(app: &mut App, named: Named) {
    // The key handler returns a Task wrapping the navigation message;
    // feed the equivalent message directly, as the runtime would.
    let message = match named {
        Named::ArrowRight | Named::Space => Message::NextSlide,
        Named::ArrowLeft => Message::PreviousSlide,
        Named::Home => Message::JumpToFirst,
        Named::End => Message::JumpToLast,
        _ => Message::Noop,
    };
    let _ = app.update(message);
}

/// Run animation ticks until the transition machine settles.
fn settle(app: &mut App) {
    let mut now = Instant::now();
    for _ in 0..400 {
        now += Duration::from_millis(16);
        let _ = app.update(Message::AnimationTick(now));
        if app.state.transition.is_idle() {
            break;
        }
    }
    assert!(app.state.transition.is_idle(), "transition never settled");
}

#[test]
fn walkthrough_saturates_and_steps_back() {
    let (mut app, _task) = App::new();
    assert_eq!(app.state.sequencer.current(), 0);

    // Seven advances land on the last slide; the eighth is a no-op.
    for _ in 0..7 {
        press(&mut app, Named::ArrowRight);
    }
    assert_eq!(app.state.sequencer.current(), 7);
    press(&mut app, Named::ArrowRight);
    assert_eq!(app.state.sequencer.current(), 7);

    press(&mut app, Named::ArrowLeft);
    assert_eq!(app.state.sequencer.current(), 6);

    // Once the dust settles, the visuals agree with the sequencer.
    settle(&mut app);
    assert_eq!(app.state.transition.visible_slide(), 6);
}

#[test]
fn mount_swap_rebuilds_slide_state() {
    let (mut app, _task) = App::new();

    // Navigate to the related-work slide (index 2) and settle.
    press(&mut app, Named::ArrowRight);
    press(&mut app, Named::ArrowRight);
    settle(&mut app);
    let SlideUi::RelatedWork { selector, .. } = &app.state.slide_ui else {
        panic!("expected related-work state after settling on slide 2");
    };
    assert_eq!(selector.active(), Baseline::ZeroShot);

    // Play some choreography and switch variants.
    let _ = app.update(Message::SimulationTick);
    let _ = app.update(Message::BaselineSelected(Baseline::SelfRefine));

    // Leave and come back: everything resets to initial values.
    press(&mut app, Named::ArrowLeft);
    settle(&mut app);
    press(&mut app, Named::ArrowRight);
    settle(&mut app);
    let SlideUi::RelatedWork { selector, sim } = &app.state.slide_ui else {
        panic!("expected related-work state after revisiting slide 2");
    };
    assert_eq!(selector.active(), Baseline::ZeroShot);
    assert_eq!(selector.replay_token(), 0);
    assert_eq!(sim.phase(), 0);
}

#[test]
fn replay_restarts_choreography_without_changing_variant() {
    let (mut app, _task) = App::new();
    press(&mut app, Named::ArrowRight);
    press(&mut app, Named::ArrowRight);
    settle(&mut app);

    let _ = app.update(Message::SimulationTick);
    let _ = app.update(Message::SimulationTick);
    let _ = app.update(Message::BaselineSelected(Baseline::ZeroShot));

    let SlideUi::RelatedWork { selector, sim } = &app.state.slide_ui else {
        panic!("expected related-work state");
    };
    assert_eq!(selector.active(), Baseline::ZeroShot);
    assert_eq!(selector.replay_token(), 1);
    assert_eq!(sim.phase(), 0, "replay restarts from the first beat");
}

#[test]
fn stray_simulation_tick_never_touches_other_slides() {
    let (mut app, _task) = App::new();
    settle(&mut app);

    // Index 0 is a still slide; a raced timer firing must change nothing.
    let _ = app.update(Message::SimulationTick);
    let _ = app.update(Message::PipelineTick);
    assert!(matches!(app.state.slide_ui, SlideUi::Still));
}

#[test]
fn methodology_auto_advance_cycles_then_pins_on_manual_selection() {
    let (mut app, _task) = App::new();
    for _ in 0..3 {
        press(&mut app, Named::ArrowRight); // intro -> methodology (index 3)
    }
    settle(&mut app);

    let steps_of = |app: &App| match &app.state.slide_ui {
        SlideUi::Methodology { pipeline, .. } => (pipeline.step(), pipeline.is_enabled()),
        other => panic!("expected methodology state, got {other:?}"),
    };

    assert_eq!(steps_of(&app), (0, true));

    // Untouched, the demo cycles 0 -> 1 -> 2 -> 0.
    let mut observed = vec![steps_of(&app).0];
    for _ in 0..3 {
        let _ = app.update(Message::PipelineTick);
        observed.push(steps_of(&app).0);
    }
    assert_eq!(observed, vec![0, 1, 2, 0]);

    // Clicking stage 1 pins it and leaves demo mode for good.
    let _ = app.update(Message::StageSelected(1));
    assert_eq!(steps_of(&app), (1, false));
    let _ = app.update(Message::PipelineTick);
    assert_eq!(steps_of(&app), (1, false));
    assert!(!app.state.slide_ui.wants_auto_advance());
}

#[test]
fn dataset_toggle_only_lives_on_the_results_slide() {
    let (mut app, _task) = App::new();

    // A toggle message on another slide is ignored.
    let _ = app.update(Message::DatasetSelected(Dataset::Japanese));
    assert!(matches!(app.state.slide_ui, SlideUi::Still));

    for _ in 0..4 {
        press(&mut app, Named::ArrowRight); // results is index 4
    }
    settle(&mut app);
    let _ = app.update(Message::DatasetSelected(Dataset::Japanese));
    let SlideUi::Results { dataset } = &app.state.slide_ui else {
        panic!("expected results state");
    };
    assert_eq!(*dataset, Dataset::Japanese);

    // Revisiting resets the toggle to its default.
    press(&mut app, Named::ArrowLeft);
    settle(&mut app);
    press(&mut app, Named::ArrowRight);
    settle(&mut app);
    let SlideUi::Results { dataset } = &app.state.slide_ui else {
        panic!("expected results state");
    };
    assert_eq!(*dataset, Dataset::Chinese);
}

#[test]
fn boundary_slides_disable_their_nav_side() {
    let (mut app, _task) = App::new();
    assert!(app.state.sequencer.is_first());
    assert!(!app.state.sequencer.is_last());

    press(&mut app, Named::End);
    assert!(app.state.sequencer.is_last());
    assert!(!app.state.sequencer.is_first());
}
