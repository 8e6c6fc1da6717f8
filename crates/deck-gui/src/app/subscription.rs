//! Application subscriptions.
//!
//! This module centralizes all Iced subscriptions for the application.
//! Subscriptions are reactive event sources that run alongside the app.
//!
//! # Subscription Overview
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Keyboard | Continuous | Always | Slide navigation keys |
//! | Frame | ~16 ms | Always | Transition machine + background |
//! | Beat | Per variant | Choreography below terminal | Phase advancement |
//! | Auto-advance | 6 s | Methodology mounted, auto mode | Demo ticker |
//!
//! # Architecture
//!
//! Conditional subscriptions return `Subscription::none()` when their
//! owning state is unmounted, terminal, or switched to manual mode. This
//! is the timer-lifetime discipline: a timer handle exists exactly while
//! the mounted state needs it, so cancellation on unmount (or on a
//! replay-key change, which swaps the period source) is structural rather
//! than something handlers must remember to do.

use iced::Subscription;
use iced::keyboard;
use iced::time;

use crate::constants::{AUTO_ADVANCE_PERIOD, FRAME_PERIOD};
use crate::message::Message;
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        keyboard_subscription(),
        frame_subscription(),
        beat_subscription(state),
        auto_advance_subscription(state),
    ])
}

/// Keyboard event subscription.
///
/// Listens for all key presses to drive slide navigation. Registered once
/// for the lifetime of the application, torn down with it.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// Frame tick subscription (~60 fps).
///
/// Always on: the ambient background animates continuously, and the
/// transition machine rides the same tick.
fn frame_subscription() -> Subscription<Message> {
    time::every(FRAME_PERIOD).map(Message::AnimationTick)
}

/// Choreography beat subscription.
///
/// The period comes from the mounted slide's state: the active baseline's
/// beat period on the related-work slide, the fixed stage-beat period on
/// the methodology slide. Returns no subscription once the current
/// choreography is terminal - further firings would be no-ops, so the
/// timer simply stops existing.
fn beat_subscription(state: &AppState) -> Subscription<Message> {
    match state.slide_ui.beat_period() {
        Some(period) => time::every(period).map(|_| Message::SimulationTick),
        None => Subscription::none(),
    }
}

/// Auto-advance subscription for the methodology pipeline.
///
/// Active only while that slide is mounted and still in demo mode; the
/// first manual stage selection flips the condition off and the timer is
/// gone for the rest of the mount.
fn auto_advance_subscription(state: &AppState) -> Subscription<Message> {
    if state.slide_ui.wants_auto_advance() {
        time::every(AUTO_ADVANCE_PERIOD).map(|_| Message::PipelineTick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    // Note: subscription wiring requires an Iced runtime and is not
    // unit-testable here. The conditions it keys on are covered by the
    // `SlideUi::beat_period` / `wants_auto_advance` tests in `state`.
}
