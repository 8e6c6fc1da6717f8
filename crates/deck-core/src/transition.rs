//! Exit-then-enter slide transition state machine.
//!
//! Keyed strictly by the slide index: a navigation change is the only
//! trigger. The machine runs in "wait" mode - the outgoing slide animates
//! fully off before the incoming slide begins, so two animated panels are
//! never on screen at once. The mount swap (and with it the reset of all
//! per-slide state) happens exactly once per transition, at the
//! exit-to-enter boundary.

use std::time::{Duration, Instant};

use crate::easing::{CubicBezier, EASE_SLIDE};
use crate::sequencer::Direction;

// =============================================================================
// TIMING & POSE
// =============================================================================

/// Presentation parameters for one transition leg.
///
/// Travel and fade run over independent durations; opacity settles before
/// the lateral motion does. The numbers are presentation tuning, not a
/// correctness contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    /// Duration of the lateral offset and tilt tween.
    pub travel: Duration,
    /// Duration of the opacity tween.
    pub fade: Duration,
    /// Off-screen lateral distance, in logical pixels.
    pub offset: f32,
    /// Off-center tilt, in degrees.
    pub tilt: f32,
    /// Curve applied to travel and tilt.
    pub curve: CubicBezier,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            travel: Duration::from_millis(800),
            fade: Duration::from_millis(400),
            offset: 800.0,
            tilt: 15.0,
            curve: EASE_SLIDE,
        }
    }
}

/// Visual pose of the slide panel at one instant of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePose {
    /// Horizontal displacement from center, in logical pixels.
    pub offset: f32,
    /// Panel opacity in `[0, 1]`.
    pub opacity: f32,
    /// Tilt in degrees; positive leans the right edge away.
    pub tilt: f32,
}

impl SlidePose {
    /// The at-rest pose: centered, opaque, flat.
    pub const CENTERED: SlidePose = SlidePose {
        offset: 0.0,
        opacity: 1.0,
        tilt: 0.0,
    };
}

/// Off-screen pose a slide enters from, given the direction of travel.
///
/// Moving forward brings new content in from the right; moving backward
/// mirrors. Direction `None` (initial load) applies no offset - content
/// fades in in place.
fn enter_pose(direction: Direction, timing: &TransitionTiming) -> SlidePose {
    let sign = f32::from(direction.sign());
    SlidePose {
        offset: sign * timing.offset,
        opacity: 0.0,
        tilt: sign * timing.tilt,
    }
}

/// Off-screen pose a slide exits toward - the mirror of `enter_pose`.
fn exit_pose(direction: Direction, timing: &TransitionTiming) -> SlidePose {
    let sign = f32::from(direction.sign());
    SlidePose {
        offset: -sign * timing.offset,
        opacity: 0.0,
        tilt: -sign * timing.tilt,
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// =============================================================================
// COORDINATOR
// =============================================================================

/// Stage of the wait-mode machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// No transition in flight; the mounted slide sits at rest.
    Idle,
    /// The mounted slide is animating off toward `to`.
    Exiting { to: usize, direction: Direction },
    /// The freshly mounted slide is animating on.
    Entering { direction: Direction },
}

/// Lifecycle notifications produced by `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The exit leg completed; the named slide is now the mounted one.
    /// Hosts rebuild per-slide state here.
    MountSwapped(usize),
    /// The enter leg completed; the machine is idle on the named slide.
    Finished(usize),
}

/// Renders exactly one slide at a time while choreographing handoff.
///
/// Policy for a navigation request arriving mid-transition: interrupt and
/// retarget. The exit leg restarts from whatever slide is currently
/// visible toward the new target, so the machine always converges on the
/// sequencer's current index.
#[derive(Debug, Clone)]
pub struct TransitionCoordinator {
    timing: TransitionTiming,
    stage: Stage,
    /// Index of the slide whose content is mounted right now.
    mounted: usize,
    /// Start of the stage currently animating.
    started: Instant,
}

impl TransitionCoordinator {
    /// Coordinator performing the initial fade-in of `initial`.
    pub fn new(initial: usize, now: Instant) -> Self {
        Self::with_timing(initial, now, TransitionTiming::default())
    }

    /// Coordinator with explicit timing, for tests and tuning.
    pub fn with_timing(initial: usize, now: Instant, timing: TransitionTiming) -> Self {
        Self {
            timing,
            // Initial load enters with no direction: fade in, in place.
            stage: Stage::Entering {
                direction: Direction::None,
            },
            mounted: initial,
            started: now,
        }
    }

    /// Whether no transition is in flight.
    pub fn is_idle(&self) -> bool {
        self.stage == Stage::Idle
    }

    /// Index of the slide currently rendered.
    ///
    /// During the exit leg this is still the outgoing slide; everywhere
    /// else it is the (possibly just-mounted) current slide.
    pub fn visible_slide(&self) -> usize {
        self.mounted
    }

    /// Begin (or retarget) a transition toward `to`.
    ///
    /// Whatever leg is in flight, the machine restarts its exit from the
    /// currently visible slide. Retargeting back to the visible slide runs
    /// a full exit/enter round trip, which remounts it - revisiting always
    /// resets per-slide state.
    pub fn start(&mut self, to: usize, direction: Direction, now: Instant) {
        if !self.is_idle() {
            tracing::debug!(from = self.mounted, to, "transition retargeted");
        }
        self.stage = Stage::Exiting { to, direction };
        self.started = now;
    }

    /// Advance the machine to `now`.
    ///
    /// Returns at most one lifecycle event per call; the host is expected
    /// to tick at frame rate, far faster than a leg duration.
    pub fn tick(&mut self, now: Instant) -> Option<TransitionEvent> {
        let elapsed = now.duration_since(self.started);
        match self.stage {
            Stage::Idle => None,
            Stage::Exiting { to, direction } => {
                if elapsed < self.timing.travel {
                    return None;
                }
                self.mounted = to;
                self.stage = Stage::Entering { direction };
                self.started = now;
                tracing::debug!(index = to, "slide mounted");
                Some(TransitionEvent::MountSwapped(to))
            }
            Stage::Entering { .. } => {
                if elapsed < self.timing.travel {
                    return None;
                }
                self.stage = Stage::Idle;
                Some(TransitionEvent::Finished(self.mounted))
            }
        }
    }

    /// Pose of the visible slide at `now`.
    pub fn pose(&self, now: Instant) -> SlidePose {
        let elapsed = now.duration_since(self.started);
        let travel_t = fraction(elapsed, self.timing.travel);
        let fade_t = fraction(elapsed, self.timing.fade);
        let eased = self.timing.curve.ease(travel_t);

        match self.stage {
            Stage::Idle => SlidePose::CENTERED,
            Stage::Exiting { direction, .. } => {
                let target = exit_pose(direction, &self.timing);
                SlidePose {
                    offset: lerp(0.0, target.offset, eased),
                    opacity: lerp(1.0, 0.0, fade_t),
                    tilt: lerp(0.0, target.tilt, eased),
                }
            }
            Stage::Entering { direction } => {
                let from = enter_pose(direction, &self.timing);
                SlidePose {
                    offset: lerp(from.offset, 0.0, eased),
                    opacity: lerp(0.0, 1.0, fade_t),
                    tilt: lerp(from.tilt, 0.0, eased),
                }
            }
        }
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TransitionTiming {
        TransitionTiming::default()
    }

    fn after(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn initial_load_fades_in_place() {
        let t0 = Instant::now();
        let coord = TransitionCoordinator::new(0, t0);
        let pose = coord.pose(after(t0, 200));
        assert_eq!(pose.offset, 0.0);
        assert_eq!(pose.tilt, 0.0);
        assert!(pose.opacity > 0.0 && pose.opacity < 1.0);
    }

    #[test]
    fn initial_enter_finishes_without_mount_swap() {
        let t0 = Instant::now();
        let mut coord = TransitionCoordinator::new(0, t0);
        assert_eq!(coord.tick(after(t0, 100)), None);
        assert_eq!(
            coord.tick(after(t0, 900)),
            Some(TransitionEvent::Finished(0))
        );
        assert!(coord.is_idle());
        assert_eq!(coord.pose(after(t0, 1000)), SlidePose::CENTERED);
    }

    #[test]
    fn forward_transition_exits_then_enters() {
        let t0 = Instant::now();
        let mut coord = TransitionCoordinator::with_timing(0, t0, timing());
        coord.tick(after(t0, 900));

        let t1 = after(t0, 1000);
        coord.start(1, Direction::Forward, t1);
        assert_eq!(coord.visible_slide(), 0, "old content stays up during exit");

        // Midway through the exit the old slide is pushed left and fading.
        let pose = coord.pose(after(t0, 1400));
        assert!(pose.offset < 0.0);
        assert!(pose.tilt < 0.0);
        assert_eq!(pose.opacity, 0.0, "fade completes before travel does");

        // Exit leg completes: the mount swaps exactly once.
        assert_eq!(
            coord.tick(after(t0, 1810)),
            Some(TransitionEvent::MountSwapped(1))
        );
        assert_eq!(coord.visible_slide(), 1);

        // The new slide enters from the right.
        let pose = coord.pose(after(t0, 1815));
        assert!(pose.offset > 0.0);
        assert!(pose.tilt > 0.0);
        assert!(pose.opacity < 0.1);

        assert_eq!(
            coord.tick(after(t0, 2700)),
            Some(TransitionEvent::Finished(1))
        );
        assert!(coord.is_idle());
    }

    #[test]
    fn backward_transition_mirrors_poses() {
        let t0 = Instant::now();
        let mut coord = TransitionCoordinator::with_timing(3, t0, timing());
        coord.tick(after(t0, 900));

        coord.start(2, Direction::Backward, after(t0, 1000));
        let pose = coord.pose(after(t0, 1200));
        assert!(pose.offset > 0.0, "backward exit pushes old content right");

        coord.tick(after(t0, 1900));
        let pose = coord.pose(after(t0, 1905));
        assert!(pose.offset < 0.0, "backward enter arrives from the left");
    }

    #[test]
    fn retarget_mid_exit_converges_on_new_target() {
        let t0 = Instant::now();
        let mut coord = TransitionCoordinator::with_timing(0, t0, timing());
        coord.tick(after(t0, 900));

        coord.start(1, Direction::Forward, after(t0, 1000));
        // A second press lands before the exit completes.
        coord.start(2, Direction::Forward, after(t0, 1200));
        assert_eq!(coord.visible_slide(), 0);

        assert_eq!(
            coord.tick(after(t0, 2100)),
            Some(TransitionEvent::MountSwapped(2)),
            "intermediate slide 1 is never mounted"
        );
        assert_eq!(
            coord.tick(after(t0, 3000)),
            Some(TransitionEvent::Finished(2))
        );
    }

    #[test]
    fn retarget_mid_enter_exits_the_partially_entered_slide() {
        let t0 = Instant::now();
        let mut coord = TransitionCoordinator::with_timing(0, t0, timing());
        coord.tick(after(t0, 900));

        coord.start(1, Direction::Forward, after(t0, 1000));
        coord.tick(after(t0, 1810)); // mount swap to 1
        // Retreat while slide 1 is still entering.
        coord.start(0, Direction::Backward, after(t0, 2000));
        assert_eq!(coord.visible_slide(), 1);

        assert_eq!(
            coord.tick(after(t0, 2810)),
            Some(TransitionEvent::MountSwapped(0))
        );
        assert_eq!(
            coord.tick(after(t0, 3700)),
            Some(TransitionEvent::Finished(0))
        );
        assert!(coord.is_idle());
    }

    #[test]
    fn zero_duration_timing_resolves_immediately() {
        let t0 = Instant::now();
        let instant_timing = TransitionTiming {
            travel: Duration::ZERO,
            fade: Duration::ZERO,
            ..TransitionTiming::default()
        };
        let mut coord = TransitionCoordinator::with_timing(0, t0, instant_timing);
        assert_eq!(coord.tick(t0), Some(TransitionEvent::Finished(0)));
        coord.start(1, Direction::Forward, t0);
        assert_eq!(coord.tick(t0), Some(TransitionEvent::MountSwapped(1)));
        assert_eq!(coord.tick(t0), Some(TransitionEvent::Finished(1)));
    }
}
