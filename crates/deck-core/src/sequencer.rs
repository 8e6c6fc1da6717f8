//! Global slide position and navigation direction.
//!
//! `SlideSequencer` is a boundary-saturating counter, not a cyclic one:
//! advancing past the last slide (or retreating past the first) is a
//! silent no-op. Wraparound would be disorienting in a linear narrative.

// =============================================================================
// DIRECTION
// =============================================================================

/// Sign of the most recent navigation step.
///
/// Set immediately before an index change and read once by the transition
/// layer to pick an animation pose. Carries no meaning while no transition
/// is in flight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward earlier slides.
    Backward,
    /// Initial load - no travel, content fades in in place.
    #[default]
    None,
    /// Toward later slides.
    Forward,
}

impl Direction {
    /// The direction of travel from `from` to `to`.
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Self::Backward,
            std::cmp::Ordering::Equal => Self::None,
            std::cmp::Ordering::Greater => Self::Forward,
        }
    }

    /// Numeric sign: -1, 0, or +1.
    pub fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::None => 0,
            Self::Forward => 1,
        }
    }
}

// =============================================================================
// SEQUENCER
// =============================================================================

/// Owns the current slide index and the direction of travel.
///
/// The index invariant `0 <= current < len` holds at all times; no
/// operation can violate it or fail. Only the sequencer mutates the
/// navigation state - every other component reads the index as input.
#[derive(Debug, Clone)]
pub struct SlideSequencer {
    current: usize,
    direction: Direction,
    len: usize,
}

impl SlideSequencer {
    /// Sequencer over `len` slides, starting at index 0.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            direction: Direction::None,
            len: len.max(1),
        }
    }

    /// Current slide index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Direction of the most recent index change.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of slides under navigation.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false - the sequencer covers at least one slide.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the first slide is active.
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Whether the last slide is active.
    pub fn is_last(&self) -> bool {
        self.current == self.len - 1
    }

    /// Advance one slide. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.len {
            self.direction = Direction::Forward;
            self.current += 1;
            tracing::debug!(index = self.current, "navigate forward");
            true
        } else {
            false
        }
    }

    /// Retreat one slide. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.direction = Direction::Backward;
            self.current -= 1;
            tracing::debug!(index = self.current, "navigate backward");
            true
        } else {
            false
        }
    }

    /// Jump directly to `index`, clamped into range.
    ///
    /// Sets the direction to the sign of the travel; a jump to the current
    /// slide (after clamping) is a no-op and returns false.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let target = index.min(self.len - 1);
        if target == self.current {
            return false;
        }
        self.direction = Direction::between(self.current, target);
        self.current = target;
        tracing::debug!(index = self.current, "navigate jump");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_with_no_direction() {
        let seq = SlideSequencer::new(8);
        assert_eq!(seq.current(), 0);
        assert_eq!(seq.direction(), Direction::None);
        assert!(seq.is_first());
    }

    #[test]
    fn next_saturates_at_last_slide() {
        let mut seq = SlideSequencer::new(3);
        assert!(seq.next());
        assert!(seq.next());
        assert!(seq.is_last());
        // Further presses are silent no-ops.
        assert!(!seq.next());
        assert_eq!(seq.current(), 2);
        assert_eq!(seq.direction(), Direction::Forward);
    }

    #[test]
    fn previous_at_zero_is_a_no_op() {
        let mut seq = SlideSequencer::new(3);
        assert!(!seq.previous());
        assert_eq!(seq.current(), 0);
        assert_eq!(seq.direction(), Direction::None);
    }

    #[test]
    fn next_then_previous_round_trips() {
        let mut seq = SlideSequencer::new(5);
        seq.next();
        seq.previous();
        assert_eq!(seq.current(), 0);
        assert_eq!(seq.direction(), Direction::Backward);
    }

    #[test]
    fn jump_clamps_and_sets_direction() {
        let mut seq = SlideSequencer::new(4);
        assert!(seq.jump_to(99));
        assert_eq!(seq.current(), 3);
        assert_eq!(seq.direction(), Direction::Forward);

        assert!(seq.jump_to(0));
        assert_eq!(seq.direction(), Direction::Backward);

        // Jump to the current slide does not touch the direction.
        assert!(!seq.jump_to(0));
        assert_eq!(seq.direction(), Direction::Backward);
    }

    #[test]
    fn direction_between() {
        assert_eq!(Direction::between(2, 5), Direction::Forward);
        assert_eq!(Direction::between(5, 2), Direction::Backward);
        assert_eq!(Direction::between(3, 3), Direction::None);
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::Backward.sign(), -1);
        assert_eq!(Direction::None.sign(), 0);
    }
}
