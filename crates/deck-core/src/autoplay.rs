//! Auto-advancing demo ticker.
//!
//! Unlike the sequencer this counter is cyclic: it is a looping demo
//! ticker, not a linear narrative position. While enabled, each timer
//! firing advances the step modulo the stage count. The first manual step
//! selection switches to interactive mode for good - within one mount the
//! auto mode never comes back. No operation can fail.

/// Cyclic step counter with a one-way auto-to-manual switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    step: usize,
    len: usize,
    enabled: bool,
}

impl AutoAdvance {
    /// Ticker over `len` stages, starting at step 0 in auto mode.
    pub fn new(len: usize) -> Self {
        Self {
            step: 0,
            len: len.max(1),
            enabled: true,
        }
    }

    /// The active step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of stages cycled through.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false - there is at least one stage.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the ticker still advances on its own.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Timer firing: cycle to the next step while enabled.
    /// Returns whether the step changed.
    pub fn tick(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.step = (self.step + 1) % self.len;
        true
    }

    /// Manual step selection. Clamps into range and permanently disables
    /// auto-advance for this mount.
    pub fn select(&mut self, step: usize) {
        self.step = step.min(self.len - 1);
        self.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_while_enabled() {
        let mut auto = AutoAdvance::new(3);
        assert_eq!(auto.step(), 0);
        auto.tick();
        auto.tick();
        assert_eq!(auto.step(), 2);
        auto.tick();
        assert_eq!(auto.step(), 0, "wraps modulo the stage count");
    }

    #[test]
    fn manual_select_pins_step_and_disables_auto() {
        let mut auto = AutoAdvance::new(3);
        auto.tick();
        auto.select(1);
        assert_eq!(auto.step(), 1);
        assert!(!auto.is_enabled());

        // Once manual, timer firings no longer move the step.
        assert!(!auto.tick());
        assert_eq!(auto.step(), 1);
    }

    #[test]
    fn disable_is_one_way() {
        let mut auto = AutoAdvance::new(4);
        auto.select(2);
        // A second manual selection keeps manual mode; nothing re-enables.
        auto.select(0);
        assert!(!auto.is_enabled());
        assert_eq!(auto.step(), 0);
    }

    #[test]
    fn select_clamps_out_of_range_steps() {
        let mut auto = AutoAdvance::new(3);
        auto.select(99);
        assert_eq!(auto.step(), 2);
    }
}
