//! Variant selection with replay support.
//!
//! Galleries of simulations let the user pick which variant to watch.
//! Reselecting the already-active variant must restart its demonstration
//! from frame zero rather than being a no-op, so alongside the active
//! variant the selector keeps a monotonically increasing replay token.
//! The composite `(variant, token)` key is the remount identity: hosts
//! rebuild the variant's phase choreography whenever it changes.

/// Outcome of a `select` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A different variant became active; the replay token reset to 0.
    Switched,
    /// The active variant was reselected; the replay token advanced.
    Replayed,
}

/// Tracks the selected variant plus a replay counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayableSelector<V> {
    active: V,
    replay: u32,
}

impl<V: Copy + PartialEq> ReplayableSelector<V> {
    /// Selector with `initial` active and a zero replay token.
    pub fn new(initial: V) -> Self {
        Self {
            active: initial,
            replay: 0,
        }
    }

    /// The currently active variant.
    pub fn active(&self) -> V {
        self.active
    }

    /// Replay counter for the active variant.
    ///
    /// Increases by exactly 1 on each reselection of the active variant
    /// and resets to 0 whenever the variant changes. Pure remount key - it
    /// has no meaning beyond forcing re-initialization.
    pub fn replay_token(&self) -> u32 {
        self.replay
    }

    /// Composite remount key. Consumers rendering phase-based choreography
    /// must rebuild their state whenever this changes.
    pub fn key(&self) -> (V, u32) {
        (self.active, self.replay)
    }

    /// Select `variant`. Every call changes the composite key, so every
    /// call requires the host to reinitialize the variant's choreography.
    pub fn select(&mut self, variant: V) -> Selection {
        if variant == self.active {
            self.replay += 1;
            Selection::Replayed
        } else {
            self.active = variant;
            self.replay = 0;
            Selection::Switched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Variant {
        A,
        B,
    }

    #[test]
    fn reselect_bumps_token_and_keeps_variant() {
        let mut sel = ReplayableSelector::new(Variant::A);
        assert_eq!(sel.key(), (Variant::A, 0));

        assert_eq!(sel.select(Variant::A), Selection::Replayed);
        assert_eq!(sel.active(), Variant::A);
        assert_eq!(sel.replay_token(), 1);
    }

    #[test]
    fn switch_resets_token() {
        let mut sel = ReplayableSelector::new(Variant::A);
        sel.select(Variant::A);
        sel.select(Variant::A);
        assert_eq!(sel.replay_token(), 2);

        assert_eq!(sel.select(Variant::B), Selection::Switched);
        assert_eq!(sel.key(), (Variant::B, 0));
    }

    #[test]
    fn every_select_changes_the_composite_key() {
        let mut sel = ReplayableSelector::new(Variant::A);
        let mut seen = vec![sel.key()];
        for variant in [Variant::A, Variant::A, Variant::B, Variant::B, Variant::A] {
            sel.select(variant);
            assert!(!seen.contains(&sel.key()));
            seen.push(sel.key());
        }
    }
}
