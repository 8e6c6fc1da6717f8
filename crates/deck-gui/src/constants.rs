//! Application identity and presentation timing constants.
//!
//! Centralized so magic strings and tuning values are not scattered
//! throughout the application. Transition timing lives with the engine
//! (`deck_core::TransitionTiming`); the values here belong to the
//! application layer.

use std::time::Duration;

/// Application display name.
pub const APP_NAME: &str = "SAS Research Deck";

/// Application identifier (reverse domain notation).
pub const APP_ID: &str = "com.sasdeck.app";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Venue line shown in the chrome header.
pub const VENUE_LINE: &str = "ACL Submission";

/// Deck title shown in the chrome header.
pub const DECK_TITLE: &str = "Subcultural Alignment Solver";

/// Frame driver period for transition and background animation (~60 fps).
pub const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Period of the methodology slide's auto-advance ticker.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(6);

/// Number of choreography beats in each methodology stage visualization.
pub const STAGE_BEATS: u32 = 3;

/// Period between methodology stage choreography beats.
pub const STAGE_BEAT_PERIOD: Duration = Duration::from_millis(900);
