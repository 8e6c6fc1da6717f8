//! The slide catalogue.
//!
//! A deck is an ordered, immutable sequence of slides defined once at
//! startup. Slides carry their ordinal position, a stable type tag, and
//! display metadata; the catalogue invariants (contiguous ordinals,
//! unique tags, non-empty) are validated on construction.

use thiserror::Error;

// =============================================================================
// SLIDE TAG
// =============================================================================

/// Stable identity tag for a slide.
///
/// Tags are what collaborators key off: the ambient background picks its
/// tint from the active tag, and per-slide UI state is constructed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideTag {
    /// Title slide - research context and motivation.
    Intro,
    /// Problem formulation.
    Problem,
    /// Related work - baseline comparison gallery.
    RelatedWork,
    /// Methodology - pipeline walkthrough.
    Methodology,
    /// Evaluation results.
    Results,
    /// Research roadmap.
    FutureWork,
    /// Summary and resources.
    Conclusion,
    /// Bibliography.
    References,
}

impl SlideTag {
    /// All tags in presentation order.
    pub const ALL: [SlideTag; 8] = [
        Self::Intro,
        Self::Problem,
        Self::RelatedWork,
        Self::Methodology,
        Self::Results,
        Self::FutureWork,
        Self::Conclusion,
        Self::References,
    ];
}

// =============================================================================
// SLIDE
// =============================================================================

/// One full-screen content unit in the fixed linear sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Position in the deck, contiguous from 0.
    pub ordinal: usize,
    /// Stable identity tag.
    pub tag: SlideTag,
    /// Display title shown in the chrome header.
    pub title: &'static str,
    /// Secondary line under the title.
    pub subtitle: &'static str,
    /// Zero-padded section label ("01".."08").
    pub section: &'static str,
}

// =============================================================================
// DECK
// =============================================================================

/// Catalogue construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    /// A deck must contain at least one slide.
    #[error("deck contains no slides")]
    Empty,

    /// Two slides share the same tag.
    #[error("duplicate slide tag {tag:?}")]
    DuplicateTag {
        /// The tag that appeared more than once.
        tag: SlideTag,
    },

    /// A slide's declared ordinal does not match its position.
    #[error("slide {tag:?} declares ordinal {declared} but sits at position {actual}")]
    OrdinalMismatch {
        /// Tag of the offending slide.
        tag: SlideTag,
        /// Ordinal the slide declares.
        declared: usize,
        /// Position it actually occupies.
        actual: usize,
    },
}

/// The immutable, ordered slide catalogue.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Validate and build a catalogue from an ordered slide list.
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        for (position, slide) in slides.iter().enumerate() {
            if slide.ordinal != position {
                return Err(DeckError::OrdinalMismatch {
                    tag: slide.tag,
                    declared: slide.ordinal,
                    actual: position,
                });
            }
            if slides[..position].iter().any(|s| s.tag == slide.tag) {
                return Err(DeckError::DuplicateTag { tag: slide.tag });
            }
        }
        Ok(Self { slides })
    }

    /// The eight-slide SAS research deck.
    pub fn standard() -> Self {
        // Built literally rather than through `new()`: the catalogue is a
        // compile-time constant whose invariants are covered by tests.
        Self {
            slides: vec![
                Slide {
                    ordinal: 0,
                    tag: SlideTag::Intro,
                    title: "Introduction",
                    subtitle: "Research Context & Motivation",
                    section: "01",
                },
                Slide {
                    ordinal: 1,
                    tag: SlideTag::Problem,
                    title: "Problem Formulation",
                    subtitle: "Semantic Drift in Digital Subcultures",
                    section: "02",
                },
                Slide {
                    ordinal: 2,
                    tag: SlideTag::RelatedWork,
                    title: "Related Work",
                    subtitle: "Baseline Architectures & Gaps",
                    section: "03",
                },
                Slide {
                    ordinal: 3,
                    tag: SlideTag::Methodology,
                    title: "Methodology",
                    subtitle: "The SAS Framework Architecture",
                    section: "04",
                },
                Slide {
                    ordinal: 4,
                    tag: SlideTag::Results,
                    title: "Evaluation",
                    subtitle: "Performance on JiraiBench",
                    section: "05",
                },
                Slide {
                    ordinal: 5,
                    tag: SlideTag::FutureWork,
                    title: "Future Work",
                    subtitle: "Research Roadmap",
                    section: "06",
                },
                Slide {
                    ordinal: 6,
                    tag: SlideTag::Conclusion,
                    title: "Conclusion",
                    subtitle: "Summary & Resources",
                    section: "07",
                },
                Slide {
                    ordinal: 7,
                    tag: SlideTag::References,
                    title: "References",
                    subtitle: "Bibliography",
                    section: "08",
                },
            ],
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// A deck is never empty once constructed; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Slide at `index`, clamped to the last slide when out of range.
    ///
    /// Total by construction: the deck is non-empty.
    pub fn clamped(&self, index: usize) -> &Slide {
        &self.slides[index.min(self.slides.len() - 1)]
    }

    /// All slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(ordinal: usize, tag: SlideTag) -> Slide {
        Slide {
            ordinal,
            tag,
            title: "t",
            subtitle: "s",
            section: "00",
        }
    }

    #[test]
    fn standard_deck_is_valid() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 8);
        // Re-validate the literal catalogue through the checked constructor.
        let revalidated = Deck::new(deck.slides().to_vec());
        assert!(revalidated.is_ok());
        assert_eq!(deck.slides()[0].section, "01");
        assert_eq!(deck.slides()[7].section, "08");
        assert_eq!(deck.slides()[7].tag, SlideTag::References);
    }

    #[test]
    fn rejects_empty_deck() {
        assert_eq!(Deck::new(Vec::new()).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn rejects_duplicate_tags() {
        let err = Deck::new(vec![slide(0, SlideTag::Intro), slide(1, SlideTag::Intro)])
            .unwrap_err();
        assert_eq!(
            err,
            DeckError::DuplicateTag {
                tag: SlideTag::Intro
            }
        );
    }

    #[test]
    fn rejects_non_contiguous_ordinals() {
        let err = Deck::new(vec![slide(0, SlideTag::Intro), slide(3, SlideTag::Problem)])
            .unwrap_err();
        assert_eq!(
            err,
            DeckError::OrdinalMismatch {
                tag: SlideTag::Problem,
                declared: 3,
                actual: 1,
            }
        );
    }

    #[test]
    fn clamped_saturates_at_last_slide() {
        let deck = Deck::standard();
        assert_eq!(deck.clamped(3).ordinal, 3);
        assert_eq!(deck.clamped(999).ordinal, 7);
    }
}
