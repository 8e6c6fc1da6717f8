//! One view function per slide.

pub mod conclusion;
pub mod future_work;
pub mod intro;
pub mod methodology;
pub mod problem;
pub mod references;
pub mod related_work;
pub mod results;
pub mod scores;

use iced::Element;
use iced::widget::{Column, Row, Space};

/// Restores the `push_maybe` combinator that iced's `Column`/`Row` carried in
/// earlier releases: push the child when `Some`, leave the container untouched
/// when `None`. Behaviour matches the version still shipped on `keyed::Column`.
pub trait PushMaybe<'a, Message, Theme, Renderer> {
    fn push_maybe(
        self,
        child: Option<impl Into<Element<'a, Message, Theme, Renderer>>>,
    ) -> Self;
}

impl<'a, Message, Theme, Renderer> PushMaybe<'a, Message, Theme, Renderer>
    for Column<'a, Message, Theme, Renderer>
where
    Renderer: iced::advanced::Renderer,
{
    fn push_maybe(
        self,
        child: Option<impl Into<Element<'a, Message, Theme, Renderer>>>,
    ) -> Self {
        match child {
            Some(child) => self.push(child),
            None => self,
        }
    }
}

impl<'a, Message, Theme, Renderer> PushMaybe<'a, Message, Theme, Renderer>
    for Row<'a, Message, Theme, Renderer>
where
    Renderer: iced::advanced::Renderer,
{
    fn push_maybe(
        self,
        child: Option<impl Into<Element<'a, Message, Theme, Renderer>>>,
    ) -> Self {
        match child {
            Some(child) => self.push(child),
            None => self,
        }
    }
}

use deck_core::{Slide, SlideTag};

use crate::message::Message;
use crate::state::{AppState, SlideUi};

/// Route the mounted slide to its view.
///
/// Interactive slides read their state from `SlideUi`; the fallback arm
/// only fires in the single frame where a mount swap has not yet landed,
/// and renders nothing rather than stale content.
pub fn view_slide<'a>(state: &'a AppState, slide: &'a Slide) -> Element<'a, Message> {
    match (slide.tag, &state.slide_ui) {
        (SlideTag::Intro, _) => intro::view(),
        (SlideTag::Problem, _) => problem::view(),
        (SlideTag::RelatedWork, SlideUi::RelatedWork { selector, sim }) => {
            related_work::view(selector, sim)
        }
        (SlideTag::Methodology, SlideUi::Methodology { pipeline, stage_sim }) => {
            methodology::view(pipeline, stage_sim)
        }
        (SlideTag::Results, SlideUi::Results { dataset }) => results::view(*dataset),
        (SlideTag::FutureWork, _) => future_work::view(),
        (SlideTag::Conclusion, _) => conclusion::view(),
        (SlideTag::References, _) => references::view(),
        _ => Space::new().into(),
    }
}
