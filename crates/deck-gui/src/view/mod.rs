//! View layer.
//!
//! Views are pure functions over `AppState`. The deck renders as a stack:
//! the ambient background canvas at the bottom, then the chrome (header,
//! navigation pill, keyboard hint) framing the staged slide content.

pub mod layout;
pub mod slides;

use iced::widget::{Space, container, stack};
use iced::{Element, Length, Padding};

use deck_core::SlidePose;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{VOID, with_alpha};

/// Render the whole window.
pub fn view_deck(state: &AppState) -> Element<'_, Message> {
    let slide = state.visible_slide();
    let pose = state.transition.pose(state.frame_now);
    let content = staged(slides::view_slide(state, slide), pose);

    stack![state.background.view(), layout::chrome(state, slide, content)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Apply a transition pose to slide content.
///
/// Lateral travel becomes an asymmetric padding shift (the tilt folds into
/// it - a 2-D scene renders the slight 3-D lean as extra drift), and
/// opacity becomes a void-colored veil stacked over the content: fading
/// toward black over a black background is indistinguishable from alpha.
fn staged(content: Element<'_, Message>, pose: SlidePose) -> Element<'_, Message> {
    let shift = pose.offset + pose.tilt * 2.0;
    let shifted = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 0.0,
            bottom: 0.0,
            left: (2.0 * shift).max(0.0),
            right: (-2.0 * shift).max(0.0),
        });

    let veil_alpha = (1.0 - pose.opacity).clamp(0.0, 1.0);
    let veil = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(with_alpha(VOID, veil_alpha).into()),
            ..Default::default()
        });

    stack![shifted, veil].into()
}
