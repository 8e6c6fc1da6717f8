//! Bottom navigation controls.

use iced::widget::{Space, button, container, row};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{SPACING_XS, TEXT_DIM, WHITE_10, ghost_button, pill, with_alpha};

/// The floating prev/next pill.
///
/// Each side is disabled - visually and functionally - at its boundary:
/// no message is wired while the sequencer would ignore it anyway.
pub fn nav_pill(can_prev: bool, can_next: bool) -> Element<'static, Message> {
    let prev = button(
        lucide::chevron_left()
            .size(18)
            .color(nav_icon_color(can_prev)),
    )
    .on_press_maybe(can_prev.then_some(Message::PreviousSlide))
    .padding(12)
    .style(ghost_button);

    let next = button(
        lucide::chevron_right()
            .size(18)
            .color(nav_icon_color(can_next)),
    )
    .on_press_maybe(can_next.then_some(Message::NextSlide))
    .padding(12)
    .style(ghost_button);

    let divider = container(Space::new().width(1).height(16)).style(|_theme| {
        iced::widget::container::Style {
            background: Some(WHITE_10.into()),
            ..Default::default()
        }
    });

    container(
        row![prev, divider, next]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding(4)
    .style(pill)
    .into()
}

fn nav_icon_color(enabled: bool) -> iced::Color {
    if enabled {
        with_alpha(iced::Color::WHITE, 0.7)
    } else {
        with_alpha(TEXT_DIM, 0.2)
    }
}
