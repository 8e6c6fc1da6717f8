//! Window chrome framing the slide content.
//!
//! Minimalist academic header (venue line, deck title, section label,
//! slide counter), the floating navigation pill, and the keyboard hint.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Font, Length};
use iced_fonts::lucide;

use deck_core::Slide;

use crate::component::nav_pill;
use crate::constants::{DECK_TITLE, VENUE_LINE};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    ACCENT, SPACING_LG, SPACING_MD, SPACING_XS, TEXT_DIM, TEXT_FAINT, WHITE_10, chrome_bar,
    with_alpha,
};

/// Frame `content` with the header and bottom controls.
pub fn chrome<'a>(
    state: &'a AppState,
    slide: &'a Slide,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    column![
        header(state, slide),
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([SPACING_MD, SPACING_LG]),
        footer(state),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn header<'a>(state: &'a AppState, slide: &'a Slide) -> Element<'a, Message> {
    let branding = column![
        text(VENUE_LINE).size(11).color(ACCENT),
        text(DECK_TITLE).size(13),
    ]
    .spacing(SPACING_XS);

    let section = column![
        text("SECTION")
            .size(9)
            .color(TEXT_FAINT)
            .font(Font::MONOSPACE),
        text(format!("{} — {}", slide.section, slide.title)).size(12),
    ]
    .spacing(SPACING_XS)
    .align_x(Alignment::End);

    let divider = container(Space::new().width(1).height(28)).style(|_theme| {
        iced::widget::container::Style {
            background: Some(WHITE_10.into()),
            ..Default::default()
        }
    });

    let counter = text(format!(
        "{:02} / {:02}",
        state.sequencer.current() + 1,
        state.sequencer.len()
    ))
    .size(12)
    .color(TEXT_DIM)
    .font(Font::MONOSPACE);

    container(
        row![
            branding,
            Space::new().width(Length::Fill),
            section,
            divider,
            counter,
        ]
        .spacing(SPACING_LG)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([SPACING_MD, SPACING_LG])
    .style(chrome_bar)
    .into()
}

fn footer(state: &AppState) -> Element<'_, Message> {
    let hint = row![
        lucide::keyboard()
            .size(14)
            .color(with_alpha(iced::Color::WHITE, 0.10)),
        text("USE ARROW KEYS")
            .size(10)
            .color(with_alpha(iced::Color::WHITE, 0.10))
            .font(Font::MONOSPACE),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    row![
        container(Space::new()).width(Length::FillPortion(1)),
        nav_pill(!state.sequencer.is_first(), !state.sequencer.is_last()),
        container(hint)
            .width(Length::FillPortion(1))
            .align_x(Alignment::End),
    ]
    .padding([SPACING_MD, SPACING_LG])
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}
