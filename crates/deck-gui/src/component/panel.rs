//! Small shared panel and label helpers used across slide views.

use iced::widget;
use iced::widget::{Text, column, container, row, text};
use iced::{Alignment, Border, Element, Font, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{
    RADIUS_MD, RADIUS_SM, SPACING_SM, SPACING_XS, SUCCESS, SUCCESS_SOFT, TEXT_DIM, TEXT_FAINT,
    WHITE_20, panel_glass, with_alpha,
};

/// Glass panel wrapping arbitrary content.
pub fn glass_panel<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(crate::theme::SPACING_LG)
        .style(panel_glass)
        .into()
}

/// Small pink small-caps lead-in line above a heading.
pub fn kicker(label: &'static str) -> Text<'static> {
    text(label)
        .size(11)
        .color(crate::theme::ACCENT)
        .font(Font::MONOSPACE)
}

/// Tiny uppercase mono label for grouping rows.
pub fn section_label(label: &'static str) -> Text<'static> {
    text(label).size(10).color(TEXT_FAINT).font(Font::MONOSPACE)
}

/// The "MODE: X" caption pinned to a simulation panel's corner.
pub fn mode_tag(label: &'static str) -> Element<'static, Message> {
    container(text(label).size(10).color(TEXT_FAINT).font(Font::MONOSPACE))
        .padding([SPACING_XS, SPACING_SM])
        .into()
}

/// "Model Final Output" box shown at the end of a simulation run.
pub fn output_panel(body: &'static str) -> Element<'static, Message> {
    container(
        column![
            text("MODEL FINAL OUTPUT")
                .size(9)
                .color(TEXT_FAINT)
                .font(Font::MONOSPACE),
            text(body).size(11).font(Font::MONOSPACE),
        ]
        .spacing(SPACING_XS),
    )
    .padding(SPACING_SM + 4.0)
    .width(Length::Fill)
    .style(|_theme| widget::container::Style {
        background: Some(crate::theme::PANEL.into()),
        border: Border {
            color: WHITE_20,
            width: 1.0,
            radius: RADIUS_SM.into(),
        },
        ..Default::default()
    })
    .into()
}

/// Green verdict banner ("ALIGNED", "CONTEXT VERIFIED", ...).
pub fn verdict_panel(title: &'static str, caption: &'static str) -> Element<'static, Message> {
    container(
        column![
            row![
                lucide::circle_check().size(14).color(SUCCESS),
                text(title).size(12).color(SUCCESS),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
            text(caption).size(10).color(TEXT_DIM),
        ]
        .spacing(SPACING_XS),
    )
    .padding(SPACING_SM + 2.0)
    .width(Length::Fill)
    .style(|_theme| widget::container::Style {
        background: Some(SUCCESS_SOFT.into()),
        border: Border {
            color: with_alpha(SUCCESS, 0.5),
            width: 1.0,
            radius: RADIUS_MD.into(),
        },
        ..Default::default()
    })
    .into()
}
