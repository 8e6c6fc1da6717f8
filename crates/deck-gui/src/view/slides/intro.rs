//! Title slide.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::component::kicker;
use crate::message::Message;
use crate::theme::{
    ACCENT, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, TEXT_DIM, WHITE_10,
    accent_rule,
};

pub fn view() -> Element<'static, Message> {
    let title = column![
        kicker("RESEARCH PRESENTATION"),
        Space::new().height(SPACING_MD),
        text("Can Large Language Models").size(52),
        row![
            text("Keep Up with ").size(52),
            text("Self-Destructive").size(52).color(ACCENT),
        ],
        text("Subcultures?").size(52),
        Space::new().height(SPACING_LG),
        container(Space::new().width(96).height(4)).style(accent_rule),
    ]
    .spacing(SPACING_XS);

    let abstract_block = column![
        text(
            "A case study on the limitations of static LLMs in evolving, \
             high-risk digital environments and a proposed framework for \
             dynamic alignment.",
        )
        .size(17)
        .color(TEXT_DIM),
        Space::new().height(SPACING_LG),
        author_block(),
    ]
    .width(Length::FillPortion(1));

    let fact_sheet = column![
        fact_row("Keywords", "LLM, Mental Health, Alignment"),
        fact_row("Focus", "Subcultural Semantics"),
        fact_row("Method", "Retrieval-Augmented Agents"),
    ]
    .spacing(SPACING_MD)
    .width(Length::FillPortion(1));

    let body = row![abstract_block, fact_sheet]
        .spacing(SPACING_XL + SPACING_LG)
        .width(Length::Fill);

    container(
        column![title, Space::new().height(SPACING_XL), body].max_width(960.0),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn author_block() -> Element<'static, Message> {
    let names = column![
        text("Tao Xilin").size(15),
        text("1220032801").size(12).color(TEXT_DIM),
        text("Supervisor: Li Dagang").size(12).color(TEXT_DIM),
        text("Macau University of Science and Technology")
            .size(12)
            .color(TEXT_DIM),
    ]
    .spacing(SPACING_XS);

    row![
        container(Space::new().width(2).height(80)).style(|_theme| {
            iced::widget::container::Style {
                background: Some(WHITE_10.into()),
                ..Default::default()
            }
        }),
        names,
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center)
    .into()
}

fn fact_row(label: &'static str, value: &'static str) -> Element<'static, Message> {
    column![
        row![
            text(label).size(13).color(TEXT_DIM),
            Space::new().width(Length::Fill),
            text(value).size(13),
        ],
        container(Space::new().width(Length::Fill).height(1)).style(|_theme| {
            iced::widget::container::Style {
                background: Some(WHITE_10.into()),
                ..Default::default()
            }
        }),
    ]
    .spacing(SPACING_SM)
    .into()
}
