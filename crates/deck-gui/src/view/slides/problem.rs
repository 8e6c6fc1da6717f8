//! Problem formulation slide: semantic drift and knowledge cutoffs.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Border, Element, Font, Length};
use iced_fonts::lucide;

use crate::component::glass_panel;
use crate::message::Message;
use crate::theme::{
    ACCENT, DANGER, DANGER_SOFT, RADIUS_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    SUCCESS, TEXT_DIM, WHITE_05, WHITE_10, panel_glass, with_alpha,
};

pub fn view() -> Element<'static, Message> {
    let statement = column![
        text("Semantic Drift &").size(30),
        text("Knowledge Cutoffs").size(30),
        Space::new().height(SPACING_MD),
        text(
            "LLMs trained on general corpora fail to detect high-risk \
             behaviors in niche subcultures due to two fundamental \
             limitations in their architecture.",
        )
        .size(15)
        .color(TEXT_DIM),
        Space::new().height(SPACING_LG),
        limitation_card(
            lucide::clock_three().size(20).color(ACCENT).into(),
            "Temporal Latency",
            "Subcultural slang evolves faster than model training cycles. \
             \"Static\" knowledge bases become obsolete within weeks.",
        ),
        Space::new().height(SPACING_MD),
        limitation_card(
            lucide::globe().size(20).color(ACCENT).into(),
            "Contextual Misalignment",
            "Benign dictionary definitions are repurposed. The semantic gap \
             between general usage and subcultural intent leads to false \
             negatives.",
        ),
    ]
    .width(Length::FillPortion(5));

    let case_table = container(
        column![
            row![
                text("CASE STUDY: POLYSEMY IN \"JIRAI KEI\"")
                    .size(11)
                    .color(TEXT_DIM)
                    .font(Font::MONOSPACE),
                Space::new().width(Length::Fill),
                risk_chip(),
            ]
            .align_y(Alignment::Center),
            Space::new().height(SPACING_MD),
            table_header(),
            polysemy_row(
                "\"Take Pills\"",
                "Medical adherence, vitamins, maintaining health.",
                "Benign",
                "Overdose (OD), escapism, self-harm ritual.",
            ),
            polysemy_row(
                "\"Angel\"",
                "Divine being, symbol of purity, moral goodness.",
                "Positive Sentiment",
                "Reference to Jumping (Suicide), \"flying\" away.",
            ),
            Space::new().height(SPACING_MD),
            container(
                text(
                    "Figure 1: Comparison of semantic interpretations between \
                     base foundation models and subcultural context.",
                )
                .size(11)
                .color(TEXT_DIM),
            )
            .center_x(Length::Fill),
        ],
    )
    .padding(SPACING_LG)
    .style(panel_glass)
    .width(Length::FillPortion(7));

    container(
        row![statement, case_table]
            .spacing(SPACING_LG)
            .align_y(Alignment::Center)
            .width(Length::Fill),
    )
    .center_y(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn limitation_card(
    icon: Element<'static, Message>,
    title: &'static str,
    body: &'static str,
) -> Element<'static, Message> {
    glass_panel(
        column![
            row![icon, text(title).size(15)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
            text(body).size(13).color(TEXT_DIM),
        ]
        .spacing(SPACING_SM),
    )
}

fn risk_chip() -> Element<'static, Message> {
    container(text("High Risk Factor").size(11).color(DANGER))
        .padding([SPACING_XS, SPACING_SM])
        .style(|_theme| iced::widget::container::Style {
            background: Some(DANGER_SOFT.into()),
            border: Border {
                color: with_alpha(DANGER, 0.2),
                width: 1.0,
                radius: RADIUS_SM.into(),
            },
            ..Default::default()
        })
        .into()
}

fn table_header() -> Element<'static, Message> {
    container(
        row![
            text("TERM").size(11).color(TEXT_DIM).width(Length::FillPortion(2)),
            text("GENERAL CORPUS MEANING")
                .size(11)
                .color(TEXT_DIM)
                .width(Length::FillPortion(3)),
            text("SUBCULTURAL INTENT")
                .size(11)
                .color(DANGER)
                .width(Length::FillPortion(3)),
        ]
        .spacing(SPACING_MD),
    )
    .padding(SPACING_SM + 4.0)
    .style(|_theme| iced::widget::container::Style {
        background: Some(WHITE_05.into()),
        ..Default::default()
    })
    .into()
}

fn polysemy_row(
    term: &'static str,
    general: &'static str,
    general_tag: &'static str,
    subcultural: &'static str,
) -> Element<'static, Message> {
    container(
        row![
            text(term)
                .size(16)
                .font(Font::MONOSPACE)
                .width(Length::FillPortion(2)),
            column![
                text(general).size(12).color(TEXT_DIM),
                text(format!("● {general_tag}")).size(10).color(SUCCESS),
            ]
            .spacing(SPACING_XS)
            .width(Length::FillPortion(3)),
            column![
                text(subcultural).size(12),
                row![
                    lucide::circle_alert().size(10).color(DANGER),
                    text("Critical Danger").size(10).color(DANGER),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            ]
            .spacing(SPACING_XS)
            .width(Length::FillPortion(3)),
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center),
    )
    .padding(SPACING_MD)
    .style(|_theme| iced::widget::container::Style {
        border: Border {
            color: WHITE_10,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    })
    .into()
}
