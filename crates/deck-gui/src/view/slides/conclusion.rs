//! Conclusion slide: summary and resources.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length};

use crate::message::Message;
use crate::theme::{RADIUS_MD, SPACING_LG, SPACING_MD, SPACING_XS, TEXT_DIM, WHITE_05, WHITE_10};

const PROJECT_URL: &str = "https://github.com/gaivrt/SAS_Demo_Web";

pub fn view() -> Element<'static, Message> {
    let summary = column![
        text("Conclusion").size(30),
        Space::new().height(SPACING_LG),
        text(
            "SAS effectively bridges the gap between static model knowledge \
             and evolving subcultures. By treating alignment as a dynamic \
             retrieval task rather than a training objective, we ensure \
             safer, more accurate diagnostics in high-risk digital spaces.",
        )
        .size(18)
        .color(TEXT_DIM),
    ]
    .align_x(Alignment::Center);

    let resources = row![
        resource_card("Project Page", "github.com/gaivrt/SAS_Demo_Web", Some(PROJECT_URL)),
        resource_card("Full Paper", "ACL 2025 Submission", None),
    ]
    .spacing(SPACING_MD);

    container(
        column![summary, Space::new().height(SPACING_LG), resources]
            .align_x(Alignment::Center)
            .max_width(720.0),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn resource_card(
    title: &'static str,
    caption: &'static str,
    url: Option<&'static str>,
) -> Element<'static, Message> {
    button(
        column![
            text(title).size(13),
            text(caption).size(11).color(TEXT_DIM),
        ]
        .spacing(SPACING_XS),
    )
    .on_press_maybe(url.map(Message::OpenUrl))
    .padding(SPACING_MD + 8.0)
    .width(Length::Fill)
    .style(|_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: Some(if hovered {
                WHITE_05.into()
            } else {
                iced::Color::TRANSPARENT.into()
            }),
            text_color: iced::Color::WHITE,
            border: Border {
                color: WHITE_10,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        }
    })
    .into()
}
