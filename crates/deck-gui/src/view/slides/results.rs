//! Results slide: benchmark tables, dataset toggle, and summary chart.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Border, Element, Font, Length};
use iced_fonts::lucide;

use crate::component::section_label;
use crate::message::Message;
use crate::state::Dataset;
use crate::theme::{
    ACCENT, ACCENT_SOFT, MUTED, RADIUS_MD, RADIUS_SM, SPACING_MD, SPACING_SM,
    SPACING_XS, SUCCESS, SUCCESS_SOFT, TEXT_DIM, TEXT_FAINT, WHITE_05, WHITE_10, glass_card,
    panel_deep, with_alpha,
};

use super::scores::{self, MethodScores};

pub fn view(dataset: Dataset) -> Element<'static, Message> {
    let header = row![
        column![
            text("Experimental Results").size(24),
            text("Comparative analysis of alignment methods across multilingual subcultural datasets.")
                .size(11)
                .color(TEXT_DIM)
                .font(Font::MONOSPACE),
        ]
        .spacing(SPACING_XS),
        Space::new().width(Length::Fill),
        dataset_toggle(dataset),
    ]
    .align_y(Alignment::End)
    .width(Length::Fill);

    let table = container(scrollable(score_table(dataset)).height(Length::Fill))
        .width(Length::FillPortion(8))
        .height(Length::Fill)
        .padding(SPACING_SM)
        .style(panel_deep);

    let sidebar = column![summary_card(dataset), chart_card(dataset)]
        .spacing(SPACING_MD)
        .width(Length::FillPortion(4))
        .height(Length::Fill);

    column![
        header,
        Space::new().height(SPACING_MD),
        row![table, sidebar]
            .spacing(SPACING_MD)
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// =============================================================================
// DATASET TOGGLE
// =============================================================================

fn dataset_toggle(active: Dataset) -> Element<'static, Message> {
    let mut toggle = iced::widget::Row::new().spacing(SPACING_XS);
    for dataset in Dataset::ALL {
        let selected = dataset == active;
        toggle = toggle.push(
            button(
                text(dataset.label())
                    .size(10)
                    .color(if selected { iced::Color::WHITE } else { TEXT_DIM })
                    .font(Font::MONOSPACE),
            )
            .on_press(Message::DatasetSelected(dataset))
            .padding([SPACING_XS, SPACING_SM + 4.0])
            .style(move |_theme, _status| button::Style {
                background: Some(if selected {
                    ACCENT.into()
                } else {
                    iced::Color::TRANSPARENT.into()
                }),
                text_color: iced::Color::WHITE,
                border: Border {
                    radius: RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
    }

    container(toggle)
        .padding(SPACING_XS)
        .style(|_theme| iced::widget::container::Style {
            background: Some(crate::theme::PANEL.into()),
            border: Border {
                color: WHITE_10,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        })
        .into()
}

// =============================================================================
// SCORE TABLE
// =============================================================================

fn score_table(dataset: Dataset) -> Element<'static, Message> {
    let bests = scores::column_bests(dataset);

    let mut table = Column::new()
        .push(table_caption())
        .push(model_header())
        .spacing(SPACING_XS);

    for method in scores::rows(dataset) {
        table = table.push(method_block(method, &bests));
    }

    table.width(Length::Fill).into()
}

fn table_caption() -> Element<'static, Message> {
    row![
        lucide::table().size(12).color(TEXT_FAINT),
        text("METHOD PERFORMANCE EVALUATION (MACRO-F1)")
            .size(10)
            .color(TEXT_FAINT)
            .font(Font::MONOSPACE),
        Space::new().width(Length::Fill),
        legend_dot(SUCCESS, "Best"),
        legend_dot(ACCENT, "Ours"),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .padding(SPACING_SM)
    .into()
}

fn legend_dot(tone: iced::Color, label: &'static str) -> Element<'static, Message> {
    row![
        container(Space::new().width(8).height(8)).style(move |_theme| {
            iced::widget::container::Style {
                background: Some(with_alpha(tone, 0.2).into()),
                border: Border {
                    color: with_alpha(tone, 0.5),
                    width: 1.0,
                    radius: crate::theme::RADIUS_FULL.into(),
                },
                ..Default::default()
            }
        }),
        text(label).size(10).color(TEXT_FAINT),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

fn model_header() -> Element<'static, Message> {
    let mut header = iced::widget::Row::new()
        .push(text("Method").size(11).width(Length::FillPortion(3)))
        .push(
            text("Task")
                .size(10)
                .color(TEXT_DIM)
                .width(Length::FillPortion(1)),
        )
        .spacing(SPACING_XS);
    for model in scores::MODELS {
        header = header.push(
            text(model.to_uppercase())
                .size(8)
                .color(TEXT_FAINT)
                .font(Font::MONOSPACE)
                .width(Length::FillPortion(2)),
        );
    }
    container(header)
        .padding(SPACING_SM)
        .style(|_theme| iced::widget::container::Style {
            border: Border {
                color: crate::theme::WHITE_20,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn method_block(method: &'static MethodScores, bests: &[[f64; 5]; 3]) -> Element<'static, Message> {
    let mut label = Column::new()
        .push(
            text(method.method)
                .size(11)
                .color(if method.ours { ACCENT } else { iced::Color::WHITE }),
        )
        .spacing(SPACING_XS);
    if let Some(venue) = method.venue {
        label = label.push(
            container(text(venue).size(8).color(TEXT_DIM))
                .padding([1.0, SPACING_XS])
                .style(|_theme| iced::widget::container::Style {
                    background: Some(WHITE_10.into()),
                    border: Border {
                        radius: RADIUS_SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }

    let mut tasks = Column::new().spacing(SPACING_XS);
    for (task_index, task) in scores::TASKS.iter().enumerate() {
        let mut cells = iced::widget::Row::new()
            .push(
                text(*task)
                    .size(10)
                    .color(TEXT_DIM)
                    .font(Font::MONOSPACE)
                    .width(Length::FillPortion(1)),
            )
            .spacing(SPACING_XS);
        for (model_index, score) in method.task(task_index).iter().enumerate() {
            let is_best = (score - bests[task_index][model_index]).abs() < 1e-4;
            let color = if is_best {
                SUCCESS
            } else if method.ours {
                iced::Color::WHITE
            } else {
                TEXT_DIM
            };
            cells = cells.push(
                text(format!("{score:.4}"))
                    .size(10)
                    .color(color)
                    .font(Font::MONOSPACE)
                    .width(Length::FillPortion(2)),
            );
        }
        tasks = tasks.push(cells);
    }

    container(
        row![container(label).width(Length::FillPortion(3)), container(tasks).width(Length::FillPortion(11))]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding(SPACING_SM)
    .width(Length::Fill)
    .style(move |_theme| iced::widget::container::Style {
        background: Some(if method.ours {
            with_alpha(ACCENT, 0.05).into()
        } else {
            iced::Color::TRANSPARENT.into()
        }),
        border: Border {
            color: WHITE_05,
            width: 1.0,
            radius: RADIUS_SM.into(),
        },
        ..Default::default()
    })
    .into()
}

// =============================================================================
// SIDEBAR
// =============================================================================

fn summary_card(dataset: Dataset) -> Element<'static, Message> {
    let improvement = scores::improvement_over_cot(dataset);

    container(
        column![
            row![
                container(lucide::trophy().size(16).color(ACCENT))
                    .padding(SPACING_SM)
                    .style(|_theme| iced::widget::container::Style {
                        background: Some(ACCENT_SOFT.into()),
                        border: Border {
                            radius: crate::theme::RADIUS_FULL.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
                column![
                    section_label("AVG IMPROVEMENT"),
                    row![
                        text(format!("+{improvement:.1}%")).size(20),
                        row![
                            lucide::arrow_up_right().size(12).color(SUCCESS),
                            text("vs CoT Baseline").size(10).color(SUCCESS),
                        ]
                        .spacing(2)
                        .align_y(Alignment::Center),
                    ]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::End),
                ]
                .spacing(SPACING_XS),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
            text(
                "SAS significantly outperforms Zero-shot and CoT baselines, \
                 particularly in handling Japanese subcultural nuances where \
                 standard models often fail to detect risky semantics (ED/SH).",
            )
            .size(10)
            .color(TEXT_DIM),
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(glass_card)
    .into()
}

fn chart_card(dataset: Dataset) -> Element<'static, Message> {
    let rows = scores::rows(dataset);
    // Chart domain mirrors the table: scores never exceed this in practice.
    let domain = 0.8_f64;

    let mut bars = Column::new().spacing(SPACING_SM);
    for method in rows {
        let fraction = (method.average() / domain).clamp(0.0, 1.0) as f32;
        let short_name = method.method.split(' ').next().unwrap_or(method.method);
        let tone = if method.ours { ACCENT } else { MUTED };
        bars = bars.push(
            row![
                text(short_name)
                    .size(9)
                    .color(TEXT_DIM)
                    .font(Font::MONOSPACE)
                    .width(Length::FillPortion(3)),
                container(
                    row![
                        container(Space::new().width(Length::FillPortion((fraction * 1000.0) as u16 + 1)).height(10))
                            .style(move |_theme| iced::widget::container::Style {
                                background: Some(tone.into()),
                                border: Border {
                                    radius: RADIUS_SM.into(),
                                    ..Default::default()
                                },
                                ..Default::default()
                            }),
                        Space::new().width(Length::FillPortion(
                            ((1.0 - fraction) * 1000.0) as u16 + 1
                        )),
                    ]
                )
                .width(Length::FillPortion(8)),
                text(format!("{:.3}", method.average()))
                    .size(9)
                    .color(TEXT_FAINT)
                    .font(Font::MONOSPACE)
                    .width(Length::FillPortion(2)),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        );
    }

    container(
        column![
            section_label("AVERAGE F1 SCORE COMPARISON"),
            Space::new().height(SPACING_SM),
            bars,
            Space::new().height(Length::Fill),
            container(
                row![
                    container(Space::new().width(8).height(8)).style(|_theme| {
                        iced::widget::container::Style {
                            background: Some(SUCCESS_SOFT.into()),
                            border: Border {
                                color: with_alpha(SUCCESS, 0.5),
                                width: 1.0,
                                radius: crate::theme::RADIUS_FULL.into(),
                            },
                            ..Default::default()
                        }
                    }),
                    text("Macro-F1 averaged over all tasks and models")
                        .size(9)
                        .color(TEXT_FAINT),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
            ),
        ]
        .spacing(SPACING_XS),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(glass_card)
    .into()
}
