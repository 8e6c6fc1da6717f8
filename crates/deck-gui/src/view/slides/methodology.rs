//! Methodology slide: the three-stage SAS pipeline walkthrough.
//!
//! The stage graph auto-advances every few seconds until the user clicks
//! a node, which pins the walkthrough into interactive mode for the rest
//! of the mount. Each stage visualization plays its own short beat
//! choreography, rebuilt whenever the active stage changes.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Font, Length};
use iced_fonts::lucide;

use deck_core::{AutoAdvance, PhaseState};

use crate::component::section_label;
use crate::message::Message;
use crate::view::slides::PushMaybe;
use crate::state::PipelineStage;
use crate::theme::{
    ACCENT, ACCENT_SOFT, DANGER, DANGER_SOFT, RADIUS_MD, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, SUCCESS, TEXT_DIM, TEXT_FAINT, WHITE_05, WHITE_10, WHITE_20, panel_deep,
    with_alpha,
};

pub fn view<'a>(pipeline: &'a AutoAdvance, stage_sim: &'a PhaseState) -> Element<'a, Message> {
    let stage = PipelineStage::from_index(pipeline.step());

    let graph = pipeline_graph(stage);

    let description = column![
        row![
            lucide::scan_line().size(16).color(with_alpha(ACCENT, 0.8)),
            text(format!("SYSTEM PROCESS {:02}", stage.index() + 1))
                .size(11)
                .color(with_alpha(ACCENT, 0.8))
                .font(Font::MONOSPACE),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        Space::new().height(SPACING_SM),
        text(stage.title()).size(26),
        text(stage.subtitle()).size(16).color(TEXT_DIM),
        Space::new().height(SPACING_MD),
        text(stage.blurb()).size(13).color(TEXT_DIM),
        Space::new().height(Length::Fill),
        section_label("INPUT/OUTPUT PROTOCOL"),
        Space::new().height(SPACING_XS),
        container(
            text(stage.protocol())
                .size(11)
                .color(TEXT_DIM)
                .font(Font::MONOSPACE),
        )
        .padding(SPACING_SM + 4.0)
        .width(Length::Fill)
        .style(|_theme| iced::widget::container::Style {
            background: Some(with_alpha(iced::Color::BLACK, 0.3).into()),
            border: Border {
                color: WHITE_05,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        }),
    ]
    .width(Length::FillPortion(4));

    let viewport = container(
        column![
            container(stage_viz(stage, stage_sim))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(SPACING_LG),
            status_bar(pipeline.is_enabled()),
        ],
    )
    .width(Length::FillPortion(8))
    .height(Length::Fill)
    .style(panel_deep);

    column![
        graph,
        Space::new().height(SPACING_LG),
        row![description, viewport]
            .spacing(SPACING_LG)
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// =============================================================================
// PIPELINE GRAPH
// =============================================================================

fn pipeline_graph(active: PipelineStage) -> Element<'static, Message> {
    let mut graph = iced::widget::Row::new()
        .align_y(Alignment::Center)
        .spacing(SPACING_MD)
        .width(Length::Fill);

    for stage in PipelineStage::ALL {
        if stage.index() > 0 {
            graph = graph.push(connection_line(active.index() >= stage.index()));
        }
        graph = graph.push(pipeline_node(stage, active));
    }

    container(graph).padding([0.0, SPACING_XL_PAD]).into()
}

const SPACING_XL_PAD: f32 = 64.0;

fn pipeline_node(stage: PipelineStage, active: PipelineStage) -> Element<'static, Message> {
    let is_active = stage == active;
    let completed = stage.index() < active.index();

    let icon = match stage {
        PipelineStage::Retrieval => lucide::database(),
        PipelineStage::Alignment => lucide::file_text(),
        PipelineStage::Solver => lucide::brain_circuit(),
    };
    let (icon_color, border_color) = if is_active {
        (iced::Color::WHITE, ACCENT)
    } else if completed {
        (ACCENT, with_alpha(ACCENT, 0.3))
    } else {
        (TEXT_FAINT, WHITE_10)
    };

    let node = container(icon.size(22).color(icon_color))
        .padding(SPACING_MD)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(if is_active {
                ACCENT_SOFT.into()
            } else {
                crate::theme::PANEL.into()
            }),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        });

    button(
        column![
            node,
            text(stage.node_label())
                .size(10)
                .color(if is_active { iced::Color::WHITE } else { TEXT_FAINT })
                .font(Font::MONOSPACE),
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center),
    )
    .on_press(Message::StageSelected(stage.index()))
    .padding(SPACING_XS)
    .style(|_theme, _status| button::Style {
        background: None,
        text_color: iced::Color::WHITE,
        ..Default::default()
    })
    .into()
}

fn connection_line(active: bool) -> Element<'static, Message> {
    container(Space::new().width(Length::Fill).height(1)).style(move |_theme| {
        iced::widget::container::Style {
            background: Some(if active { ACCENT.into() } else { WHITE_10.into() }),
            ..Default::default()
        }
    })
    .width(Length::Fill)
    .into()
}

fn status_bar(auto: bool) -> Element<'static, Message> {
    let (dot_color, label) = if auto {
        (SUCCESS, "DEMO MODE")
    } else {
        (TEXT_DIM, "INTERACTIVE MODE")
    };

    container(
        row![
            container(Space::new().width(6).height(6)).style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(dot_color.into()),
                    border: Border {
                        radius: crate::theme::RADIUS_FULL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }),
            text(label).size(10).color(TEXT_DIM).font(Font::MONOSPACE),
            Space::new().width(Length::Fill),
            text("SAS_CORE_V1.2")
                .size(10)
                .color(TEXT_FAINT)
                .font(Font::MONOSPACE),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .width(Length::Fill)
    .style(|_theme| iced::widget::container::Style {
        background: Some(crate::theme::PANEL.into()),
        border: Border {
            color: WHITE_10,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    })
    .into()
}

// =============================================================================
// STAGE VISUALIZATIONS
// =============================================================================

fn stage_viz<'a>(stage: PipelineStage, sim: &'a PhaseState) -> Element<'a, Message> {
    match stage {
        PipelineStage::Retrieval => retrieval_viz(sim),
        PipelineStage::Alignment => alignment_viz(sim),
        PipelineStage::Solver => solver_viz(sim),
    }
}

/// Beats: query center node, incoming terms, query-target caption.
fn retrieval_viz(sim: &PhaseState) -> Element<'_, Message> {
    let center_node = container(lucide::search().size(30).color(ACCENT))
        .padding(SPACING_LG)
        .style(|_theme| iced::widget::container::Style {
            background: Some(crate::theme::PANEL.into()),
            border: Border {
                color: ACCENT,
                width: 1.0,
                radius: crate::theme::RADIUS_FULL.into(),
            },
            ..Default::default()
        });

    let mut terms = iced::widget::Row::new().spacing(SPACING_SM);
    for (index, term) in ["Term_102", "Term_103", "Term_104"].iter().enumerate() {
        terms = terms.push_maybe(sim.reached(2).then(|| {
            container(
                text(*term)
                    .size(10)
                    .color(ACCENT)
                    .font(Font::MONOSPACE),
            )
            .padding([SPACING_XS, SPACING_SM])
            .style(|_theme| iced::widget::container::Style {
                background: Some(with_alpha(iced::Color::BLACK, 0.5).into()),
                border: Border {
                    color: with_alpha(ACCENT, 0.2),
                    width: 1.0,
                    radius: RADIUS_MD.into(),
                },
                ..Default::default()
            })
        }));
    }

    Column::new()
        .push(Space::new().height(Length::Fill))
        .push_maybe(sim.reached(1).then(|| container(center_node).center_x(Length::Fill)))
        .push_maybe(sim.reached(2).then(|| container(terms).center_x(Length::Fill)))
        .push(Space::new().height(Length::Fill))
        .push_maybe(sim.reached(3).then(|| {
            column![
                section_label("QUERY TARGET"),
                text("\"Jirai Kei\" + \"Angel\"").size(13).font(Font::MONOSPACE),
            ]
            .spacing(SPACING_XS)
        }))
        .spacing(SPACING_MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Beats: report document, detected polysemy, risk weight.
fn alignment_viz(sim: &PhaseState) -> Element<'_, Message> {
    let document = container(
        column![
            container(Space::new().width(60).height(6)).style(|_theme| {
                iced::widget::container::Style {
                    background: Some(with_alpha(ACCENT, 0.4).into()),
                    border: Border {
                        radius: crate::theme::RADIUS_FULL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }),
            Space::new().height(SPACING_SM),
            doc_line(0.95),
            doc_line(0.7),
            doc_line(0.85),
            doc_line(0.6),
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_LG)
    .width(220)
    .style(|_theme| iced::widget::container::Style {
        background: Some(crate::theme::PANEL.into()),
        border: Border {
            color: with_alpha(ACCENT, 0.5),
            width: 1.0,
            radius: RADIUS_MD.into(),
        },
        ..Default::default()
    });

    let annotations = Column::new()
        .push_maybe(sim.reached(2).then(|| {
            annotation("Detected Polysemy:", "\"Angel\" → Suicide (Jump)", DANGER)
        }))
        .push_maybe(sim.reached(3).then(|| {
            annotation("Risk Weight:", "Level 4 (High)", DANGER)
        }))
        .spacing(SPACING_MD);

    Column::new()
        .push(Space::new().height(Length::Fill))
        .push_maybe(sim.reached(1).then(|| {
            row![
                container(document).center_x(Length::FillPortion(1)),
                container(annotations).center_y(Length::Shrink).width(Length::FillPortion(1)),
            ]
            .align_y(Alignment::Center)
            .width(Length::Fill)
        }))
        .push(Space::new().height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn doc_line(fraction: f32) -> Element<'static, Message> {
    container(Space::new().width(Length::Fixed(160.0 * fraction)).height(4)).style(|_theme| {
        iced::widget::container::Style {
            background: Some(WHITE_10.into()),
            border: Border {
                radius: crate::theme::RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}

fn annotation(
    label: &'static str,
    value: &'static str,
    tone: iced::Color,
) -> Element<'static, Message> {
    container(
        column![
            text(label).size(11).color(ACCENT).font(Font::MONOSPACE),
            text(value).size(11).color(tone).font(Font::MONOSPACE),
        ]
        .spacing(SPACING_XS),
    )
    .padding(SPACING_SM + 4.0)
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

/// Beats: input stream, logic gate, labeled output.
fn solver_viz(sim: &PhaseState) -> Element<'_, Message> {
    let input = container(
        text("\"I want to become an angel\"")
            .size(13)
            .font(Font::MONOSPACE),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(|_theme| iced::widget::container::Style {
        background: Some(WHITE_05.into()),
        border: Border {
            color: WHITE_10,
            width: 1.0,
            radius: RADIUS_MD.into(),
        },
        ..Default::default()
    });

    let gate = column![
        text("ALIGNING WITH REPORT...")
            .size(9)
            .color(TEXT_FAINT)
            .font(Font::MONOSPACE),
        container(lucide::brain_circuit().size(36).color(iced::Color::WHITE))
            .padding(SPACING_LG)
            .style(|_theme| iced::widget::container::Style {
                background: Some(crate::theme::PANEL.into()),
                border: Border {
                    color: WHITE_20,
                    width: 1.0,
                    radius: RADIUS_MD.into(),
                },
                ..Default::default()
            }),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center);

    let output = container(
        row![
            lucide::circle_alert().size(14).color(DANGER),
            text("Suicidal Ideation").size(13).color(DANGER).font(Font::MONOSPACE),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(|_theme| iced::widget::container::Style {
        background: Some(DANGER_SOFT.into()),
        border: Border {
            color: with_alpha(DANGER, 0.5),
            width: 1.0,
            radius: RADIUS_MD.into(),
        },
        ..Default::default()
    });

    let mut flow = iced::widget::Row::new()
        .spacing(SPACING_MD)
        .align_y(Alignment::Center);
    flow = flow.push_maybe(sim.reached(1).then(|| input));
    flow = flow.push_maybe(
        sim.reached(2)
            .then(|| lucide::arrow_right().size(16).color(TEXT_FAINT)),
    );
    flow = flow.push_maybe(sim.reached(2).then(|| gate));
    flow = flow.push_maybe(
        sim.reached(3)
            .then(|| lucide::arrow_right().size(16).color(TEXT_FAINT)),
    );
    flow = flow.push_maybe(sim.reached(3).then(|| output));

    container(flow)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
