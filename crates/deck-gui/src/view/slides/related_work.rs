//! Related-work slide: the gallery of baseline simulations.
//!
//! The left column lists six baseline methods; the right panel plays the
//! active method's choreography. Clicking the active method replays it
//! from the first beat; clicking another switches to it. Beats reveal in
//! phase order, so the views below only gate on `PhaseState::reached`.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Font, Length};
use iced_fonts::lucide;

use deck_core::{PhaseState, ReplayableSelector};

use crate::component::{mode_tag, output_panel, section_label, verdict_panel};
use crate::message::Message;
use crate::view::slides::PushMaybe;
use crate::state::Baseline;
use crate::theme::{
    ACCENT, ACCENT_SOFT, INFO, RADIUS_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, SUCCESS,
    TEXT_DIM, TEXT_FAINT, WHITE_05, WHITE_10, WHITE_20, panel_deep, with_alpha,
};

/// The sentence every baseline is asked to label.
const SAMPLE_INPUT: &str = "\"天桥cp 从花絮就嗑到飞起... 希望od和qm能在这个时空里一直幸福\"";

pub fn view<'a>(
    selector: &'a ReplayableSelector<Baseline>,
    sim: &'a PhaseState,
) -> Element<'a, Message> {
    let active = selector.active();

    let mut list = Column::new()
        .push(text("Related Work").size(30))
        .push(
            text("Analysis of baseline limitations in subcultural contexts.")
                .size(13)
                .color(TEXT_DIM),
        )
        .push(Space::new().height(SPACING_MD))
        .push(section_label("STANDARD INFERENCE"))
        .spacing(SPACING_SM);

    for baseline in Baseline::ALL {
        if baseline == Baseline::SelfRefine {
            list = list.push(Space::new().height(SPACING_XS));
            list = list.push(section_label("AGENTIC OPTIMIZATION"));
        }
        list = list.push(baseline_item(baseline, baseline == active));
    }

    let stage = container(
        column![
            row![Space::new().width(Length::Fill), mode_tag(active.mode_label())],
            container(simulation(active, sim))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(SPACING_MD),
        ],
    )
    .width(Length::FillPortion(7))
    .height(Length::Fill)
    .style(panel_deep);

    row![
        container(list).width(Length::FillPortion(5)).center_y(Length::Fill),
        stage,
    ]
    .spacing(SPACING_LG)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// =============================================================================
// SELECTOR LIST
// =============================================================================

fn baseline_icon(baseline: Baseline, color: iced::Color) -> Element<'static, Message> {
    let icon = match baseline {
        Baseline::ZeroShot => lucide::zap(),
        Baseline::ChainOfThought => lucide::message_square(),
        Baseline::PlanAndSolve => lucide::list(),
        Baseline::SelfRefine => lucide::refresh_cw(),
        Baseline::S3Agent => lucide::layout_template(),
        Baseline::OwlAgent => lucide::search(),
    };
    icon.size(14).color(color).into()
}

fn baseline_item(baseline: Baseline, active: bool) -> Element<'static, Message> {
    let icon_color = if active { ACCENT } else { TEXT_FAINT };
    let label_color = if active { iced::Color::WHITE } else { TEXT_DIM };
    let flow_color = if active { with_alpha(ACCENT, 0.8) } else { TEXT_FAINT };

    let header = row![
        baseline_icon(baseline, icon_color),
        text(baseline.label()).size(13).color(label_color),
        Space::new().width(Length::Fill),
    ]
    .push_maybe(active.then(|| lucide::play().size(10).color(ACCENT)))
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    button(
        column![
            header,
            text(baseline.flow())
                .size(10)
                .color(flow_color)
                .font(Font::MONOSPACE),
        ]
        .spacing(SPACING_XS),
    )
    .on_press(Message::BaselineSelected(baseline))
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let (background, border_color) = if active {
            (ACCENT_SOFT, ACCENT)
        } else if hovered {
            (WHITE_10, WHITE_20)
        } else {
            (WHITE_05, WHITE_10)
        };
        button::Style {
            background: Some(background.into()),
            text_color: iced::Color::WHITE,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        }
    })
    .into()
}

// =============================================================================
// SIMULATIONS
// =============================================================================

fn simulation<'a>(baseline: Baseline, sim: &'a PhaseState) -> Element<'a, Message> {
    match baseline {
        Baseline::ZeroShot => sim_zero_shot(sim),
        Baseline::ChainOfThought => sim_chain_of_thought(sim),
        Baseline::PlanAndSolve => sim_plan_and_solve(sim),
        Baseline::SelfRefine => sim_self_refine(sim),
        Baseline::S3Agent => sim_s3(sim),
        Baseline::OwlAgent => sim_owl(sim),
    }
}

fn input_bubble() -> Element<'static, Message> {
    container(
        text(SAMPLE_INPUT)
            .size(11)
            .color(TEXT_DIM)
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
    })
    .into()
}

fn flow_arrow() -> Element<'static, Message> {
    container(lucide::arrow_down().size(16).color(TEXT_FAINT))
        .center_x(Length::Fill)
        .into()
}

/// Beats: input, model flash, output.
fn sim_zero_shot(sim: &PhaseState) -> Element<'_, Message> {
    let model = container(lucide::zap().size(36).color(TEXT_FAINT))
        .padding(SPACING_LG)
        .style(|_theme| iced::widget::container::Style {
            background: Some(crate::theme::PANEL_DEEP.into()),
            border: Border {
                color: WHITE_20,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        });

    Column::new()
        .push_maybe(sim.reached(1).then(input_bubble))
        .push_maybe(sim.reached(1).then(flow_arrow))
        .push_maybe(sim.reached(2).then(|| container(model).center_x(Length::Fill)))
        .push_maybe(sim.reached(2).then(flow_arrow))
        .push_maybe(sim.reached(3).then(|| {
            output_panel(
                "labels: {OD: 0, ED: 0, SH: 0}\nrationale: OD: \"The text discusses \
                 a fictional couple ('天桥cp')... No mention of drug use.\"",
            )
        }))
        .spacing(SPACING_SM)
        .width(Length::Fill)
        .into()
}

/// Beats: input, four reasoning steps, output, verdict.
fn sim_chain_of_thought(sim: &PhaseState) -> Element<'_, Message> {
    const STEPS: [&str; 4] = [
        "Identifying entities: '天桥cp' (likely fictional couple)",
        "Analyzing action: '嗑到飞起' (slang for 'obsessed')",
        "Synthesizing: Expressing strong affection",
        "Conclusion: Safe request",
    ];

    let mut steps = Column::new().spacing(SPACING_XS);
    for (index, step) in STEPS.iter().enumerate() {
        steps = steps.push_maybe(sim.reached(2 + index as u32).then(|| {
            container(
                row![
                    text(format!("{}.", index + 1))
                        .size(11)
                        .color(with_alpha(ACCENT, 0.5))
                        .font(Font::MONOSPACE),
                    text(*step).size(11).color(TEXT_DIM),
                ]
                .spacing(SPACING_SM),
            )
            .padding(SPACING_SM)
            .width(Length::Fill)
            .style(|_theme| iced::widget::container::Style {
                background: Some(crate::theme::PANEL_DEEP.into()),
                border: Border {
                    color: WHITE_10,
                    width: 1.0,
                    radius: RADIUS_MD.into(),
                },
                ..Default::default()
            })
        }));
    }

    Column::new()
        .push_maybe(sim.reached(1).then(input_bubble))
        .push(container(steps).padding([0.0, SPACING_LG]).width(Length::Fill))
        .push(Space::new().height(Length::Fill))
        .push_maybe(sim.reached(6).then(|| {
            output_panel(
                "labels: {OD: 0, ED: 0, SH: 0}\nrationale: OD: \"Chinese internet \
                 slang ('嗑到飞起') expresses strong affection... 'od' and 'qm' are \
                 likely character names.\"",
            )
        }))
        .push_maybe(sim.reached(7).then(|| {
            verdict_panel("ALIGNED", "CoT correctly interprets slang and context.")
        }))
        .spacing(SPACING_SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Beats: input, planner prompt, three plan lines, output.
fn sim_plan_and_solve(sim: &PhaseState) -> Element<'_, Message> {
    const PLANS: [&str; 3] = [
        "Plan 1: Identify key terms ('天桥cp', '嗑到飞起', 'od', 'qm')",
        "Plan 2: Determine context (fandom, shipping)",
        "Plan 3: Formulate supportive and safe response",
    ];

    let prompt = container(
        text("> Prompt: \"Let's first understand the problem and devise a plan...\"")
            .size(10)
            .color(ACCENT)
            .font(Font::MONOSPACE),
    )
    .padding(SPACING_SM)
    .width(Length::Fill)
    .style(|_theme| iced::widget::container::Style {
        background: Some(with_alpha(ACCENT, 0.05).into()),
        border: Border {
            color: with_alpha(ACCENT, 0.2),
            width: 1.0,
            radius: RADIUS_MD.into(),
        },
        ..Default::default()
    });

    let mut buffer = Column::new()
        .push(
            row![
                lucide::list().size(10).color(TEXT_FAINT),
                text("PLAN_BUFFER.LOG")
                    .size(9)
                    .color(TEXT_FAINT)
                    .font(Font::MONOSPACE),
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        )
        .spacing(SPACING_SM);
    for (index, plan) in PLANS.iter().enumerate() {
        buffer = buffer.push_maybe(sim.reached(3 + index as u32).then(|| {
            row![
                lucide::circle_check().size(12).color(SUCCESS),
                text(*plan).size(10).color(TEXT_DIM).font(Font::MONOSPACE),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
        }));
    }

    Column::new()
        .push_maybe(sim.reached(1).then(input_bubble))
        .push_maybe(sim.reached(2).then(|| prompt))
        .push(
            container(buffer)
                .padding(SPACING_MD)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(panel_deep),
        )
        .push_maybe(sim.reached(6).then(|| {
            output_panel(
                "labels: {OD: 0, ED: 0, SH: 0}\nrationale: OD: \"The user is \
                 expressing enthusiasm for a fictional couple ('天桥cp')... No drug \
                 overdose.\"",
            )
        }))
        .spacing(SPACING_SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Beats follow the refine loop: initial, feedback, refine, feedback,
/// refine, final. Node highlights are derived from the phase parity.
fn sim_self_refine(sim: &PhaseState) -> Element<'_, Message> {
    let phase = sim.phase();
    let finished = sim.reached(5);
    let initial_active = phase == 0;
    let feedback_active = !finished && phase % 2 == 1;
    let refine_active = !finished && phase > 0 && phase % 2 == 0;

    let loop_row = row![
        refine_node("REFINE", "\"Checking slang...\"", SUCCESS, refine_active),
        container(
            column![
                refine_node("INITIAL GENERATION", "", ACCENT, initial_active),
                container(lucide::file_text().size(32).color(TEXT_FAINT))
                    .padding(SPACING_LG)
                    .center_x(Length::Fill),
                text(format!("iteration {}", (phase + 1) / 2))
                    .size(9)
                    .color(TEXT_FAINT)
                    .font(Font::MONOSPACE),
            ]
            .align_x(Alignment::Center)
            .spacing(SPACING_SM)
        )
        .width(Length::Fill)
        .center_x(Length::Fill),
        refine_node("FEEDBACK", "\"Is 'od' drug related?\"", INFO, feedback_active),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center)
    .width(Length::Fill);

    Column::new()
        .push(container(loop_row).height(Length::Fill).center_y(Length::Fill))
        .push_maybe(finished.then(|| {
            output_panel(
                "labels: {OD: 0, ED: 0, SH: 0}\nrationale: OD: \"The term 'od' is \
                 used as part of a ship name... reference is neutral.\"",
            )
        }))
        .push_maybe(finished.then(|| {
            verdict_panel(
                "ALIGNED",
                "Iterative refinement correctly identified fandom context.",
            )
        }))
        .spacing(SPACING_SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn refine_node(
    title: &'static str,
    caption: &'static str,
    tone: iced::Color,
    active: bool,
) -> Element<'static, Message> {
    let border_color = if active { tone } else { WHITE_10 };
    let text_color = if active { iced::Color::WHITE } else { TEXT_FAINT };

    container(
        column![
            text(title).size(11).color(text_color),
            text(caption).size(10).color(TEXT_FAINT),
        ]
        .spacing(SPACING_XS)
        .align_x(Alignment::Center),
    )
    .padding(SPACING_MD)
    .style(move |_theme| iced::widget::container::Style {
        background: Some(crate::theme::PANEL.into()),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: RADIUS_MD.into(),
        },
        ..Default::default()
    })
    .into()
}

/// Beats: three perspectives, aggregator, output, consensus.
fn sim_s3(sim: &PhaseState) -> Element<'_, Message> {
    const VIEWS: [(&str, &str); 3] = [
        ("SURFACE", "Keywords: 'od', 'qm'"),
        ("SEMANTIC", "Context: Fandom/Shipping"),
        ("SENTIMENT", "Tone: Positive/Enthusiastic"),
    ];

    let mut perspectives = iced::widget::Row::new().spacing(SPACING_SM);
    for (index, (title, desc)) in VIEWS.iter().enumerate() {
        perspectives = perspectives.push_maybe(sim.reached(1 + index as u32).then(|| {
            let icon = match index {
                0 => lucide::search(),
                1 => lucide::brain(),
                _ => lucide::message_square(),
            };
            container(
                column![
                    icon.size(14).color(TEXT_DIM),
                    text(*title).size(10),
                    text(*desc).size(9).color(TEXT_DIM),
                ]
                .spacing(SPACING_XS)
                .align_x(Alignment::Center),
            )
            .padding(SPACING_SM)
            .width(Length::Fill)
            .style(|_theme| iced::widget::container::Style {
                background: Some(crate::theme::PANEL_DEEP.into()),
                border: Border {
                    color: WHITE_10,
                    width: 1.0,
                    radius: RADIUS_MD.into(),
                },
                ..Default::default()
            })
        }));
    }

    let aggregator = container(
        row![
            lucide::git_branch().size(16).color(TEXT_DIM),
            column![
                text("AGGREGATOR").size(11),
                text("Synthesizing inputs...")
                    .size(9)
                    .color(TEXT_FAINT)
                    .font(Font::MONOSPACE),
            ]
            .spacing(SPACING_XS),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(|_theme| iced::widget::container::Style {
        background: Some(with_alpha(crate::theme::PANEL, 0.9).into()),
        border: Border {
            color: WHITE_20,
            width: 1.0,
            radius: RADIUS_MD.into(),
        },
        ..Default::default()
    });

    Column::new()
        .push(section_label("PHASE 1: MULTI-PERSPECTIVE ANALYSIS"))
        .push(perspectives)
        .push_maybe(sim.reached(4).then(|| container(aggregator).center_x(Length::Fill)))
        .push(Space::new().height(Length::Fill))
        .push_maybe(sim.reached(5).then(|| section_label("PHASE 2: AGGREGATION")))
        .push_maybe(sim.reached(5).then(|| {
            output_panel(
                "labels: {OD: 0, ED: 0, SH: 0}\nrationale: OD: \"Surface keyword \
                 'od' is a false positive... it is a character name.\"",
            )
        }))
        .push_maybe(sim.reached(6).then(|| {
            verdict_panel(
                "ROBUST CONSENSUS",
                "3 views aligned with external verification.",
            )
        }))
        .spacing(SPACING_SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Beats: thought, retrieval, output, verdict.
fn sim_owl(sim: &PhaseState) -> Element<'_, Message> {
    let thought = row![
        container(lucide::brain().size(14).color(ACCENT))
            .padding(SPACING_SM)
            .style(|_theme| iced::widget::container::Style {
                background: Some(crate::theme::PANEL.into()),
                border: Border {
                    color: with_alpha(ACCENT, 0.3),
                    width: 1.0,
                    radius: crate::theme::RADIUS_FULL.into(),
                },
                ..Default::default()
            }),
        container(
            column![
                text("THINKING...")
                    .size(9)
                    .color(with_alpha(ACCENT, 0.6))
                    .font(Font::MONOSPACE),
                text("Checking \"天桥cp od qm 中文网络用语 含义\"...")
                    .size(11)
                    .color(TEXT_DIM),
            ]
            .spacing(SPACING_XS)
        )
        .padding(SPACING_SM)
        .style(|_theme| iced::widget::container::Style {
            background: Some(crate::theme::PANEL.into()),
            border: Border {
                color: WHITE_10,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        }),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let retrieval = row![
        container(lucide::search().size(14).color(INFO))
            .padding(SPACING_SM)
            .style(|_theme| iced::widget::container::Style {
                background: Some(crate::theme::PANEL.into()),
                border: Border {
                    color: with_alpha(INFO, 0.3),
                    width: 1.0,
                    radius: crate::theme::RADIUS_FULL.into(),
                },
                ..Default::default()
            }),
        container(
            column![
                text("GOOGLE_SEARCH")
                    .size(9)
                    .color(with_alpha(INFO, 0.7))
                    .font(Font::MONOSPACE),
                text("od和qm - 网络流行语百科").size(11).color(INFO),
                text("OD refers to \"Own Daily\" or character names in specific fandoms. QM...")
                    .size(9)
                    .color(TEXT_FAINT),
            ]
            .spacing(SPACING_XS)
        )
        .padding(SPACING_SM)
        .width(Length::Fill)
        .style(|_theme| iced::widget::container::Style {
            background: Some(crate::theme::PANEL_DEEP.into()),
            border: Border {
                color: WHITE_10,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        }),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Start);

    Column::new()
        .push_maybe(sim.reached(1).then(|| thought))
        .push_maybe(sim.reached(2).then(|| retrieval))
        .push(Space::new().height(Length::Fill))
        .push_maybe(sim.reached(3).then(|| {
            output_panel(
                "labels: {OD: 0, ED: 0, SH: 0}\nrationale: OD: \"Appears to be an \
                 abbreviation for a character name... not drug overdose.\"",
            )
        }))
        .push_maybe(sim.reached(4).then(|| {
            verdict_panel(
                "CONTEXT VERIFIED",
                "Agent correctly retrieved external knowledge to resolve ambiguity.",
            )
        }))
        .spacing(SPACING_SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
