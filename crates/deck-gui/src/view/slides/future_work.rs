//! Future-work slide: the research roadmap grid.

use iced::widget::{Column, Space, column, container, row, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{
    ACCENT, INFO, RADIUS_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, SUCCESS, TEXT_DIM,
    WARNING, WHITE_10, panel_glass,
};

struct Plan {
    icon: fn() -> iced::widget::Text<'static>,
    tone: iced::Color,
    title: &'static str,
    desc: &'static str,
}

const PURPLE: iced::Color = iced::Color::from_rgb(0.75, 0.52, 0.99);

pub fn view() -> Element<'static, Message> {
    let plans = [
        Plan {
            icon: lucide::brain,
            tone: ACCENT,
            title: "Mechanism Analysis (Log Attribution)",
            desc: "Using GPT-4o to analyze decision logs. Proving Baselines are \
                   often \"Right for the wrong reason\", while SAS truly \
                   understands subcultural semantics.",
        },
        Plan {
            icon: lucide::globe,
            tone: INFO,
            title: "Cross-lingual Impact",
            desc: "Translating high-quality Japanese Alignment Reports to assist \
                   Chinese tasks, solving the \"ambiguous definition\" issue in CN \
                   subcultures.",
        },
        Plan {
            icon: lucide::git_branch,
            tone: PURPLE,
            title: "RAG vs Fine-tuning",
            desc: "Benchmarking against fine-tuned models (e.g., Qwen-2.5-7B). \
                   Exploring the efficiency/boundary between Retrieval and \
                   Training in evolving domains.",
        },
        Plan {
            icon: lucide::flask_conical,
            tone: SUCCESS,
            title: "Synthetic Subculture Construction",
            desc: "Testing generalization on self-constructed/emerging concepts \
                   beyond Jirai Kei to verify rapid adaptation capabilities.",
        },
        Plan {
            icon: lucide::microscope,
            tone: WARNING,
            title: "Failure Case Study",
            desc: "Deep dive into failure cases to identify root causes of \
                   residual alignment errors.",
        },
    ];

    let mut grid = Column::new().spacing(SPACING_MD);
    for pair in plans.chunks(2) {
        let mut line = iced::widget::Row::new().spacing(SPACING_MD);
        for plan in pair {
            line = line.push(plan_card(plan));
        }
        if pair.len() == 1 {
            line = line.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(line);
    }

    container(
        column![
            text("Future Work").size(30),
            text("Research Roadmap & Upcoming Experiments")
                .size(15)
                .color(TEXT_DIM),
            Space::new().height(SPACING_LG),
            grid,
        ]
        .spacing(SPACING_XS)
        .max_width(980.0),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn plan_card(plan: &Plan) -> Element<'static, Message> {
    let icon_tile = container((plan.icon)().size(20).color(plan.tone))
        .padding(SPACING_SM + 4.0)
        .style(|_theme| iced::widget::container::Style {
            background: Some(crate::theme::with_alpha(iced::Color::BLACK, 0.4).into()),
            border: Border {
                color: WHITE_10,
                width: 1.0,
                radius: RADIUS_MD.into(),
            },
            ..Default::default()
        });

    container(
        row![
            icon_tile,
            column![
                text(plan.title).size(15),
                text(plan.desc).size(12).color(TEXT_DIM),
            ]
            .spacing(SPACING_XS),
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Start),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(panel_glass)
    .into()
}
