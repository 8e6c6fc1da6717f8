//! References slide: the bibliography.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Border, Element, Font, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{
    ACCENT, RADIUS_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, TEXT_DIM, TEXT_FAINT,
    WHITE_05, ghost_button,
};

struct Reference {
    authors: &'static str,
    year: &'static str,
    title: &'static str,
    source: &'static str,
    link: &'static str,
}

static REFERENCES: [Reference; 10] = [
    Reference {
        authors: "Sandhini Agarwal, Lama Ahmad, Jason Ai, et al.",
        year: "2025",
        title: "gpt-oss-120b & gpt-oss-20b model card",
        source: "arXiv:2508.10925",
        link: "https://arxiv.org/abs/2508.10925",
    },
    Reference {
        authors: "Matteo Cinelli, Gianmarco De Francisci Morales, Alessandro Galeazzi, et al.",
        year: "2021",
        title: "The echo chamber effect on social media",
        source: "PNAS 118(9):e2023301118",
        link: "https://www.pnas.org/doi/10.1073/pnas.2023301118",
    },
    Reference {
        authors: "DeepSeek-AI, Aixin Liu, Aoxue Mei, et al.",
        year: "2025",
        title: "Deepseek-v3.2: Pushing the frontier of open large language models",
        source: "arXiv preprint",
        link: "https://arxiv.org/abs/2501.00000",
    },
    Reference {
        authors: "Robert W Firestone and Richard H Seiden",
        year: "1990",
        title: "Suicide and the continuum of self-destructive behavior",
        source: "Journal of American College Health, 38(5):207-213",
        link: "https://www.tandfonline.com/doi/abs/10.1080/07448481.1990.9936200",
    },
    Reference {
        authors: "Aaron Grattafiori, Abhimanyu Dubey, Abhinav Jauhri, et al.",
        year: "2024",
        title: "The llama 3 herd of models",
        source: "arXiv:2407.21783",
        link: "https://arxiv.org/abs/2407.21783",
    },
    Reference {
        authors: "Mengkang Hu, Yuhang Zhou, Wendong Fan, et al.",
        year: "2025",
        title: "Owl: Optimized workforce learning for general multi-agent assistance \
                in real-world task automation",
        source: "arXiv:2505.23885",
        link: "https://arxiv.org/abs/2505.23885",
    },
    Reference {
        authors: "Shaoxiong Ji, Tianlin Zhang, Luna Ansari, et al.",
        year: "2022",
        title: "Mental-BERT: Publicly available pretrained language models for mental healthcare",
        source: "LREC 2022, pp. 7184-7190",
        link: "https://aclanthology.org/2022.lrec-1.778/",
    },
    Reference {
        authors: "Takeshi Kojima, Shixiang Shane Gu, Machel Reid, et al.",
        year: "2022",
        title: "Large language models are zero-shot reasoners",
        source: "NeurIPS 35:22199-22213",
        link: "https://arxiv.org/abs/2205.11916",
    },
    Reference {
        authors: "Aman Madaan, Niket Tandon, Prakhar Gupta, et al.",
        year: "2023",
        title: "Self-refine: Iterative refinement with self-feedback",
        source: "NeurIPS 36:46534-46594",
        link: "https://arxiv.org/abs/2303.17651",
    },
    Reference {
        authors: "Augusto R. Mendes and Helena Caseli",
        year: "2024",
        title: "Identifying fine-grained depression signs in social media posts",
        source: "LREC-COLING 2024, pp. 8594-8604",
        link: "https://aclanthology.org/2024.lrec-main.753/",
    },
];

pub fn view() -> Element<'static, Message> {
    let mut list = Column::new().spacing(SPACING_SM);
    for (index, reference) in REFERENCES.iter().enumerate() {
        list = list.push(reference_row(index, reference));
    }

    container(
        column![
            row![
                lucide::terminal().size(16).color(ACCENT),
                text("References").size(24),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
            Space::new().height(SPACING_MD),
            scrollable(list).height(Length::Fill),
        ]
        .max_width(900.0),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .padding([SPACING_LG, 0.0])
    .into()
}

fn reference_row(index: usize, reference: &Reference) -> Element<'static, Message> {
    let body = column![
        row![
            text(format!("[{:02}]", index + 1))
                .size(11)
                .color(ACCENT)
                .font(Font::MONOSPACE),
            text(reference.title).size(13),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        text(format!("{} ({})", reference.authors, reference.year))
            .size(11)
            .color(TEXT_DIM),
        text(reference.source)
            .size(10)
            .color(TEXT_FAINT)
            .font(Font::MONOSPACE),
    ]
    .spacing(SPACING_XS)
    .width(Length::Fill);

    container(
        row![
            body,
            button(lucide::external_link().size(14).color(TEXT_FAINT))
                .on_press(Message::OpenUrl(reference.link))
                .padding(SPACING_SM)
                .style(ghost_button),
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(|_theme| iced::widget::container::Style {
        background: Some(WHITE_05.into()),
        border: Border {
            radius: RADIUS_MD.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
