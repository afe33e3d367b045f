//! # ConditionCard Component
//!
//! One matched condition: header (term, identifier, score), the mapping
//! details, then either the enrichment sections or the fallback notice,
//! and the disclaimer last.
//!
//! Transient like the other list items: built each frame from a
//! `&ConditionCard` and rendered into the result `ScrollView`. Height is
//! measured with the same `Paragraph` that renders, so the two agree.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::presenter::{CardBody, ConditionCard, Detail, Section};

/// Borders (2) + horizontal padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;

const BULLET: &str = "• ";
const WARNING: &str = "⚠ ";
const INDENT: &str = "  ";

fn heading_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn label_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub struct ConditionCardView<'a> {
    pub card: &'a ConditionCard,
}

impl<'a> ConditionCardView<'a> {
    pub fn new(card: &'a ConditionCard) -> Self {
        Self { card }
    }

    /// Total rows including borders for the given outer width.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if inner == 0 {
            return 1;
        }
        u16::try_from(self.paragraph().line_count(inner)).unwrap_or(u16::MAX)
    }

    fn block(&self) -> Block<'a> {
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", self.card.term),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if self.card.identifier.is_empty() {
                    String::new()
                } else {
                    format!("[{}] ", self.card.identifier)
                },
                muted(),
            ),
        ]);
        let score = Line::from(Span::styled(
            format!(" {} ", self.card.score),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .right_aligned();

        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green).add_modifier(Modifier::DIM))
            .title(title)
            .title(score)
            .padding(Padding::horizontal(1))
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.lines())
            .block(self.block())
            .wrap(Wrap { trim: false })
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let card = self.card;
        let mut lines = Vec::new();

        if let Some(sanskrit) = &card.sanskrit {
            lines.push(Line::from(Span::styled(
                sanskrit.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        if let Some(match_line) = &card.match_line {
            lines.push(Line::from(Span::styled(match_line.as_str(), muted())));
        }

        let mut snomed = vec![
            Span::styled("SNOMED CT ", label_style()),
            Span::raw(card.snomed_code.as_str()),
        ];
        if let Some(name) = &card.snomed_name {
            snomed.push(Span::styled(format!(" {name}"), muted()));
        }
        lines.push(Line::from(snomed));

        if let Some(dosha) = &card.dosha {
            lines.push(labelled("Dosha", dosha));
        }
        if let Some(description) = &card.description {
            lines.push(Line::default());
            lines.push(Line::from(description.as_str()));
        }
        if let Some(correlation) = &card.modern_correlation {
            lines.push(labelled("Modern correlation", correlation));
        }

        match &card.body {
            CardBody::Enriched(sections) => {
                for section in sections {
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled(section.title(), heading_style())));
                    section_lines(section, &mut lines);
                }
            }
            CardBody::Fallback { notice } => {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    *notice,
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            card.disclaimer.as_str(),
            muted().add_modifier(Modifier::ITALIC),
        )));
        lines
    }
}

fn labelled<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style()),
        Span::raw(value),
    ])
}

fn bullets<'a>(items: &'a [String], marker: &'static str, style: Style, out: &mut Vec<Line<'a>>) {
    for item in items {
        out.push(Line::from(vec![
            Span::styled(marker, style),
            Span::raw(item.as_str()),
        ]));
    }
}

fn detail_lines<'a>(details: &'a [Detail], out: &mut Vec<Line<'a>>) {
    for detail in details {
        out.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("{}: ", detail.label), label_style()),
            Span::raw(detail.value.as_str()),
        ]));
    }
}

fn named<'a>(name: &'a str, aside: Option<&'a String>) -> Line<'a> {
    let mut spans = vec![
        Span::raw(BULLET),
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(aside) = aside {
        spans.push(Span::styled(format!(" ({aside})"), muted()));
    }
    Line::from(spans)
}

fn section_lines<'a>(section: &'a Section, out: &mut Vec<Line<'a>>) {
    match section {
        Section::Causes(items)
        | Section::EarlySigns(items)
        | Section::Symptoms(items)
        | Section::Lifestyle(items)
        | Section::Exercises(items) => bullets(items, BULLET, Style::default(), out),
        Section::Warnings(items) => bullets(items, WARNING, Style::default().fg(Color::Red), out),
        Section::Prognosis(text) => out.push(Line::from(text.as_str())),
        Section::Remedies(remedies) => {
            for remedy in remedies {
                out.push(named(&remedy.name, remedy.sanskrit.as_ref()));
                detail_lines(&remedy.details, out);
            }
        }
        Section::Formulations(formulations) => {
            for formulation in formulations {
                out.push(named(&formulation.name, formulation.english_name.as_ref()));
                detail_lines(&formulation.details, out);
            }
        }
        Section::Therapies(therapies) => {
            for therapy in therapies {
                out.push(named(&therapy.name, None));
                if let Some(description) = &therapy.description {
                    out.push(Line::from(vec![
                        Span::raw(INDENT),
                        Span::raw(description.as_str()),
                    ]));
                }
                if let Some(indication) = &therapy.indication {
                    out.push(Line::from(vec![
                        Span::raw(INDENT),
                        Span::styled(format!("▸ {indication}"), muted()),
                    ]));
                }
            }
        }
        Section::Diet(diet) => {
            if !diet.favor.is_empty() {
                out.push(Line::from(vec![
                    Span::styled("Favor: ", Style::default().fg(Color::Green)),
                    Span::raw(diet.favor.join(", ")),
                ]));
            }
            if !diet.avoid.is_empty() {
                out.push(Line::from(vec![
                    Span::styled("Avoid: ", Style::default().fg(Color::Red)),
                    Span::raw(diet.avoid.join(", ")),
                ]));
            }
            if let Some(note) = &diet.note {
                out.push(Line::from(Span::styled(
                    note.as_str(),
                    Style::default().add_modifier(Modifier::ITALIC),
                )));
            }
        }
    }
}

impl Widget for ConditionCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}
