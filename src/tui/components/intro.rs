//! # Intro Panel
//!
//! Shown before the first analysis: a short heading and the three
//! "how it works" steps, centered in the main area.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::presenter::IntroStep;
use crate::tui::component::Component;

const TAGLINE: &str = "Ayurvedic guidance mapped to WHO ITA and SNOMED CT";

pub struct IntroPanel {
    pub steps: &'static [IntroStep],
}

impl IntroPanel {
    pub fn new(steps: &'static [IntroStep]) -> Self {
        Self { steps }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "AyurAssist",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray))),
            Line::default(),
        ];
        for (n, step) in self.steps.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", n + 1), Style::default().fg(Color::Yellow)),
                Span::styled(step.title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                step.description,
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::default());
        }
        lines
    }
}

impl Component for IntroPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let height = (paragraph.line_count(area.width) as u16).min(area.height);

        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(paragraph, centered);
    }
}
