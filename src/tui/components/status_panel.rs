//! # Status Panels
//!
//! Small centered panels for the non-result screens: the busy spinner and
//! the error banner.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const RETRY_HINT: &str = "Press Enter to try again";
/// Width of the error box, including borders
const BANNER_WIDTH: u16 = 64;

/// Spinner plus a one-line explanation while the service works.
pub struct BusyPanel {
    pub spinner_frame: usize,
}

impl Component for BusyPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
        let lines = vec![
            Line::from(vec![
                Span::styled(glyph, Style::default().fg(Color::Yellow)),
                Span::styled(
                    " Analyzing symptoms",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "Extracting entities and matching Ayurvedic conditions",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let [centered] = Layout::vertical([Constraint::Length(2)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centered,
        );
    }
}

/// Failure message in a red bordered box.
pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl ErrorBanner<'_> {
    fn paragraph(&self) -> Paragraph<'_> {
        let lines = vec![
            Line::from(self.message),
            Line::default(),
            Line::from(Span::styled(RETRY_HINT, Style::default().fg(Color::DarkGray))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .padding(Padding::horizontal(1)),
            )
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = BANNER_WIDTH.min(area.width);
        let paragraph = self.paragraph();
        // Inner width drops two border columns and two padding columns
        let height = (paragraph.line_count(width.saturating_sub(4)) as u16).min(area.height);

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [banner] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        frame.render_widget(paragraph, banner);
    }
}
