//! # Suggestion Chips
//!
//! The "no match" screen: the service message, then a row of common
//! symptoms the user can pick instead of typing.
//!
//! `SuggestionState` persists in `TuiState` and owns the keyboard
//! selection. `SuggestionChips` is rebuilt each frame from props.
//!
//! Picking a chip only fills the input. Submitting stays a separate step.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Columns between chips
const CHIP_GAP: u16 = 1;
const HINT: &str = "Tab to browse suggestions, Enter to pick";

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionEvent {
    /// Chip at this index was chosen
    Pick(usize),
    /// Focus handed back to the input
    Leave,
}

/// Keyboard selection over the chips. `None` means the input has focus.
#[derive(Debug, Default)]
pub struct SuggestionState {
    pub selected: Option<usize>,
    /// Number of chips currently shown (prop, set by the parent)
    pub count: usize,
}

impl SuggestionState {
    pub fn is_focused(&self) -> bool {
        self.selected.is_some()
    }

    pub fn focus_first(&mut self) {
        self.selected = (self.count > 0).then_some(0);
    }

    pub fn focus_last(&mut self) {
        self.selected = self.count.checked_sub(1);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    fn shift(&mut self, forward: bool) {
        if let Some(current) = self.selected
            && self.count > 0
        {
            self.selected = Some(if forward {
                (current + 1) % self.count
            } else {
                (current + self.count - 1) % self.count
            });
        }
    }
}

impl EventHandler for SuggestionState {
    type Event = SuggestionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorRight | TuiEvent::CursorDown | TuiEvent::FocusNext => {
                self.shift(true);
                None
            }
            TuiEvent::CursorLeft | TuiEvent::CursorUp | TuiEvent::FocusPrev => {
                self.shift(false);
                None
            }
            TuiEvent::Submit => {
                let picked = self.selected.take()?;
                Some(SuggestionEvent::Pick(picked))
            }
            TuiEvent::Escape => {
                self.clear();
                Some(SuggestionEvent::Leave)
            }
            _ => None,
        }
    }
}

pub struct SuggestionChips<'a> {
    pub message: &'a str,
    pub suggestions: &'a [&'a str],
    pub selected: Option<usize>,
}

impl SuggestionChips<'_> {
    /// Lay chips out left to right, breaking onto a new line when the next
    /// chip would overflow `width`.
    fn chip_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let mut current: Vec<Span<'static>> = Vec::new();
        let mut used: u16 = 0;

        for (index, suggestion) in self.suggestions.iter().enumerate() {
            let label = format!(" {suggestion} ");
            let chip_width = label.width() as u16;
            if !current.is_empty() && used + CHIP_GAP + chip_width > width {
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            if !current.is_empty() {
                current.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
                used += CHIP_GAP;
            }
            current.push(Span::styled(label, chip_style(self.selected == Some(index))));
            used += chip_width;
        }
        if !current.is_empty() {
            lines.push(Line::from(current));
        }
        lines
    }
}

fn chip_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }
}

impl Component for SuggestionChips<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.message.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Try describing common symptoms like:"),
            Line::default(),
        ];
        lines.extend(self.chip_lines(area.width));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            HINT,
            Style::default().fg(Color::DarkGray),
        )));

        let height = (lines.len() as u16).min(area.height);
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centered,
        );
    }
}
