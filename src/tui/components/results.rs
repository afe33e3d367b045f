//! # ResultList Component
//!
//! Scrollable view of an analysis: the detected-entity header followed by
//! one `ConditionCard` per matched condition, in response order.
//!
//! ## Architecture
//!
//! `ResultList` is transient (built each frame) and wraps
//! `&mut ResultListState`, which persists in `TuiState`. Card heights are
//! measured up front so the `ScrollView` canvas can be sized before
//! anything is drawn into it.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::presenter::ResultsView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::condition_card::ConditionCardView;
use crate::tui::event::TuiEvent;

/// Blank rows between cards
const CARD_GAP: u16 = 1;

/// Scroll state for the result list. Lives in `TuiState`.
#[derive(Default)]
pub struct ResultListState {
    pub scroll_state: ScrollViewState,
    /// Canvas height from the last render
    pub content_height: u16,
    /// Viewport height from the last render
    pub viewport_height: u16,
}

impl ResultListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, used whenever a new analysis lands.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Whether anything sits below the visible window.
    pub fn has_unseen_content(&self) -> bool {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        self.scroll_state.offset().y < max_y
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for ResultListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct ResultList<'a> {
    pub view: &'a ResultsView,
    pub state: &'a mut ResultListState,
}

impl<'a> ResultList<'a> {
    pub fn new(view: &'a ResultsView, state: &'a mut ResultListState) -> Self {
        Self { view, state }
    }

    fn header(&self) -> Paragraph<'a> {
        let mut entities = vec![Span::styled(
            "Detected: ",
            Style::default().fg(Color::Cyan),
        )];
        if self.view.entities.is_empty() {
            entities.push(Span::styled("none", Style::default().fg(Color::DarkGray)));
        }
        for (i, entity) in self.view.entities.iter().enumerate() {
            if i > 0 {
                entities.push(Span::raw("  "));
            }
            entities.push(Span::styled(
                entity.text.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            entities.push(Span::styled(
                format!(" {}", entity.detail),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let lines = vec![
            Line::from(entities),
            Line::from(vec![
                Span::styled("UMLS CUI: ", Style::default().fg(Color::Cyan)),
                Span::raw(self.view.identifier_code.as_str()),
                Span::styled(
                    format!("   {} condition(s)", self.view.cards.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true })
    }
}

impl Component for ResultList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column

        let header = self.header();
        let header_height = u16::try_from(header.line_count(content_width)).unwrap_or(u16::MAX);

        let cards: Vec<(ConditionCardView, u16)> = self
            .view
            .cards
            .iter()
            .map(|card| {
                let view = ConditionCardView::new(card);
                let height = view.calculate_height(content_width);
                (view, height)
            })
            .collect();

        let total_height = content_height(header_height, cards.iter().map(|(_, h)| *h));

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(header, Rect::new(0, 0, content_width, header_height));
        let mut y = header_height;
        for (card, height) in cards {
            y = y.saturating_add(CARD_GAP);
            scroll_view.render_widget(card, Rect::new(0, y, content_width, height));
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Header plus every card with its leading gap. Saturates instead of
/// overflowing on very long responses in narrow terminals.
fn content_height(header_height: u16, card_heights: impl Iterator<Item = u16>) -> u16 {
    card_heights.fold(header_height, |acc, h| {
        acc.saturating_add(CARD_GAP).saturating_add(h)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisOutcome, ClinicalEntity};
    use crate::core::presenter::{Screen, present};
    use crate::test_support::{bare_condition, report_with};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn results_view(count: usize) -> ResultsView {
        let results = (0..count)
            .map(|i| bare_condition(&format!("Condition{i}"), 50.0 + i as f64))
            .collect();
        let mut report = report_with(results);
        report.entities = vec![ClinicalEntity {
            text: "headache".to_string(),
            label: Some("PROBLEM".to_string()),
            score: 0.91,
        }];
        match present(&AnalysisOutcome::Succeeded(report)) {
            Screen::Results(view) => view,
            other => panic!("Expected Results, got {:?}", other),
        }
    }

    fn draw(view: &ResultsView, state: &mut ResultListState, height: u16) -> String {
        let backend = TestBackend::new(80, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ResultList::new(view, state).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_header_and_first_card() {
        let view = results_view(1);
        let mut state = ResultListState::new();
        let text = draw(&view, &mut state, 40);
        assert!(text.contains("headache"));
        assert!(text.contains("PROBLEM · 91%"));
        assert!(text.contains("Condition0"));
        assert!(text.contains("50%"));
        assert!(!state.has_unseen_content());
    }

    #[test]
    fn test_long_list_scrolls_and_clamps() {
        let view = results_view(5);
        let mut state = ResultListState::new();
        draw(&view, &mut state, 10);
        assert!(state.content_height > state.viewport_height);
        assert!(state.has_unseen_content());

        for _ in 0..500 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        let max_y = state.content_height - state.viewport_height;
        assert_eq!(state.scroll_state.offset().y, max_y);
        assert!(!state.has_unseen_content());

        state.handle_event(&TuiEvent::ScrollToTop);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_content_height_saturates() {
        assert_eq!(content_height(2, [5, 7].into_iter()), 2 + 1 + 5 + 1 + 7);
        assert_eq!(content_height(3, std::iter::empty()), 3);
        assert_eq!(
            content_height(10, [u16::MAX - 5, 100, 100].into_iter()),
            u16::MAX
        );
    }

    #[test]
    fn test_reset_returns_to_top() {
        let view = results_view(5);
        let mut state = ResultListState::new();
        draw(&view, &mut state, 10);
        state.handle_event(&TuiEvent::ScrollPageDown);
        state.reset();
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
