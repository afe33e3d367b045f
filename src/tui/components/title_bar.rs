//! # TitleBar Component
//!
//! Top status line: app name, the service host, the current status and a
//! "↓ More" hint when the result list has content below the fold.
//!
//! Stateless. Every field is a prop:
//! - `service`: Core App state (resolved endpoint)
//! - `status_message`: Core App state (set by the reducer)
//! - `has_unseen_content`: TUI state (result scroll position)
//!
//! ```text
//! AyurAssist (service: host) | 1 condition(s) matched | ↓ More
//! AyurAssist (service: host) | Analyzing...
//! AyurAssist (service: host)
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub service: String,
    pub status_message: String,
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(endpoint: &str, status_message: String, has_unseen_content: bool) -> Self {
        Self {
            service: service_host(endpoint).to_string(),
            status_message,
            has_unseen_content,
        }
    }
}

/// Host part of an endpoint URL, or the whole string if it has no scheme.
fn service_host(endpoint: &str) -> &str {
    let rest = endpoint
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(endpoint);
    rest.split('/').next().unwrap_or(rest)
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "AyurAssist",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" (service: {})", self.service)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        if self.has_unseen_content {
            spans.push(Span::styled(" | ↓ More", Style::default().fg(Color::Yellow)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_service_host() {
        assert_eq!(
            service_host("https://example.modal.run/api/process"),
            "example.modal.run"
        );
        assert_eq!(service_host("localhost:8000"), "localhost:8000");
    }

    #[test]
    fn test_title_with_status_and_more() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8000",
            "2 condition(s) matched".to_string(),
            true,
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("AyurAssist (service: localhost:8000)"));
        assert!(text.contains("2 condition(s) matched"));
        assert!(text.contains("↓ More"));
    }

    #[test]
    fn test_title_without_status() {
        let mut title_bar = TitleBar::new("http://localhost:8000", String::new(), false);
        let text = rendered(&mut title_bar);
        assert!(text.contains("AyurAssist"));
        assert!(!text.contains('|'));
        assert!(!text.contains("↓ More"));
    }
}
