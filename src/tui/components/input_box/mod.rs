//! # InputBox Component
//!
//! Free-text symptom entry.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste and editing keys
//! - Emit `Submit` on Enter without clearing, so the query stays visible
//!   next to its results
//! - Show a busy title while an analysis is in flight
//!
//! The buffer is internal state. `busy` and `focused` are props set by the
//! parent each frame. Cursor position and scroll live in `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    wrap_line_count, wrap_options,
};

const IDLE_TITLE: &str = "Describe your symptoms (Enter to analyze)";
const BUSY_TITLE: &str = "Analyzing...";
const PLACEHOLDER: &str = "e.g. I have a headache and feel nauseous since morning";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed with non-blank content
    Submit(String),
    /// Buffer text changed
    ContentChanged,
    /// Cursor moved without changing the text
    CursorMoved,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// An analysis is in flight (Prop)
    pub busy: bool,
    /// Keyboard focus is here rather than on the suggestion chips (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            busy: false,
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Replace the whole buffer, leaving the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor.move_to_end(&self.buffer);
    }

    /// Height for the current content, clamped to the visible line limit.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let lines = wrap_line_count(&self.buffer, inner_width(area_width));
        lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn visible_text(&self, area_width: u16) -> String {
        if self.cursor.scroll_offset == 0 {
            return self.buffer.clone();
        }
        let width = inner_width(area_width);
        if width == 0 {
            return String::new();
        }
        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    fn border_style(&self) -> Style {
        match (self.busy, self.focused) {
            (true, _) => Style::default().fg(Color::Yellow),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::DIM),
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_area_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let title = if self.busy { BUSY_TITLE } else { IDLE_TITLE };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(title)
            .padding(Padding::horizontal(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_text(area.width))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let (x, y) = self.cursor.screen_pos(&self.buffer, area);
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor.pos, text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Submit => {
                (!self.buffer.trim().is_empty()).then(|| InputEvent::Submit(self.buffer.clone()))
            }
            _ => self.move_cursor(event).then_some(InputEvent::CursorMoved),
        }
    }
}

impl InputBox {
    fn move_cursor(&mut self, event: &TuiEvent) -> bool {
        let buffer = self.buffer.as_str();
        match event {
            TuiEvent::CursorLeft => self.cursor.left(buffer),
            TuiEvent::CursorRight => self.cursor.right(buffer),
            TuiEvent::WordLeft => self.cursor.word_left(buffer),
            TuiEvent::WordRight => self.cursor.word_right(buffer),
            TuiEvent::CursorHome => self.cursor.home(buffer),
            TuiEvent::CursorEnd => self.cursor.end(buffer),
            TuiEvent::CursorUp => self.cursor.move_vertically(buffer, -1),
            TuiEvent::CursorDown => self.cursor.move_vertically(buffer, 1),
            _ => false,
        }
    }
}
