//! Cursor position and internal scroll for the symptom input.
//!
//! The buffer itself is owned by `InputBox`; every method takes it as `&str`.

use super::text_wrap::{
    CONTENT_OFFSET, MAX_VISIBLE_LINES, inner_width, next_char_boundary, next_word_boundary,
    prev_char_boundary, prev_word_boundary, wrap_line_count, wrap_options,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Byte offset into the buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped line
    pub scroll_offset: u16,
    /// Area width from the last render, used for vertical movement
    pub last_area_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_area_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Jump to the end of `buffer`, e.g. after the text is replaced wholesale.
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
    }

    pub fn left(&mut self, buffer: &str) -> bool {
        self.step(prev_char_boundary(buffer, self.pos))
    }

    pub fn right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.step(next_char_boundary(buffer, self.pos))
    }

    pub fn word_left(&mut self, buffer: &str) -> bool {
        self.step(prev_word_boundary(buffer, self.pos))
    }

    pub fn word_right(&mut self, buffer: &str) -> bool {
        self.step(next_word_boundary(buffer, self.pos))
    }

    pub fn home(&mut self, buffer: &str) -> bool {
        let line_start = buffer[..self.pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
        self.step(line_start)
    }

    pub fn end(&mut self, buffer: &str) -> bool {
        let line_end = buffer[self.pos..]
            .find('\n')
            .map(|i| self.pos + i)
            .unwrap_or(buffer.len());
        self.step(line_end)
    }

    fn step(&mut self, target: usize) -> bool {
        let moved = target != self.pos;
        self.pos = target;
        moved
    }

    /// Move one wrapped line up (`-1`) or down (`1`), keeping the column
    /// where possible. Returns `false` at the first or last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let width = inner_width(self.last_area_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }
        let lines = textwrap::wrap(buffer, wrap_options(width));

        // Byte start of every wrapped line. Spaces and newlines swallowed by
        // textwrap are added back so offsets stay aligned with the buffer.
        let bytes = buffer.as_bytes();
        let mut starts = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in &lines {
            starts.push(offset);
            offset += line.len();
            while bytes.get(offset) == Some(&b' ') {
                offset += 1;
            }
            if bytes.get(offset) == Some(&b'\n') {
                offset += 1;
            }
        }

        let current = starts
            .iter()
            .rposition(|&start| start <= self.pos)
            .unwrap_or(0);
        let target = match direction {
            d if d < 0 && current > 0 => current - 1,
            d if d > 0 && current + 1 < lines.len() => current + 1,
            _ => return false,
        };

        let column = self.pos - starts[current];
        self.pos = starts[target] + column.min(lines[target].len());
        true
    }

    /// Wrapped line (0-based) the cursor sits on.
    pub fn line(&self, buffer: &str, area_width: u16) -> u16 {
        let width = inner_width(area_width);
        if width == 0 {
            return 0;
        }
        wrap_line_count(&buffer[..self.pos], width).saturating_sub(1)
    }

    /// Keep the cursor line inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        if wrap_line_count(buffer, inner_width(area_width)) <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }
        let line = self.line(buffer, area_width);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = line + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Terminal (column, row) for the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET, area.y + 1);
        }

        let before = &buffer[..self.pos];
        let logical_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let logical = &before[logical_start..];

        // Column counts chars so trailing spaces, which textwrap trims, still count
        let segments = textwrap::wrap(logical, wrap_options(width));
        let consumed: usize = segments
            .iter()
            .take(segments.len().saturating_sub(1))
            .map(|seg| seg.chars().count())
            .sum();
        let column = logical.chars().count().saturating_sub(consumed) as u16;

        let row = self.line(buffer, area.width).saturating_sub(self.scroll_offset);
        (area.x + CONTENT_OFFSET + column, area.y + 1 + row)
    }
}
