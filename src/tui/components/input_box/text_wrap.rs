//! Wrapping helpers and size constants for the symptom input.
//!
//! Stateless; shared by `InputBox` and `CursorState`.

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Content lines shown before the input scrolls internally
pub(super) const MAX_VISIBLE_LINES: u16 = 4;
/// Offset from area edge to content (border + left padding)
pub(super) const CONTENT_OFFSET: u16 = 2;

pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Width left for text once borders and padding are taken out. 0 if too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrapped line count, counting a trailing newline as its own line.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }
    count
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Start of the word before `pos`, skipping any separators first.
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut boundary = pos;
    let mut seen_word = false;
    for (i, c) in text[..pos].char_indices().rev() {
        if is_word_char(c) {
            seen_word = true;
            boundary = i;
        } else if seen_word {
            break;
        } else {
            boundary = i;
        }
    }
    if seen_word { boundary } else { 0 }
}

/// End of the word after `pos`, skipping any separators first.
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let mut seen_word = false;
    for (i, c) in text[pos..].char_indices() {
        if is_word_char(c) {
            seen_word = true;
        } else if seen_word {
            return pos + i;
        }
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_line_count_empty_and_zero_width() {
        assert_eq!(wrap_line_count("", 80), 1);
        assert_eq!(wrap_line_count("fever", 0), 1);
    }

    #[test]
    fn wrap_line_count_wraps_long_text() {
        // 10 chars into a 5-wide column
        assert_eq!(wrap_line_count("aaaaaaaaaa", 5), 2);
    }

    #[test]
    fn wrap_line_count_counts_newlines() {
        assert_eq!(wrap_line_count("fever\n", 80), 2);
        assert_eq!(wrap_line_count("fever\nchills\nbody ache", 80), 3);
    }

    #[test]
    fn char_boundaries_handle_multibyte() {
        // "jvara" in Devanagari is multi-byte per char
        let s = "ज्वर";
        let end = s.len();
        let prev = prev_char_boundary(s, end);
        assert!(s.is_char_boundary(prev));
        assert_eq!(next_char_boundary(s, prev), end);
        assert_eq!(prev_char_boundary("ab", 1), 0);
    }

    #[test]
    fn word_boundaries() {
        let s = "stomach pain, nausea";
        assert_eq!(prev_word_boundary(s, s.len()), 14);
        assert_eq!(prev_word_boundary(s, 14), 8);
        assert_eq!(prev_word_boundary(s, 3), 0);
        assert_eq!(next_word_boundary(s, 0), 7);
        assert_eq!(next_word_boundary(s, 7), 12);
        assert_eq!(next_word_boundary(s, 12), s.len());
    }

    #[test]
    fn hyphenated_words_stay_whole() {
        assert_eq!(next_word_boundary("low-grade fever", 0), 9);
        assert_eq!(prev_word_boundary("low-grade fever", 9), 0);
    }
}
