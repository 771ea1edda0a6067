//! Table geometry: column widths, content wrapping, and where the cursor
//! lands on screen.
//!
//! Everything here is pure so `update` can keep the viewport following the
//! cursor without touching the terminal.

use unicode_width::UnicodeWidthChar;

use crate::editor::{Document, Field, Record};

/// Width of the entry-number column.
pub const NUMBER_WIDTH: u16 = 6;
/// Width of the speaker column.
pub const SPEAKER_WIDTH: u16 = 15;
/// Blank columns between table columns.
pub const COLUMN_GAP: u16 = 1;
/// Content never wraps wider than this, however wide the terminal.
pub const MAX_CONTENT_WIDTH: usize = 50;

/// Screen column where the speaker field starts.
pub const SPEAKER_X: u16 = NUMBER_WIDTH + COLUMN_GAP;
/// Screen column where the content field starts.
pub const CONTENT_X: u16 = SPEAKER_X + SPEAKER_WIDTH + COLUMN_GAP;

/// One display row of wrapped content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    /// Character offset of the first character of `text` in the content.
    pub start: usize,
    pub text: String,
}

/// Columns available for content at a given terminal width.
pub fn content_width(total_width: u16) -> usize {
    usize::from(total_width.saturating_sub(CONTENT_X)).clamp(1, MAX_CONTENT_WIDTH)
}

/// Wrap `text` to `width` characters, breaking at the last space that fits.
///
/// The space at a break is consumed. A word longer than the width is cut
/// mid-word. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<WrappedLine> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        if chars.len() - start <= width {
            lines.push(WrappedLine {
                start,
                text: chars[start..].iter().collect(),
            });
            break;
        }
        let window = &chars[start..=start + width];
        match window.iter().rposition(|&c| c == ' ') {
            Some(brk) if brk > 0 => {
                lines.push(WrappedLine {
                    start,
                    text: window[..brk].iter().collect(),
                });
                start += brk + 1;
            }
            _ => {
                lines.push(WrappedLine {
                    start,
                    text: window[..width].iter().collect(),
                });
                start += width;
            }
        }
    }
    if lines.is_empty() {
        lines.push(WrappedLine {
            start: 0,
            text: String::new(),
        });
    }
    lines
}

/// Map a content column to `(row, column)` within its wrapped lines.
pub fn locate_in_wrap(lines: &[WrappedLine], col: usize) -> (usize, usize) {
    let row = lines
        .iter()
        .rposition(|line| line.start <= col)
        .unwrap_or(0);
    let Some(line) = lines.get(row) else {
        return (0, 0);
    };
    // A space consumed at a break has no cell; sit at the end of the line.
    (row, col.saturating_sub(line.start).min(line.text.chars().count()))
}

/// First speaker character shown so the cursor stays inside a `width` cell.
pub const fn speaker_scroll(col: usize, width: usize) -> usize {
    (col + 1).saturating_sub(width)
}

/// Display rows taken by one record.
pub fn record_rows(record: &Record, width: usize) -> usize {
    wrap_text(record.content(), width).len()
}

/// Display rows taken by the whole document.
pub fn total_rows(doc: &Document, width: usize) -> usize {
    doc.records().iter().map(|r| record_rows(r, width)).sum()
}

/// Display row of the first line of `entry`.
pub fn entry_first_row(doc: &Document, entry: usize, width: usize) -> usize {
    doc.records()
        .iter()
        .take(entry)
        .map(|r| record_rows(r, width))
        .sum()
}

/// Display row and in-field screen column of the cursor.
pub fn cursor_position(doc: &Document, width: usize) -> (usize, usize) {
    let cursor = doc.cursor();
    let first = entry_first_row(doc, cursor.entry, width);
    match cursor.field {
        Field::Speaker => {
            let scroll = speaker_scroll(cursor.col, usize::from(SPEAKER_WIDTH));
            (first, cursor.col - scroll)
        }
        Field::Content => {
            let content = doc.current().content();
            let (row, col) = locate_in_wrap(&wrap_text(content, width), cursor.col);
            (first + row, col)
        }
    }
}

/// Cut `text` to at most `width` terminal columns.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[WrappedLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_content_width_is_capped() {
        assert_eq!(content_width(200), MAX_CONTENT_WIDTH);
        assert_eq!(content_width(CONTENT_X + 10), 10);
        assert_eq!(content_width(5), 1);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = wrap_text("hello", 10);
        assert_eq!(lines, vec![WrappedLine { start: 0, text: "hello".into() }]);
    }

    #[test]
    fn test_wrap_empty_text_is_one_empty_line() {
        assert_eq!(texts(&wrap_text("", 10)), vec![""]);
    }

    #[test]
    fn test_wrap_breaks_at_last_space_and_consumes_it() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(texts(&lines), vec!["the quick", "brown fox"]);
        assert_eq!(lines[1].start, 10);
    }

    #[test]
    fn test_wrap_space_right_after_width() {
        let lines = wrap_text("abcde fgh", 5);
        assert_eq!(texts(&lines), vec!["abcde", "fgh"]);
        assert_eq!(lines[1].start, 6);
    }

    #[test]
    fn test_wrap_cuts_long_words() {
        assert_eq!(texts(&wrap_text("abcdefghij", 4)), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_leading_space_does_not_stall() {
        let lines = wrap_text(" abcdefgh", 4);
        assert_eq!(texts(&lines), vec![" abc", "defg", "h"]);
    }

    #[test]
    fn test_locate_in_wrap() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(locate_in_wrap(&lines, 0), (0, 0));
        assert_eq!(locate_in_wrap(&lines, 9), (0, 9));
        assert_eq!(locate_in_wrap(&lines, 10), (1, 0));
        assert_eq!(locate_in_wrap(&lines, 19), (1, 9));
    }

    #[test]
    fn test_cursor_position_accounts_for_wrapped_records() {
        let long = "word ".repeat(30);
        let mut doc = Document::from_pairs([("A", long.as_str()), ("B", "short")]);
        let width = 20;
        let first_rows = record_rows(&doc.records()[0], width);
        assert!(first_rows > 1);
        assert_eq!(total_rows(&doc, width), first_rows + 1);

        doc.move_to(1, Field::Content, 3);
        assert_eq!(cursor_position(&doc, width), (first_rows, 3));

        doc.move_to(0, Field::Content, 22);
        assert_eq!(cursor_position(&doc, width), (1, 2));
    }

    #[test]
    fn test_speaker_cursor_sits_on_first_row() {
        let mut doc = Document::from_pairs([("A", "one"), ("Bob", "two")]);
        doc.move_to(1, Field::Speaker, 2);
        assert_eq!(cursor_position(&doc, 50), (1, 2));
    }

    #[test]
    fn test_locate_after_consumed_trailing_space_stays_in_line() {
        let content = format!("{} ", "x".repeat(50));
        let lines = wrap_text(&content, 50);
        assert_eq!(lines.len(), 1);
        assert_eq!(locate_in_wrap(&lines, 50), (0, 50));
        assert_eq!(locate_in_wrap(&lines, 51), (0, 50));

        let mut doc = Document::from_pairs([("A", content.as_str())]);
        doc.move_to(0, Field::Content, 51);
        assert_eq!(cursor_position(&doc, 50), (0, 50));
    }

    #[test]
    fn test_content_cursor_never_passes_width() {
        let content = "aaaa bbbb cccc dddd eeee ffff gggg hhhh iiii jjjj ";
        let doc_pairs = [("A", content)];
        let mut doc = Document::from_pairs(doc_pairs);
        for col in 0..=content.chars().count() {
            doc.move_to(0, Field::Content, col);
            let (_, x) = cursor_position(&doc, 10);
            assert!(x <= 10, "col {col} placed at {x}");
        }
    }

    #[test]
    fn test_long_speaker_cursor_scrolls_within_cell() {
        let speaker = "Alexandria Ocasio-Cortez";
        let mut doc = Document::from_pairs([(speaker, "hi")]);
        let cell = usize::from(SPEAKER_WIDTH);

        doc.move_to(0, Field::Speaker, 10);
        assert_eq!(cursor_position(&doc, 50), (0, 10));
        doc.move_to(0, Field::Speaker, 20);
        assert_eq!(cursor_position(&doc, 50), (0, cell - 1));
        assert_eq!(speaker_scroll(20, cell), 6);
        assert_eq!(speaker_scroll(14, cell), 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Alexandria Ocasio", 15), "Alexandria Ocas");
        assert_eq!(truncate_to_width("Bob", 15), "Bob");
        assert_eq!(truncate_to_width("日本語", 4), "日本");
    }
}
