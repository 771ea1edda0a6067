use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;
use crate::editor::Field;

use super::layout::{self, COLUMN_GAP, NUMBER_WIDTH, SPEAKER_WIDTH};
use super::status;

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let table_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    render_table(model, frame, table_area);
    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);
}

fn render_table(model: &Model, frame: &mut Frame, area: Rect) {
    let doc = model.session.document();
    let cursor = doc.cursor();
    let width = layout::content_width(area.width);
    let visible = model.viewport.offset()..model.viewport.offset() + area.height as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    let mut row = 0usize;
    for (idx, record) in doc.records().iter().enumerate() {
        if row >= visible.end {
            break;
        }
        let wrapped = layout::wrap_text(record.content(), width);
        if row + wrapped.len() <= visible.start {
            row += wrapped.len();
            continue;
        }
        let is_current = idx == cursor.entry;
        let (cursor_row, cursor_col) = if is_current && cursor.field == Field::Content {
            layout::locate_in_wrap(&wrapped, cursor.col)
        } else {
            (usize::MAX, 0)
        };

        for (part, wline) in wrapped.iter().enumerate() {
            if visible.contains(&row) {
                let mut spans = Vec::new();
                if part == 0 {
                    spans.push(number_span(idx + 1, is_current));
                    let speaker_cursor =
                        (is_current && cursor.field == Field::Speaker).then_some(cursor.col);
                    spans.extend(speaker_spans(record.speaker(), speaker_cursor));
                } else {
                    let blank = usize::from(NUMBER_WIDTH + COLUMN_GAP + SPEAKER_WIDTH + COLUMN_GAP);
                    spans.push(Span::raw(" ".repeat(blank)));
                }
                if part == cursor_row {
                    spans.extend(with_cursor(&wline.text, cursor_col, Style::default()));
                } else {
                    spans.push(Span::raw(wline.text.clone()));
                }
                lines.push(Line::from(spans));
            }
            row += 1;
        }
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines), area);
}

fn number_span(number: usize, is_current: bool) -> Span<'static> {
    let style = if is_current {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(
        format!("{number:>width$} ", width = usize::from(NUMBER_WIDTH)),
        style,
    )
}

/// Speaker cell padded to the column width plus the gap.
fn speaker_spans(speaker: &str, cursor_col: Option<usize>) -> Vec<Span<'static>> {
    let cell = usize::from(SPEAKER_WIDTH);
    let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans = match cursor_col {
        Some(col) => {
            let scroll = layout::speaker_scroll(col, cell);
            let tail: String = speaker.chars().skip(scroll).collect();
            let shown = layout::truncate_to_width(&tail, cell);
            with_cursor(&shown, col - scroll, style)
        }
        None => vec![Span::styled(layout::truncate_to_width(speaker, cell), style)],
    };
    let used: usize = spans.iter().map(Span::width).sum();
    let pad = (cell + usize::from(COLUMN_GAP)).saturating_sub(used);
    spans.push(Span::raw(" ".repeat(pad)));
    spans
}

/// Split `text` around a reversed cursor cell at character `col`.
fn with_cursor(text: &str, col: usize, style: Style) -> Vec<Span<'static>> {
    let before: String = text.chars().take(col).collect();
    let at: String = text.chars().nth(col).map_or_else(|| " ".to_string(), String::from);
    let after: String = text.chars().skip(col + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, style));
    }
    spans.push(Span::styled(at, style.reversed()));
    if !after.is_empty() {
        spans.push(Span::styled(after, style));
    }
    spans
}
