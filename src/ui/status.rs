use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

/// Text of the status bar, kept separate so it can be checked without a frame.
pub fn status_text(model: &Model) -> String {
    let doc = model.session.document();
    let cursor = doc.cursor();
    let dirty_indicator = if model.is_dirty() { " [modified]" } else { "" };
    format!(
        " {}{}  Entry {}/{}  {} col {}  ^S save  ^Z undo  ^Q quit",
        model.display_name(),
        dirty_indicator,
        cursor.entry + 1,
        doc.len(),
        cursor.field.label(),
        cursor.col + 1,
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status_bar = Paragraph::new(status_text(model))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
