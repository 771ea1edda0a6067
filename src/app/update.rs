use crate::app::{Model, ToastLevel};
use crate::editor::{Command, Request};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// An editing command decoded from a key
    Edit(Command),
    /// A key with no binding; the text is shown as a hint
    Hint(String),
    /// Scroll the table up by n rows
    ScrollUp(usize),
    /// Scroll the table down by n rows
    ScrollDown(usize),
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,
}

impl Message {
    /// Whether the message counts as a key event for autosave.
    const fn is_key(&self) -> bool {
        matches!(self, Self::Edit(_) | Self::Hint(_))
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// File I/O is queued on the model and done by the side-effect handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Reset confirmation flags on any action other than the confirmed one.
    // Save preserves the quit flag so Ctrl+S can complete a pending quit.
    if !matches!(msg, Message::Edit(Command::Quit | Command::Save)) {
        model.quit_confirmed = false;
    }
    if !matches!(msg, Message::Edit(Command::Reload)) {
        model.reload_confirmed = false;
    }
    if msg.is_key() {
        tick_autosave(&mut model);
    }

    match msg {
        Message::Edit(command) => apply_command(&mut model, command),
        Message::Hint(text) => model.show_toast(ToastLevel::Info, text),
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::Resize(width, height) => {
            model
                .viewport
                .resize(width, height.saturating_sub(super::model::FOOTER_ROWS));
            model.follow_cursor();
        }
        Message::Redraw => {}
    }
    model
}

fn apply_command(model: &mut Model, command: Command) {
    let history_before = model.session.history().depth();
    let entry_before = model.session.document().cursor().entry;
    let outcome = model.session.apply(command);
    if outcome.changed {
        model.refresh_hash();
    }

    match outcome.request {
        Some(Request::Save) => model.pending = Some(Request::Save),
        Some(Request::Reload) => request_reload(model),
        Some(Request::Quit) => request_quit(model),
        None => {}
    }

    let moved = outcome.cursor.entry != entry_before;
    if let Some(note) = feedback(command, outcome.changed, moved, history_before) {
        model.show_toast(ToastLevel::Info, note);
    }
    model.follow_cursor();
}

/// Short status feedback for commands that can silently do nothing.
fn feedback(
    command: Command,
    changed: bool,
    moved: bool,
    history_before: usize,
) -> Option<&'static str> {
    match command {
        Command::MoveEntryUp if !moved => Some("Already at the top"),
        Command::MoveEntryDown if !moved => Some("Already at the bottom"),
        Command::MoveEntryUp => Some("Moved entry up"),
        Command::MoveEntryDown => Some("Moved entry down"),
        Command::Split if !changed => Some("Split only works in the content field"),
        Command::MergeWithPrevious if !changed => Some("Nothing to merge with"),
        Command::Undo if history_before == 0 => Some("Nothing to undo"),
        _ => None,
    }
}

fn request_quit(model: &mut Model) {
    if model.is_dirty() && !model.quit_confirmed {
        model.show_toast(
            ToastLevel::Warning,
            "Unsaved changes! Press quit again to discard them, or Ctrl+S to save",
        );
        model.quit_confirmed = true;
    } else {
        model.should_quit = true;
    }
}

fn request_reload(model: &mut Model) {
    if model.file_path.is_none() {
        model.show_toast(ToastLevel::Warning, "No file to reload");
        return;
    }
    if model.is_dirty() && !model.reload_confirmed {
        model.show_toast(
            ToastLevel::Warning,
            "Unsaved changes! Press Ctrl+R again to discard them and reload",
        );
        model.reload_confirmed = true;
    } else {
        model.pending = Some(Request::Reload);
    }
}

fn tick_autosave(model: &mut Model) {
    if model.autosave_interval == 0 {
        return;
    }
    model.keys_since_autosave += 1;
    if model.keys_since_autosave >= model.autosave_interval {
        model.keys_since_autosave = 0;
        model.autosave_due = true;
    }
}
