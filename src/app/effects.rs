use std::path::Path;

use crate::app::{App, Model, ToastLevel};
use crate::editor::{Document, Request, Session};
use crate::transcript::{self, TranscriptError};

impl App {
    /// Perform the file I/O `update` queued on the model.
    pub(super) fn handle_message_side_effects(model: &mut Model) {
        match model.take_pending() {
            Some(Request::Save) => save(model),
            Some(Request::Reload) => reload(model),
            Some(Request::Quit) | None => {}
        }
        if std::mem::take(&mut model.autosave_due) {
            autosave(model);
        }
    }
}

/// Build a session from `path`, or an empty one if the file does not exist yet.
///
/// Returns whether the file existed alongside the session.
pub(super) fn load_session(
    path: &Path,
    join_speakers: bool,
    undo_limit: usize,
) -> Result<(Session, bool), TranscriptError> {
    if !path.exists() {
        return Ok((Session::with_document(Document::new(), undo_limit), false));
    }
    let mut pairs = transcript::read_file(path)?;
    if join_speakers {
        let before = pairs.len();
        pairs = transcript::join_same_speaker(pairs);
        tracing::debug!(before, after = pairs.len(), "joined same-speaker lines");
    }
    let mut session = Session::with_document(Document::new(), undo_limit);
    session.load(pairs);
    Ok((session, true))
}

fn save(model: &mut Model) {
    let Some(path) = model.file_path.clone() else {
        model.show_toast(
            ToastLevel::Warning,
            format!(
                "No file name; changes are only autosaved to {}",
                model.swap_path().display()
            ),
        );
        return;
    };
    match transcript::write_file(&path, &model.session.serialize()) {
        Ok(()) => {
            model.mark_saved();
            tracing::info!(path = %path.display(), "saved");
            model.show_toast(ToastLevel::Info, format!("Saved {}", model.display_name()));
        }
        Err(err) => {
            tracing::warn!(%err, "save failed");
            model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
        }
    }
}

fn reload(model: &mut Model) {
    let Some(path) = model.file_path.clone() else {
        return;
    };
    let undo_limit = model.session.history().capacity();
    match load_session(&path, model.join_speakers, undo_limit) {
        Ok((session, _)) => {
            model.replace_session(session);
            tracing::info!(path = %path.display(), "reloaded");
            model.show_toast(ToastLevel::Info, "Reloaded");
        }
        Err(err) => {
            tracing::warn!(%err, "reload failed");
            model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
        }
    }
}

fn autosave(model: &mut Model) {
    let swap = model.swap_path();
    match transcript::write_file(&swap, &model.session.serialize()) {
        Ok(()) => tracing::debug!(path = %swap.display(), "autosaved"),
        Err(err) => {
            tracing::warn!(%err, "autosave failed");
            model.show_toast(ToastLevel::Warning, format!("Autosave failed: {err}"));
        }
    }
}
