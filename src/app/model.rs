use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::DEFAULT_AUTOSAVE_INTERVAL;
use crate::editor::{Request, Session};
use crate::transcript;
use crate::ui::layout;
use crate::ui::viewport::Viewport;

/// Rows below the table: one toast line and the status bar.
pub const FOOTER_ROWS: u16 = 2;

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Hash a byte slice for content comparison.
pub(super) fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}

fn session_hash(session: &Session) -> u64 {
    hash_bytes(transcript::serialize(&session.serialize()).as_bytes())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// Records, cursor and undo history
    pub session: Session,
    /// Scroll position over display rows
    pub viewport: Viewport,
    /// File being edited; `None` for an unnamed transcript
    pub file_path: Option<PathBuf>,
    /// Join same-speaker runs when (re)loading
    pub join_speakers: bool,
    /// Key events between swap writes; 0 disables autosave
    pub autosave_interval: u32,
    /// Key events since the last swap write
    pub(super) keys_since_autosave: u32,
    /// Set by `update` when a swap write is due
    pub(super) autosave_due: bool,
    /// I/O work accepted by `update`, performed by the side-effect handler
    pub(super) pending: Option<Request>,
    saved_hash: u64,
    current_hash: u64,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Set after first quit attempt with unsaved changes; allows second quit to proceed
    pub quit_confirmed: bool,
    /// Set after first reload attempt with unsaved changes; allows second reload to proceed
    pub reload_confirmed: bool,
}

impl Model {
    /// Create a model around a session loaded from `file_path`.
    pub fn new(file_path: Option<PathBuf>, session: Session, terminal_size: (u16, u16)) -> Self {
        let hash = session_hash(&session);
        let mut model = Self {
            session,
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(FOOTER_ROWS),
                0,
            ),
            file_path,
            join_speakers: false,
            autosave_interval: DEFAULT_AUTOSAVE_INTERVAL,
            keys_since_autosave: 0,
            autosave_due: false,
            pending: None,
            saved_hash: hash,
            current_hash: hash,
            toast: None,
            should_quit: false,
            quit_confirmed: false,
            reload_confirmed: false,
        };
        model.follow_cursor();
        model
    }

    /// Whether the records differ from what was last loaded or saved.
    pub const fn is_dirty(&self) -> bool {
        self.saved_hash != self.current_hash
    }

    /// File name for the status bar.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| "[unnamed]".to_string(), |n| n.to_string_lossy().to_string())
    }

    /// Swap file for autosave.
    pub fn swap_path(&self) -> PathBuf {
        transcript::swap_path(self.file_path.as_deref())
    }

    /// Columns available for wrapped content at the current width.
    pub fn content_width(&self) -> usize {
        layout::content_width(self.viewport.width())
    }

    /// Recompute the content hash after the records changed.
    pub(super) fn refresh_hash(&mut self) {
        self.current_hash = session_hash(&self.session);
    }

    /// Record the current records as the on-disk state.
    pub(super) const fn mark_saved(&mut self) {
        self.saved_hash = self.current_hash;
    }

    /// Replace the session after a (re)load and treat it as clean.
    pub(super) fn replace_session(&mut self, session: Session) {
        self.session = session;
        self.refresh_hash();
        self.mark_saved();
        self.follow_cursor();
    }

    /// Refresh the row count and scroll so the cursor row is visible.
    pub(super) fn follow_cursor(&mut self) {
        let width = self.content_width();
        let doc = self.session.document();
        self.viewport.set_total_rows(layout::total_rows(doc, width));
        let (row, _) = layout::cursor_position(doc, width);
        self.viewport.ensure_visible(row);
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Take the request `update` queued for the side-effect handler.
    pub(super) const fn take_pending(&mut self) -> Option<Request> {
        self.pending.take()
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(None, Session::new(), (80, 24))
    }
}
