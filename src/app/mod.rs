//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{FOOTER_ROWS, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::DEFAULT_AUTOSAVE_INTERVAL;
use crate::editor::DEFAULT_UNDO_LIMIT;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    join_speakers: bool,
    autosave_interval: u32,
    undo_limit: usize,
}

impl App {
    /// Create a new application for the given file, or an unnamed transcript.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            join_speakers: false,
            autosave_interval: DEFAULT_AUTOSAVE_INTERVAL,
            undo_limit: DEFAULT_UNDO_LIMIT,
        }
    }

    /// Join consecutive same-speaker lines when loading.
    pub const fn with_join_speakers(mut self, enabled: bool) -> Self {
        self.join_speakers = enabled;
        self
    }

    /// Key events between swap-file writes (0 disables autosave).
    pub const fn with_autosave_interval(mut self, interval: u32) -> Self {
        self.autosave_interval = interval;
        self
    }

    /// Maximum number of undo snapshots.
    pub const fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = limit;
        self
    }
}
