// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. transcript::TranscriptError)
    clippy::module_name_repetitions
)]

//! # Parley
//!
//! A terminal editor for two-column dialogue transcripts.
//!
//! A transcript is a tab-separated file with one `speaker<TAB>content` line
//! per entry. Parley shows it as a table and lets you:
//! - Edit either field of any entry in place
//! - Split an entry at the cursor and merge it back
//! - Reorder entries and clear speakers
//! - Undo any edit
//!
//! ## Architecture
//!
//! The editing core ([`editor`]) is free of I/O. The shell around it uses
//! The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: Records, the document, undo history and commands
//! - [`transcript`]: Reading and writing TSV transcripts
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags
//! - [`logging`]: Tracing subscriber setup

pub mod app;
pub mod config;
pub mod editor;
pub mod logging;
pub mod transcript;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Command, Document, Field, Record, Session};
    pub use crate::ui::viewport::Viewport;
}
