//! Editing core for two-field dialogue transcripts.
//!
//! A [`Document`] holds ordered speaker/content [`Record`]s and a cursor
//! addressing one field of one record. A [`Session`] wraps the document with
//! an [`UndoLog`] and turns decoded [`Command`]s into edits. Nothing in here
//! touches the terminal or the filesystem.

mod document;
mod history;
mod record;
mod session;

pub use document::{Cursor, Direction, Document};
pub use history::{DEFAULT_UNDO_LIMIT, UndoLog};
pub use record::{Field, Record, is_separator};
pub use session::{Command, Outcome, Request, Session};
