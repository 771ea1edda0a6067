//! Command interpreter: applies logical commands to a document and its
//! undo history.

use super::document::{Cursor, Direction, Document};
use super::history::UndoLog;
use super::record::Record;

/// A decoded editing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor(Direction),
    ToggleField,
    Home,
    End,
    InsertChar(char),
    DeleteBackward,
    Split,
    MergeWithPrevious,
    ClearSpeaker,
    MoveEntryUp,
    MoveEntryDown,
    Undo,
    Save,
    Reload,
    Quit,
}

impl Command {
    /// Whether the command edits records (and therefore snapshots first).
    pub const fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::DeleteBackward
                | Self::Split
                | Self::MergeWithPrevious
                | Self::ClearSpeaker
                | Self::MoveEntryUp
                | Self::MoveEntryDown
        )
    }
}

/// Work the session hands to the I/O layer instead of doing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Save,
    Reload,
    Quit,
}

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Cursor after the command.
    pub cursor: Cursor,
    /// Whether the records differ from before the command.
    pub changed: bool,
    /// Pass-through request for the I/O layer, if any.
    pub request: Option<Request>,
}

/// The editing session: one document and its undo history.
#[derive(Debug, Clone, Default)]
pub struct Session {
    document: Document,
    history: UndoLog,
}

impl Session {
    /// Start a session on an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session on `document` with an undo log of `undo_limit` snapshots.
    pub fn with_document(document: Document, undo_limit: usize) -> Self {
        Self {
            document,
            history: UndoLog::with_capacity(undo_limit),
        }
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub const fn history(&self) -> &UndoLog {
        &self.history
    }

    /// Replace the document with `pairs` and discard undo history.
    pub fn load<I, S, C>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        self.document = Document::from_pairs(pairs);
        self.history.clear();
        tracing::debug!(records = self.document.len(), "session loaded");
    }

    /// Ordered `(speaker, content)` pairs for the persistence layer.
    pub fn serialize(&self) -> Vec<(String, String)> {
        self.document.to_pairs()
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let request = match command {
            Command::Save => Some(Request::Save),
            Command::Reload => Some(Request::Reload),
            Command::Quit => Some(Request::Quit),
            _ => None,
        };
        if request.is_some() {
            return self.outcome(false, request);
        }

        if command == Command::Undo {
            let before = self.document.clone();
            let restored = self.history.undo(before.clone());
            let changed = restored.records() != before.records();
            self.document = restored;
            tracing::debug!(changed, depth = self.history.depth(), "undo");
            return self.outcome(changed, None);
        }

        if command.is_mutating() {
            self.history.snapshot(&self.document);
        }
        let applied = self.dispatch(command);
        let changed = command.is_mutating() && applied && self.differs_from_snapshot();
        tracing::debug!(?command, applied, changed, cursor = ?self.document.cursor(), "command");
        self.outcome(changed, None)
    }

    fn dispatch(&mut self, command: Command) -> bool {
        let doc = &mut self.document;
        match command {
            Command::MoveCursor(direction) => {
                doc.move_cursor(direction);
                true
            }
            Command::ToggleField => {
                doc.toggle_field();
                true
            }
            Command::Home => {
                doc.move_home();
                true
            }
            Command::End => {
                doc.move_end();
                true
            }
            Command::InsertChar(ch) => doc.insert_char(ch),
            Command::DeleteBackward => doc.delete_back(),
            Command::Split => doc.split_entry(),
            Command::MergeWithPrevious => doc.merge_with_previous(),
            Command::ClearSpeaker => doc.clear_speaker(),
            Command::MoveEntryUp => doc.move_entry_up(),
            Command::MoveEntryDown => doc.move_entry_down(),
            Command::Undo | Command::Save | Command::Reload | Command::Quit => false,
        }
    }

    /// Compare against the snapshot taken just before the mutation.
    fn differs_from_snapshot(&self) -> bool {
        self.history
            .peek()
            .is_none_or(|prev| prev.records() != self.document.records())
    }

    fn outcome(&self, changed: bool, request: Option<Request>) -> Outcome {
        Outcome {
            cursor: self.document.cursor(),
            changed,
            request,
        }
    }
}

impl From<Vec<Record>> for Session {
    fn from(records: Vec<Record>) -> Self {
        Self::with_document(Document::from_records(records), super::DEFAULT_UNDO_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Field;

    fn session(pairs: &[(&str, &str)]) -> Session {
        let mut s = Session::new();
        s.load(pairs.iter().copied());
        s
    }

    fn type_text(s: &mut Session, text: &str) {
        for ch in text.chars() {
            s.apply(Command::InsertChar(ch));
        }
    }

    #[test]
    fn test_navigation_never_snapshots() {
        let mut s = session(&[("A", "hello"), ("B", "world")]);
        for cmd in [
            Command::MoveCursor(Direction::Down),
            Command::MoveCursor(Direction::Right),
            Command::ToggleField,
            Command::End,
            Command::Home,
        ] {
            let outcome = s.apply(cmd);
            assert!(!outcome.changed);
        }
        assert_eq!(s.history().depth(), 0);
    }

    #[test]
    fn test_mutating_noop_still_snapshots() {
        let mut s = session(&[("A", "hello")]);
        let outcome = s.apply(Command::MoveEntryUp);
        assert!(!outcome.changed);
        assert_eq!(s.history().depth(), 1);
        let outcome = s.apply(Command::Undo);
        assert!(!outcome.changed);
        assert_eq!(s.history().depth(), 0);
    }

    #[test]
    fn test_insert_reports_changed_and_cursor() {
        let mut s = Session::new();
        let outcome = s.apply(Command::InsertChar('A'));
        assert!(outcome.changed);
        assert_eq!(outcome.cursor, Cursor::at(0, Field::Speaker, 1));
        assert_eq!(outcome.request, None);
    }

    #[test]
    fn test_rejected_insert_is_unchanged() {
        let mut s = Session::new();
        let outcome = s.apply(Command::InsertChar('\t'));
        assert!(!outcome.changed);
        assert_eq!(s.document().records()[0].speaker(), "");
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut s = session(&[("A", "abcd")]);
        s.apply(Command::ToggleField);
        s.apply(Command::MoveCursor(Direction::Right));
        s.apply(Command::MoveCursor(Direction::Right));
        let before = s.document().clone();
        s.apply(Command::Split);
        assert_eq!(s.document().len(), 2);
        let outcome = s.apply(Command::Undo);
        assert!(outcome.changed);
        assert_eq!(s.document(), &before);
        assert_eq!(outcome.cursor, Cursor::at(0, Field::Content, 2));
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut s = session(&[("A", "abcd")]);
        let before = s.document().clone();
        let outcome = s.apply(Command::Undo);
        assert!(!outcome.changed);
        assert_eq!(s.document(), &before);
    }

    #[test]
    fn test_swapping_identical_records_is_unchanged() {
        let mut s = session(&[("A", "same"), ("A", "same")]);
        s.apply(Command::MoveCursor(Direction::Down));
        // Identical records: the swap applies but leaves the text as it was.
        let outcome = s.apply(Command::MoveEntryUp);
        assert!(!outcome.changed);
        assert_eq!(outcome.cursor.entry, 0);
    }

    #[test]
    fn test_io_commands_pass_through() {
        let mut s = session(&[("A", "x")]);
        assert_eq!(s.apply(Command::Save).request, Some(Request::Save));
        assert_eq!(s.apply(Command::Reload).request, Some(Request::Reload));
        assert_eq!(s.apply(Command::Quit).request, Some(Request::Quit));
        assert_eq!(s.history().depth(), 0);
    }

    #[test]
    fn test_load_resets_history() {
        let mut s = Session::new();
        type_text(&mut s, "abc");
        assert_eq!(s.history().depth(), 3);
        s.load([("X", "y")]);
        assert_eq!(s.history().depth(), 0);
        assert_eq!(s.document().cursor(), Cursor::default());
        assert_eq!(s.serialize(), vec![("X".to_string(), "y".to_string())]);
    }

    #[test]
    fn test_end_to_end_split_and_merge() {
        let mut s = Session::new();
        type_text(&mut s, "A");
        s.apply(Command::ToggleField);
        type_text(&mut s, "Hi there");
        for _ in 0.." there".len() {
            s.apply(Command::MoveCursor(Direction::Left));
        }
        let outcome = s.apply(Command::Split);
        assert!(outcome.changed);
        assert_eq!(
            s.serialize(),
            vec![
                ("A".to_string(), "Hi".to_string()),
                (String::new(), " there".to_string()),
            ]
        );

        s.apply(Command::ToggleField);
        assert_eq!(s.document().cursor(), Cursor::at(1, Field::Content, 0));
        let outcome = s.apply(Command::DeleteBackward);
        assert!(outcome.changed);
        assert_eq!(
            s.serialize(),
            vec![("A".to_string(), "Hi there".to_string())]
        );
        assert_eq!(outcome.cursor, Cursor::at(0, Field::Content, 2));
    }

    #[test]
    fn test_merge_command_from_speaker() {
        let mut s = session(&[("A", "one"), ("B", "two")]);
        s.apply(Command::MoveCursor(Direction::Down));
        let outcome = s.apply(Command::MergeWithPrevious);
        assert!(outcome.changed);
        assert_eq!(s.document().len(), 1);
    }

    #[test]
    fn test_clear_speaker_command() {
        let mut s = session(&[("Alice", "hello")]);
        let outcome = s.apply(Command::ClearSpeaker);
        assert!(outcome.changed);
        assert_eq!(s.document().records()[0], Record::new("", "hello"));
    }

    #[test]
    fn test_from_records() {
        let s = Session::from(vec![Record::new("A", "b")]);
        assert_eq!(s.history().capacity(), crate::editor::DEFAULT_UNDO_LIMIT);
        assert_eq!(s.document().len(), 1);
    }
}
