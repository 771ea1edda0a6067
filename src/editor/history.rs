//! Snapshot-based undo for the transcript editor.

use std::collections::VecDeque;

use super::document::Document;

/// Number of snapshots kept when no limit is configured.
pub const DEFAULT_UNDO_LIMIT: usize = 100;

/// Bounded stack of full document snapshots.
///
/// Snapshots are taken of live documents only, so every state this log can
/// hand back already satisfies the document invariants. When full, the
/// oldest snapshot is dropped.
#[derive(Debug, Clone)]
pub struct UndoLog {
    snapshots: VecDeque<Document>,
    capacity: usize,
}

impl UndoLog {
    /// Create an undo log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_LIMIT)
    }

    /// Create an undo log holding at most `capacity` snapshots (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(DEFAULT_UNDO_LIMIT)),
            capacity,
        }
    }

    /// Push a copy of `doc`, evicting the oldest snapshot when full.
    pub fn snapshot(&mut self, doc: &Document) {
        if self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(doc.clone());
    }

    /// Pop the newest snapshot, or hand back `current` when there is none.
    pub fn undo(&mut self, current: Document) -> Document {
        self.snapshots.pop_back().unwrap_or(current)
    }

    /// The snapshot `undo` would restore next.
    pub fn peek(&self) -> Option<&Document> {
        self.snapshots.back()
    }

    /// Forget every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Number of snapshots available to undo.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Field;

    fn doc_with(content: &str) -> Document {
        Document::from_pairs([("A", content)])
    }

    #[test]
    fn test_undo_on_empty_log_returns_current() {
        let mut log = UndoLog::new();
        let current = doc_with("now");
        assert_eq!(log.undo(current.clone()), current);
    }

    #[test]
    fn test_undo_pops_newest_first() {
        let mut log = UndoLog::new();
        log.snapshot(&doc_with("one"));
        log.snapshot(&doc_with("two"));
        assert_eq!(log.depth(), 2);
        assert_eq!(log.undo(doc_with("three")), doc_with("two"));
        assert_eq!(log.undo(doc_with("two")), doc_with("one"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_snapshot_restores_cursor() {
        let mut log = UndoLog::new();
        let mut doc = doc_with("hello");
        doc.move_to(0, Field::Content, 3);
        log.snapshot(&doc);
        doc.insert_char('!');
        let restored = log.undo(doc);
        assert_eq!(restored.cursor().col, 3);
        assert_eq!(restored.records()[0].content(), "hello");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = UndoLog::with_capacity(2);
        log.snapshot(&doc_with("one"));
        log.snapshot(&doc_with("two"));
        log.snapshot(&doc_with("three"));
        assert_eq!(log.depth(), 2);
        assert_eq!(log.undo(Document::new()), doc_with("three"));
        assert_eq!(log.undo(Document::new()), doc_with("two"));
        let floor = doc_with("floor");
        assert_eq!(log.undo(floor.clone()), floor);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut log = UndoLog::with_capacity(0);
        assert_eq!(log.capacity(), 1);
        log.snapshot(&doc_with("kept"));
        assert_eq!(log.depth(), 1);
    }

    #[test]
    fn test_clear_drops_history() {
        let mut log = UndoLog::new();
        log.snapshot(&doc_with("one"));
        log.clear();
        assert_eq!(log.depth(), 0);
    }
}
