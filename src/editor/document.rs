use super::record::{Field, Record, byte_offset, is_separator};

/// Cursor position in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based record index.
    pub entry: usize,
    /// Field being edited.
    pub field: Field,
    /// Zero-based column in characters; may equal the field length.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(entry: usize, field: Field, col: usize) -> Self {
        Self { entry, field, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// An ordered transcript of records plus the editing cursor.
///
/// The document is never empty and the cursor always addresses a valid
/// position, so every operation here is total: an operation whose
/// precondition is not met leaves the document untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    records: Vec<Record>,
    cursor: Cursor,
}

impl Document {
    /// A document holding one empty record.
    pub fn new() -> Self {
        Self {
            records: vec![Record::default()],
            cursor: Cursor::default(),
        }
    }

    /// Build a document from records; an empty list yields one empty record.
    pub fn from_records(records: Vec<Record>) -> Self {
        if records.is_empty() {
            return Self::new();
        }
        Self {
            records,
            cursor: Cursor::default(),
        }
    }

    /// Build a document from `(speaker, content)` pairs.
    pub fn from_pairs<I, S, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        Self::from_records(pairs.into_iter().map(Record::from).collect())
    }

    /// Ordered `(speaker, content)` pairs for persistence.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.records.iter().cloned().map(Record::into_pair).collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    /// Number of records (always at least one).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Record under the cursor.
    pub fn current(&self) -> &Record {
        &self.records[self.cursor.entry]
    }

    /// Length of the field under the cursor.
    pub fn current_field_len(&self) -> usize {
        self.current().field_len(self.cursor.field)
    }

    // --- Navigation ---

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_vertical(-1),
            Direction::Down => self.move_vertical(1),
        }
    }

    /// Switch between speaker and content of the same record.
    pub fn toggle_field(&mut self) {
        self.cursor.field = self.cursor.field.other();
        self.cursor.col = self.cursor.col.min(self.current_field_len());
    }

    /// Move cursor to the beginning of the field (Home).
    pub const fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    /// Move cursor to the end of the field (End).
    pub fn move_end(&mut self) {
        self.cursor.col = self.current_field_len();
    }

    /// Place the cursor, clamping every component.
    pub fn move_to(&mut self, entry: usize, field: Field, col: usize) {
        let entry = entry.min(self.records.len() - 1);
        let max_col = self.records[entry].field_len(field);
        self.cursor = Cursor::at(entry, field, col.min(max_col));
    }

    // --- Editing ---

    /// Insert a character at the cursor.
    ///
    /// Returns `false` (and does nothing) for tab, CR and newline.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if is_separator(ch) {
            return false;
        }
        let Cursor { entry, field, col } = self.cursor;
        let text = self.records[entry].field_mut(field);
        let at = byte_offset(text, col);
        text.insert(at, ch);
        self.cursor.col += 1;
        true
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At the start of a non-first record's content this merges the record
    /// into its predecessor. Returns `true` if anything changed.
    pub fn delete_back(&mut self) -> bool {
        let Cursor { entry, field, col } = self.cursor;
        if col == 0 {
            return field == Field::Content && self.merge_with_previous();
        }
        let text = self.records[entry].field_mut(field);
        let start = byte_offset(text, col - 1);
        let end = byte_offset(text, col);
        text.replace_range(start..end, "");
        self.cursor.col -= 1;
        true
    }

    /// Split the record at the cursor (Enter, content field only).
    ///
    /// The tail of the content moves into a new record with an empty
    /// speaker, and the cursor lands on that record's speaker.
    pub fn split_entry(&mut self) -> bool {
        let Cursor { entry, field, col } = self.cursor;
        if field != Field::Content {
            return false;
        }
        let content = self.records[entry].field_mut(Field::Content);
        let at = byte_offset(content, col);
        let tail = content.split_off(at);
        self.records.insert(entry + 1, Record::new("", tail));
        self.cursor = Cursor::at(entry + 1, Field::Speaker, 0);
        true
    }

    /// Append this record's content to the previous record and remove it.
    ///
    /// The previous speaker is kept and the cursor sits at the seam.
    pub fn merge_with_previous(&mut self) -> bool {
        let entry = self.cursor.entry;
        if entry == 0 {
            return false;
        }
        let removed = self.records.remove(entry);
        let prev = self.records[entry - 1].field_mut(Field::Content);
        let seam = prev.chars().count();
        prev.push_str(removed.content());
        self.cursor = Cursor::at(entry - 1, Field::Content, seam);
        true
    }

    /// Empty the speaker of the current record (speaker field only).
    pub fn clear_speaker(&mut self) -> bool {
        if self.cursor.field != Field::Speaker {
            return false;
        }
        self.records[self.cursor.entry].set_speaker("");
        self.cursor.col = 0;
        true
    }

    /// Swap the current record with the one above it.
    pub fn move_entry_up(&mut self) -> bool {
        let entry = self.cursor.entry;
        if entry == 0 {
            return false;
        }
        self.records.swap(entry, entry - 1);
        self.cursor.entry = entry - 1;
        true
    }

    /// Swap the current record with the one below it.
    pub fn move_entry_down(&mut self) -> bool {
        let entry = self.cursor.entry;
        if entry + 1 >= self.records.len() {
            return false;
        }
        self.records.swap(entry, entry + 1);
        self.cursor.entry = entry + 1;
        true
    }

    // --- Private helpers ---

    fn move_left(&mut self) {
        let Cursor { entry, field, col } = self.cursor;
        if col > 0 {
            self.cursor.col = col - 1;
        } else if field == Field::Content {
            self.move_to(entry, Field::Speaker, usize::MAX);
        } else if entry > 0 {
            self.move_to(entry - 1, Field::Content, usize::MAX);
        }
    }

    fn move_right(&mut self) {
        let Cursor { entry, field, col } = self.cursor;
        if col < self.current_field_len() {
            self.cursor.col = col + 1;
        } else if field == Field::Speaker {
            self.cursor = Cursor::at(entry, Field::Content, 0);
        } else if entry + 1 < self.records.len() {
            self.cursor = Cursor::at(entry + 1, Field::Speaker, 0);
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let Some(target) = self.cursor.entry.checked_add_signed(delta) else {
            return;
        };
        if target >= self.records.len() {
            return;
        }
        self.move_to(target, self.cursor.field, self.cursor.col);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
