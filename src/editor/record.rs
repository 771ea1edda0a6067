/// One of the two editable parts of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Speaker,
    Content,
}

impl Field {
    /// The other field of the same record.
    pub const fn other(self) -> Self {
        match self {
            Self::Speaker => Self::Content,
            Self::Content => Self::Speaker,
        }
    }

    /// Short label used by the status bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Speaker => "speaker",
            Self::Content => "content",
        }
    }
}

/// One dialogue entry: a speaker and what they said.
///
/// Neither field ever contains a tab, carriage return, or newline, so a
/// record always serializes to exactly one `speaker\tcontent` line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    speaker: String,
    content: String,
}

impl Record {
    /// Create a record, replacing any line or field separators with spaces.
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: sanitize(speaker.into()),
            content: sanitize(content.into()),
        }
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text of the given field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Speaker => &self.speaker,
            Field::Content => &self.content,
        }
    }

    /// Length of the given field in characters.
    pub fn field_len(&self, field: Field) -> usize {
        self.field(field).chars().count()
    }

    pub fn set_speaker(&mut self, speaker: impl Into<String>) {
        self.speaker = sanitize(speaker.into());
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = sanitize(content.into());
    }

    /// Split into owned `(speaker, content)`.
    pub fn into_pair(self) -> (String, String) {
        (self.speaker, self.content)
    }

    pub(super) fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Speaker => &mut self.speaker,
            Field::Content => &mut self.content,
        }
    }
}

impl<S: Into<String>, C: Into<String>> From<(S, C)> for Record {
    fn from((speaker, content): (S, C)) -> Self {
        Self::new(speaker, content)
    }
}

/// Whether `ch` would break the one-record-per-line format.
pub const fn is_separator(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r')
}

fn sanitize(text: String) -> String {
    if text.contains(is_separator) {
        text.replace(is_separator, " ")
    } else {
        text
    }
}

/// Byte offset of the `col`-th character of `text`, clamped to its end.
pub(super) fn byte_offset(text: &str, col: usize) -> usize {
    text.char_indices().nth(col).map_or(text.len(), |(i, _)| i)
}
