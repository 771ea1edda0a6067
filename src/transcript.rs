//! Tab-separated transcript files.
//!
//! One record per line: `speaker\tcontent`. Only the first tab on a line
//! separates the fields; a line without a tab is a speaker with no content.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Longest content (in characters) produced by joining same-speaker lines.
pub const JOIN_MAX_CHARS: usize = 150;

/// Characters after which a join does not insert a space.
const JOIN_NO_SPACE_AFTER: &[char] = &['.', '!', '?', ',', ':', ';'];

/// Failures reading or writing a transcript file.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Pairs = Vec<(String, String)>;

/// Parse transcript text into `(speaker, content)` pairs.
pub fn parse(text: &str) -> Pairs {
    text.lines()
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            match line.split_once('\t') {
                Some((speaker, content)) => (speaker.to_string(), content.to_string()),
                None => (line.to_string(), String::new()),
            }
        })
        .collect()
}

/// Render pairs back to transcript text, one terminated line per pair.
pub fn serialize<S: AsRef<str>, C: AsRef<str>>(pairs: &[(S, C)]) -> String {
    let mut out = String::new();
    for (speaker, content) in pairs {
        out.push_str(speaker.as_ref());
        out.push('\t');
        out.push_str(content.as_ref());
        out.push('\n');
    }
    out
}

/// Read and parse a transcript file.
///
/// # Errors
/// Returns [`TranscriptError::Read`] if the file cannot be read as UTF-8.
pub fn read_file(path: &Path) -> Result<Pairs, TranscriptError> {
    let text = fs::read_to_string(path).map_err(|source| TranscriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = parse(&text);
    tracing::debug!(path = %path.display(), records = pairs.len(), "transcript read");
    Ok(pairs)
}

/// Serialize and write a transcript file, replacing its contents.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over `path`, so a failed write leaves the old file intact.
///
/// # Errors
/// Returns [`TranscriptError::Write`] if the file cannot be written.
pub fn write_file<S: AsRef<str>, C: AsRef<str>>(
    path: &Path,
    pairs: &[(S, C)],
) -> Result<(), TranscriptError> {
    write_atomically(path, &serialize(pairs)).map_err(|source| TranscriptError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = pairs.len(), "transcript written");
    Ok(())
}

fn write_atomically(path: &Path, text: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Swap file used for autosave: `.<name>.swp` beside the file, or
/// `.unnamed.swp` in the working directory.
pub fn swap_path(file: Option<&Path>) -> PathBuf {
    let Some(file) = file else {
        return PathBuf::from(".unnamed.swp");
    };
    let name = file
        .file_name()
        .map_or_else(|| "unnamed".to_string(), |n| n.to_string_lossy().to_string());
    let swap_name = format!(".{name}.swp");
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(swap_name),
        _ => PathBuf::from(swap_name),
    }
}

/// Join runs of lines from the same speaker into one record.
///
/// Lines containing `[` or `]` (stage directions, timestamps) are never
/// joined, and a join never grows content past [`JOIN_MAX_CHARS`].
pub fn join_same_speaker(pairs: Pairs) -> Pairs {
    let mut out: Pairs = Vec::with_capacity(pairs.len());
    for (speaker, content) in pairs {
        if let Some((prev_speaker, prev_content)) = out.last_mut()
            && *prev_speaker == speaker
            && !has_bracket(prev_content)
            && !has_bracket(&content)
            && prev_content.chars().count() + 1 + content.chars().count() <= JOIN_MAX_CHARS
        {
            if prev_content
                .chars()
                .last()
                .is_some_and(|c| !JOIN_NO_SPACE_AFTER.contains(&c))
            {
                prev_content.push(' ');
            }
            prev_content.push_str(&content);
            continue;
        }
        out.push((speaker, content));
    }
    out
}

fn has_bracket(text: &str) -> bool {
    text.contains(['[', ']'])
}
