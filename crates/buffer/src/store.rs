use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{LoadError, SaveError};
use crate::line_index::{build_line_starts, repair_from};

/// Flat byte store with a line-start offset table.
///
/// Content is held exactly as read from disk: no line-ending translation and
/// no trailing newline handling. The offset table is repaired after every
/// point edit so that it always equals a full rebuild over the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStore {
    /// Raw document bytes
    content: Vec<u8>,
    /// Offset of the first byte of each line, never empty
    line_starts: Vec<usize>,
}

impl TextStore {
    /// Create an empty store holding a single empty line
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            line_starts: vec![0],
        }
    }

    /// Create store from raw bytes
    pub fn from_bytes(content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let line_starts = build_line_starts(&content);
        Self {
            content,
            line_starts,
        }
    }

    /// Replace the content with the bytes of the file at `path`.
    ///
    /// On failure the store is reset to a single empty line before the error
    /// is returned, so it is valid either way.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(content) => {
                self.line_starts = build_line_starts(&content);
                self.content = content;
                Ok(())
            }
            Err(e) => {
                self.reset();
                Err(LoadError::from_io(path.to_path_buf(), e))
            }
        }
    }

    /// Write the content verbatim to `path`.
    ///
    /// The file is truncated in place. A write that fails part way can leave
    /// a short or empty file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SaveError::EmptyFilename);
        }

        let io_err = |source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::create(path).map_err(io_err)?;
        file.write_all(&self.content).map_err(io_err)?;
        file.flush().map_err(io_err)
    }

    /// Number of lines, always at least one
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Bytes of line `index` without its terminating newline.
    ///
    /// Out-of-range indices yield an empty slice. The view borrows the store
    /// and cannot outlive the next edit.
    pub fn line(&self, index: usize) -> &[u8] {
        match self.line_bounds(index) {
            Some((start, end)) => &self.content[start..end],
            None => &[],
        }
    }

    /// Length of line `index` in bytes, excluding the newline
    pub fn line_len(&self, index: usize) -> usize {
        self.line_bounds(index)
            .map(|(start, end)| end - start)
            .unwrap_or(0)
    }

    /// Entire document content
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Current line-start offset table
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// Document length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// True when the document holds no bytes (it still has one line)
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert `byte` at `(line, col)`.
    ///
    /// Coordinates past the end of the document or of the line are clamped.
    pub fn insert_byte(&mut self, line: usize, col: usize, byte: u8) {
        let pos = self.offset_of(line, col);
        self.content.insert(pos, byte);
        repair_from(&mut self.line_starts, &self.content, pos);
    }

    /// Delete the byte before `(line, col)` and return the new coordinate.
    ///
    /// At column zero the newline ending the previous line is removed and the
    /// two lines merge; the returned column is where the previous line ended
    /// before the merge. At the start of the document nothing happens.
    pub fn delete_byte_before(&mut self, line: usize, col: usize) -> (usize, usize) {
        let line = line.min(self.line_count() - 1);
        let col = col.min(self.line_len(line));

        if col > 0 {
            let pos = self.line_starts[line] + col - 1;
            self.content.remove(pos);
            repair_from(&mut self.line_starts, &self.content, pos);
            (line, col - 1)
        } else if line > 0 {
            let prev_len = self.line_len(line - 1);
            let pos = self.line_starts[line] - 1;
            self.content.remove(pos);
            repair_from(&mut self.line_starts, &self.content, pos);
            (line - 1, prev_len)
        } else {
            (0, 0)
        }
    }

    /// Absolute offset of `(line, col)`, clamped to the document
    fn offset_of(&self, line: usize, col: usize) -> usize {
        let line = line.min(self.line_count() - 1);
        self.line_starts[line] + col.min(self.line_len(line))
    }

    /// Byte range of line `index`, excluding the newline
    fn line_bounds(&self, index: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(index)?;
        let end = match self.line_starts.get(index + 1) {
            Some(next) => next - 1,
            // Last line may still end with the final newline
            None if self.content.last() == Some(&b'\n') => self.content.len() - 1,
            None => self.content.len(),
        };
        Some((start, end))
    }

    fn reset(&mut self) {
        self.content.clear();
        self.line_starts.clear();
        self.line_starts.push(0);
    }
}

impl Default for TextStore {
    fn default() -> Self {
        Self::new()
    }
}
