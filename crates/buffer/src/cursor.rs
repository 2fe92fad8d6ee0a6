use crate::store::TextStore;

/// Cursor position in document
///
/// Holds only coordinates. Line lengths are read from the store on every
/// move, so the cursor stays correct across edits as long as it is clamped
/// after each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Line number (0-based)
    line: usize,
    /// Byte column in line (0-based), may equal the line length
    column: usize,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Create cursor at specified position (not clamped)
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Current `(line, column)`
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Place the cursor without clamping; call [`Cursor::clamp`] afterwards
    pub fn set_position(&mut self, line: usize, column: usize) {
        self.line = line;
        self.column = column;
    }

    /// Move cursor left, wrapping to the end of the previous line
    pub fn move_left(&mut self, store: &TextStore) {
        if self.column > 0 {
            self.column -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.column = store.line_len(self.line);
        }
    }

    /// Move cursor right, wrapping to the start of the next line
    pub fn move_right(&mut self, store: &TextStore) {
        if self.column < store.line_len(self.line) {
            self.column += 1;
        } else if self.line + 1 < store.line_count() {
            self.line += 1;
            self.column = 0;
        }
    }

    /// Move cursor up.
    ///
    /// The column is cut to the new line's length and is not restored when a
    /// longer line is reached again.
    pub fn move_up(&mut self, store: &TextStore) {
        if self.line > 0 {
            self.line -= 1;
            self.column = self.column.min(store.line_len(self.line));
        }
    }

    /// Move cursor down, cutting the column like [`Cursor::move_up`]
    pub fn move_down(&mut self, store: &TextStore) {
        if self.line + 1 < store.line_count() {
            self.line += 1;
            self.column = self.column.min(store.line_len(self.line));
        }
    }

    /// Pull the cursor back inside the document
    pub fn clamp(&mut self, store: &TextStore) {
        self.line = self.line.min(store.line_count() - 1);
        self.column = self.column.min(store.line_len(self.line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TextStore {
        TextStore::from_bytes("hello\nhi\nworld!")
    }

    #[test]
    fn test_move_right_wraps_to_next_line() {
        let store = store();
        let mut cursor = Cursor::at(0, 5);
        cursor.move_right(&store);
        assert_eq!(cursor.position(), (1, 0));
    }

    #[test]
    fn test_move_right_stops_at_document_end() {
        let store = store();
        let mut cursor = Cursor::at(2, 6);
        cursor.move_right(&store);
        assert_eq!(cursor.position(), (2, 6));
    }

    #[test]
    fn test_move_left_wraps_to_previous_line_end() {
        let store = store();
        let mut cursor = Cursor::at(1, 0);
        cursor.move_left(&store);
        assert_eq!(cursor.position(), (0, 5));
    }

    #[test]
    fn test_move_left_stops_at_document_start() {
        let store = store();
        let mut cursor = Cursor::new();
        cursor.move_left(&store);
        assert_eq!(cursor.position(), (0, 0));
    }

    #[test]
    fn test_vertical_moves_truncate_column_without_memory() {
        let store = store();
        let mut cursor = Cursor::at(0, 4);
        cursor.move_down(&store);
        assert_eq!(cursor.position(), (1, 2));
        cursor.move_down(&store);
        assert_eq!(cursor.position(), (2, 2));
        cursor.move_down(&store);
        assert_eq!(cursor.position(), (2, 2));
        cursor.move_up(&store);
        cursor.move_up(&store);
        assert_eq!(cursor.position(), (0, 2));
        cursor.move_up(&store);
        assert_eq!(cursor.position(), (0, 2));
    }

    #[test]
    fn test_clamp() {
        let store = store();
        let mut cursor = Cursor::at(10, 10);
        cursor.clamp(&store);
        assert_eq!(cursor.position(), (2, 6));

        cursor.set_position(1, 10);
        cursor.clamp(&store);
        assert_eq!(cursor.position(), (1, 2));
    }

    #[test]
    fn test_clamp_on_empty_store() {
        let store = TextStore::new();
        let mut cursor = Cursor::at(3, 3);
        cursor.clamp(&store);
        assert_eq!(cursor.position(), (0, 0));
    }
}
