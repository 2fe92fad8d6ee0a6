use std::ops::Range;

use super::Cursor;

/// Visible window over the document
/// Tracks which part of document is visible on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-based)
    pub top_line: usize,
    /// Number of visible text rows
    pub height: usize,
    /// Horizontal scroll (left column)
    pub left_column: usize,
    /// Number of visible text columns
    pub width: usize,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            top_line: 0,
            height,
            left_column: 0,
            width,
        }
    }

    /// Update viewport dimensions
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Scroll back to the document start
    pub fn reset(&mut self) {
        self.top_line = 0;
        self.left_column = 0;
    }

    /// Get index of last visible line (exclusive)
    pub fn bottom_line(&self) -> usize {
        self.top_line + self.height
    }

    /// Check if line is visible
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line < self.bottom_line()
    }

    /// Check if column is visible
    pub fn is_column_visible(&self, column: usize) -> bool {
        column >= self.left_column && column < self.left_column + self.width
    }

    /// Document lines that fall inside the window
    pub fn visible_lines(&self, line_count: usize) -> Range<usize> {
        self.top_line.min(line_count)..self.bottom_line().min(line_count)
    }

    /// Scroll by the minimal amount that brings the cursor into view.
    /// Returns true if viewport was changed
    pub fn ensure_cursor_visible(&mut self, cursor: &Cursor) -> bool {
        let before = (self.top_line, self.left_column);
        let (line, column) = cursor.position();

        if line < self.top_line {
            self.top_line = line;
        } else if line >= self.bottom_line() {
            self.top_line = (line + 1).saturating_sub(self.height.max(1));
        }

        if column < self.left_column {
            self.left_column = column;
        } else if column >= self.left_column + self.width {
            self.left_column = (column + 1).saturating_sub(self.width.max(1));
        }

        before != (self.top_line, self.left_column)
    }

    /// Get relative cursor position in viewport
    /// Returns (row, col) relative to viewport start
    pub fn cursor_to_viewport_pos(&self, cursor: &Cursor) -> Option<(usize, usize)> {
        let (line, column) = cursor.position();
        if !self.is_line_visible(line) || !self.is_column_visible(column) {
            return None;
        }
        Some((line - self.top_line, column - self.left_column))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_visibility() {
        let vp = Viewport::new(80, 24);
        assert!(vp.is_line_visible(0));
        assert!(vp.is_line_visible(23));
        assert!(!vp.is_line_visible(24));
    }

    #[test]
    fn test_ensure_cursor_visible_below() {
        let mut vp = Viewport::new(80, 24);
        let cursor = Cursor::at(30, 0);

        assert!(vp.ensure_cursor_visible(&cursor));
        assert_eq!(vp.top_line, 7); // 30 - 24 + 1
        assert!(vp.is_line_visible(30));
    }

    #[test]
    fn test_ensure_cursor_visible_above() {
        let mut vp = Viewport::new(80, 24);
        vp.top_line = 10;

        assert!(vp.ensure_cursor_visible(&Cursor::at(5, 0)));
        assert_eq!(vp.top_line, 5);
    }

    #[test]
    fn test_no_scroll_when_visible() {
        let mut vp = Viewport::new(80, 24);
        vp.top_line = 10;

        assert!(!vp.ensure_cursor_visible(&Cursor::at(33, 0)));
        assert_eq!(vp.top_line, 10);
    }

    #[test]
    fn test_scroll_is_not_limited_by_document_length() {
        let mut vp = Viewport::new(80, 10);
        vp.ensure_cursor_visible(&Cursor::at(12, 0));
        assert_eq!(vp.top_line, 3);
        assert_eq!(vp.visible_lines(13), 3..13);
    }

    #[test]
    fn test_horizontal_scroll() {
        let mut vp = Viewport::new(80, 24);

        assert!(vp.ensure_cursor_visible(&Cursor::at(0, 100)));
        assert_eq!(vp.left_column, 21); // 100 - 79
        assert!(vp.ensure_cursor_visible(&Cursor::at(0, 3)));
        assert_eq!(vp.left_column, 3);
    }

    #[test]
    fn test_zero_height_window() {
        let mut vp = Viewport::new(80, 0);
        vp.ensure_cursor_visible(&Cursor::at(4, 0));
        assert_eq!(vp.top_line, 4);
        assert_eq!(vp.visible_lines(10), 4..4);
    }

    #[test]
    fn test_cursor_to_viewport_pos() {
        let mut vp = Viewport::new(80, 24);
        vp.top_line = 10;
        vp.left_column = 5;

        assert_eq!(vp.cursor_to_viewport_pos(&Cursor::at(15, 10)), Some((5, 5)));
        assert_eq!(vp.cursor_to_viewport_pos(&Cursor::at(2, 10)), None);
    }
}
