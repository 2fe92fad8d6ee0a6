//! Document window rendering.
//!
//! Lines are drawn one byte per column. Only lines inside the viewport are
//! requested from the store.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
};

use var_buffer::{Cursor, TextStore, Viewport};

use crate::status_bar::{StatusBar, StatusMessage};

/// Width of the line number gutter, separator included
pub const LINE_NUMBERS_WIDTH: u16 = 6;
const LINE_NUMBERS_SEPARATOR_COL: u16 = 5;

/// Everything needed to draw one frame of the editor
pub struct EditorViewParams<'a> {
    pub store: &'a TextStore,
    pub cursor: &'a Cursor,
    pub viewport: &'a Viewport,
    /// Display name of the associated file, if any
    pub file_name: Option<&'a str>,
    pub modified: bool,
    pub show_line_numbers: bool,
    pub show_status_bar: bool,
    pub status_message: Option<&'a StatusMessage>,
    /// Version string shown on the right of the status bar
    pub version: &'a str,
}

/// Render the text window and, if enabled, the status bar below it.
///
/// Returns the screen position of the cursor when it is inside the window.
pub fn render_editor(
    buf: &mut Buffer,
    area: Rect,
    params: &EditorViewParams<'_>,
) -> Option<Position> {
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let (text_area, status_area) = if params.show_status_bar && area.height > 1 {
        let text_area = Rect {
            height: area.height - 1,
            ..area
        };
        let status_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        (text_area, Some(status_area))
    } else {
        (area, None)
    };

    let cursor_position = EditorView::render(buf, text_area, params);
    if let Some(status_area) = status_area {
        StatusBar::render(buf, status_area, params);
    }
    cursor_position
}

/// Text window with optional line number gutter
pub struct EditorView;

impl EditorView {
    /// Size `(columns, rows)` left for document text inside a `width` x
    /// `height` screen.
    pub fn text_area_size(
        width: u16,
        height: u16,
        show_line_numbers: bool,
        show_status_bar: bool,
    ) -> (usize, usize) {
        let gutter = Self::gutter_width(width, show_line_numbers);
        let rows = if show_status_bar && height > 1 {
            height - 1
        } else {
            height
        };
        ((width - gutter) as usize, rows as usize)
    }

    /// Render visible lines into `area`
    pub fn render(buf: &mut Buffer, area: Rect, params: &EditorViewParams<'_>) -> Option<Position> {
        let gutter = Self::gutter_width(area.width, params.show_line_numbers);
        let text_x = area.x + gutter;
        let text_width = area.width - gutter;
        let cursor_line = params.cursor.line();

        let visible = params.viewport.visible_lines(params.store.line_count());
        for (row, line_idx) in visible.enumerate().take(area.height as usize) {
            let y = area.y + row as u16;
            if gutter > 0 {
                Self::render_line_number(buf, area.x, y, line_idx + 1, line_idx == cursor_line);
            }
            Self::render_line(
                buf,
                text_x,
                y,
                text_width,
                params.store.line(line_idx),
                params.viewport.left_column,
            );
        }

        let (row, col) = params.viewport.cursor_to_viewport_pos(params.cursor)?;
        if row < area.height as usize && col < text_width as usize {
            Some(Position::new(text_x + col as u16, area.y + row as u16))
        } else {
            None
        }
    }

    fn gutter_width(width: u16, show_line_numbers: bool) -> u16 {
        if show_line_numbers && width > LINE_NUMBERS_WIDTH {
            LINE_NUMBERS_WIDTH
        } else {
            0
        }
    }

    /// Right-aligned 1-based number followed by a vertical separator.
    /// The current line's number is bold.
    fn render_line_number(buf: &mut Buffer, x: u16, y: u16, number: usize, is_current: bool) {
        let style = if is_current {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        buf.set_stringn(
            x,
            y,
            format!("{:>4} ", number),
            LINE_NUMBERS_SEPARATOR_COL as usize,
            style,
        );
        buf[(x + LINE_NUMBERS_SEPARATOR_COL, y)].set_symbol("│");
    }

    fn render_line(buf: &mut Buffer, x: u16, y: u16, width: u16, line: &[u8], left_column: usize) {
        for (i, &byte) in line
            .iter()
            .skip(left_column)
            .take(width as usize)
            .enumerate()
        {
            buf[(x + i as u16, y)].set_char(display_char(byte));
        }
    }
}

/// Glyph drawn for a byte: printable ASCII as is, tab as a blank, anything
/// else as a dot so every byte keeps exactly one column.
fn display_char(byte: u8) -> char {
    match byte {
        b' '..=b'~' => byte as char,
        b'\t' => ' ',
        _ => '.',
    }
}
