use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::editor_view::EditorViewParams;

/// One-line message shown in place of the file information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Status bar at the bottom of screen
pub struct StatusBar;

impl StatusBar {
    /// Render status bar
    pub fn render(buf: &mut Buffer, area: Rect, params: &EditorViewParams<'_>) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let base_style = Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD);

        // Fill entire line first
        for x in area.left()..area.right() {
            buf[(x, area.top())].set_char(' ').set_style(base_style);
        }

        let (left, left_style) = match params.status_message {
            Some(message) if message.is_error => (
                format!(" {} ", message.text),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(message) => (format!(" {} ", message.text), base_style),
            None => (Self::status_text(params), base_style),
        };
        let (end_x, _) = buf.set_stringn(
            area.left(),
            area.top(),
            &left,
            area.width as usize,
            left_style,
        );

        // Right-aligned version, only when it does not overlap the left part
        let version = format!("VAR {}", params.version);
        let version_width = version.chars().count() as u16 + 1;
        if area.width >= version_width && area.right() - version_width > end_x {
            buf.set_string(area.right() - version_width, area.top(), &version, base_style);
        }
    }

    /// ` name | current/total | line:col [+]`, positions 1-based
    pub fn status_text(params: &EditorViewParams<'_>) -> String {
        let (line, col) = params.cursor.position();
        let name = params.file_name.unwrap_or("[No Name]");
        let mut text = format!(
            " {} | {}/{} | {}:{}",
            name,
            line + 1,
            params.store.line_count(),
            line + 1,
            col + 1
        );
        if params.modified {
            text.push_str(" [+]");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use var_buffer::{Cursor, TextStore, Viewport};

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(params: &EditorViewParams<'_>, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::render(&mut buf, area, params);
        buf
    }

    #[test]
    fn test_status_text() {
        let store = TextStore::from_bytes("ab\ncd\nef");
        let cursor = Cursor::at(1, 2);
        let viewport = Viewport::default();
        let mut params = EditorViewParams {
            store: &store,
            cursor: &cursor,
            viewport: &viewport,
            file_name: None,
            modified: false,
            show_line_numbers: true,
            show_status_bar: true,
            status_message: None,
            version: "1.1",
        };
        assert_eq!(StatusBar::status_text(&params), " [No Name] | 2/3 | 2:3");

        params.file_name = Some("a.txt");
        params.modified = true;
        assert_eq!(StatusBar::status_text(&params), " a.txt | 2/3 | 2:3 [+]");

        let buf = render(&params, 40);
        assert_eq!(row(&buf, 0), " a.txt | 2/3 | 2:3 [+]          VAR 1.1 ");
        assert!(buf[(0, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_message_replaces_file_info() {
        let store = TextStore::new();
        let cursor = Cursor::new();
        let viewport = Viewport::default();
        let message = StatusMessage::error("Failed to save");
        let params = EditorViewParams {
            store: &store,
            cursor: &cursor,
            viewport: &viewport,
            file_name: Some("a.txt"),
            modified: true,
            show_line_numbers: true,
            show_status_bar: true,
            status_message: Some(&message),
            version: "1.1",
        };

        let buf = render(&params, 30);
        assert!(row(&buf, 0).starts_with(" Failed to save "));
        assert_eq!(buf[(1, 0)].bg, Color::Red);
    }

    #[test]
    fn test_narrow_bar_drops_version() {
        let store = TextStore::new();
        let cursor = Cursor::new();
        let viewport = Viewport::default();
        let params = EditorViewParams {
            store: &store,
            cursor: &cursor,
            viewport: &viewport,
            file_name: Some("long-file-name.txt"),
            modified: false,
            show_line_numbers: true,
            show_status_bar: true,
            status_message: None,
            version: "1.1",
        };

        let buf = render(&params, 24);
        assert!(!row(&buf, 0).contains("VAR"));
    }
}
