use std::path::{Path, PathBuf};

use ratatui::Frame;

use var_buffer::{Cursor, SaveError, TextStore, Viewport};
use var_config::EditorSettings;
use var_logger as logger;
use var_ui_render::{render_editor, EditorView, EditorViewParams, StatusMessage};

use crate::command::EditorCommand;

/// Editing session: the one document being edited plus its view state.
///
/// Created by the entry point and handed to the input loop by reference.
/// The text store is only mutated through [`Session::apply`] and
/// [`Session::open`], and the cursor and scroll position are brought back
/// in range after each of them.
#[derive(Debug)]
pub struct Session {
    store: TextStore,
    cursor: Cursor,
    viewport: Viewport,
    /// File the document is saved to
    filename: Option<PathBuf>,
    modified: bool,
    running: bool,
    show_line_numbers: bool,
    show_status_bar: bool,
    status: Option<StatusMessage>,
    /// Terminal size (width, height)
    screen: (u16, u16),
}

impl Session {
    /// Create a session holding an empty, unnamed document
    pub fn new(settings: &EditorSettings) -> Self {
        let mut session = Self {
            store: TextStore::new(),
            cursor: Cursor::new(),
            viewport: Viewport::default(),
            filename: None,
            modified: false,
            running: true,
            show_line_numbers: settings.show_line_numbers,
            show_status_bar: settings.status_bar,
            status: None,
            screen: (80, 24),
        };
        session.update_viewport_size();
        session
    }

    /// Open `path` as the session's document.
    ///
    /// A file that is missing or cannot be read leaves an empty unnamed
    /// document and an error message.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();

        match self.store.load(path) {
            Ok(()) => {
                self.filename = Some(path.to_path_buf());
                self.status = Some(StatusMessage::info(format!(
                    "{} lines, {} bytes",
                    self.store.line_count(),
                    self.store.len()
                )));
                logger::info(format!(
                    "Loaded {} ({} bytes)",
                    path.display(),
                    self.store.len()
                ));
            }
            Err(e) => {
                self.filename = None;
                self.status = Some(StatusMessage::error(e.to_string()));
                logger::error(e.to_string());
            }
        }

        self.modified = false;
        self.cursor = Cursor::new();
        self.viewport.reset();
        self.sync_cursor();
    }

    /// Write the document to its file.
    ///
    /// On failure the document and the modified flag are left untouched.
    pub fn save(&mut self) -> Result<(), SaveError> {
        let path = self.filename.as_deref().unwrap_or(Path::new(""));
        match self.store.save(path) {
            Ok(()) => {
                self.modified = false;
                self.status = Some(StatusMessage::info(format!(
                    "Saved {} bytes to {}",
                    self.store.len(),
                    path.display()
                )));
                logger::info(format!("Saved {}", path.display()));
                Ok(())
            }
            Err(e) => {
                self.status = Some(StatusMessage::error(e.to_string()));
                logger::error(format!("Save failed: {}", e));
                Err(e)
            }
        }
    }

    /// Execute one decoded command
    pub fn apply(&mut self, command: EditorCommand) {
        if command != EditorCommand::None {
            self.status = None;
        }
        let len_before = self.store.len();

        match command {
            EditorCommand::MoveCursorUp => self.cursor.move_up(&self.store),
            EditorCommand::MoveCursorDown => self.cursor.move_down(&self.store),
            EditorCommand::MoveCursorLeft => self.cursor.move_left(&self.store),
            EditorCommand::MoveCursorRight => self.cursor.move_right(&self.store),
            EditorCommand::InsertByte(byte) => self.insert(byte),
            EditorCommand::InsertNewline => self.insert(b'\n'),
            EditorCommand::Backspace => {
                let (line, col) = self.cursor.position();
                let (line, col) = self.store.delete_byte_before(line, col);
                self.cursor.set_position(line, col);
            }
            EditorCommand::Save => {
                // Failure is already reported through the status bar
                let _ = self.save();
            }
            EditorCommand::Quit => {
                logger::info("Quit requested");
                self.running = false;
            }
            EditorCommand::ToggleLineNumbers => {
                self.show_line_numbers = !self.show_line_numbers;
                self.update_viewport_size();
            }
            EditorCommand::None => {}
        }

        // Backspace at the document start edits nothing
        if command.is_edit() && self.store.len() != len_before {
            self.modified = true;
        }
        self.sync_cursor();
    }

    /// Track a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        logger::debug(format!("Resize to {}x{}", width, height));
        self.screen = (width, height);
        self.update_viewport_size();
        self.sync_cursor();
    }

    /// Draw the document and status bar into `frame`
    pub fn render(&self, frame: &mut Frame<'_>) {
        let file_name = self
            .filename
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned());
        let params = EditorViewParams {
            store: &self.store,
            cursor: &self.cursor,
            viewport: &self.viewport,
            file_name: file_name.as_deref(),
            modified: self.modified,
            show_line_numbers: self.show_line_numbers,
            show_status_bar: self.show_status_bar,
            status_message: self.status.as_ref(),
            version: env!("CARGO_PKG_VERSION"),
        };

        let area = frame.area();
        if let Some(position) = render_editor(frame.buffer_mut(), area, &params) {
            frame.set_cursor_position(position);
        }
    }

    pub fn store(&self) -> &TextStore {
        &self.store
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    fn insert(&mut self, byte: u8) {
        let (line, col) = self.cursor.position();
        self.store.insert_byte(line, col, byte);

        if byte == b'\n' {
            if line + 1 < self.store.line_count() {
                self.cursor.set_position(line + 1, 0);
            } else {
                // A final newline opens no new line
                self.cursor.set_position(line, self.store.line_len(line));
            }
        } else {
            self.cursor.set_position(line, col + 1);
        }
    }

    /// Clamp the cursor against the current document, then scroll to it
    fn sync_cursor(&mut self) {
        self.cursor.clamp(&self.store);
        self.viewport.ensure_cursor_visible(&self.cursor);
    }

    fn update_viewport_size(&mut self) {
        let (width, height) = self.screen;
        let (columns, rows) = EditorView::text_area_size(
            width,
            height,
            self.show_line_numbers,
            self.show_status_bar,
        );
        self.viewport.resize(columns, rows);
    }
}
