//! Keyboard command decoding.
//!
//! Separates "what key was pressed" from "what the session does", so key
//! bindings can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editor command representing a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    // Navigation
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,

    // Text editing
    InsertByte(u8),
    InsertNewline,
    Backspace,

    // File and view
    Save,
    Quit,
    ToggleLineNumbers,

    // No operation (for unhandled keys)
    None,
}

impl EditorCommand {
    /// Parse a KeyEvent into an EditorCommand.
    ///
    /// Only single-byte printable ASCII is inserted; other characters are
    /// ignored since the buffer works one byte per column.
    pub fn from_key_event(key: KeyEvent) -> Self {
        match (key.code, key.modifiers) {
            (KeyCode::Up, KeyModifiers::NONE) => Self::MoveCursorUp,
            (KeyCode::Down, KeyModifiers::NONE) => Self::MoveCursorDown,
            (KeyCode::Left, KeyModifiers::NONE) => Self::MoveCursorLeft,
            (KeyCode::Right, KeyModifiers::NONE) => Self::MoveCursorRight,

            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT)
                if ch.is_ascii() && !ch.is_ascii_control() =>
            {
                Self::InsertByte(ch as u8)
            }
            (KeyCode::Tab, KeyModifiers::NONE) => Self::InsertByte(b'\t'),
            (KeyCode::Enter, KeyModifiers::NONE) => Self::InsertNewline,
            (KeyCode::Backspace, KeyModifiers::NONE) => Self::Backspace,
            // Some terminals send Ctrl+H for backspace
            (KeyCode::Char('h'), KeyModifiers::CONTROL) => Self::Backspace,

            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Self::Save,
            (KeyCode::Char('x') | KeyCode::Char('q'), KeyModifiers::CONTROL) => Self::Quit,
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => Self::ToggleLineNumbers,

            _ => Self::None,
        }
    }

    /// Whether the command changes the document
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::InsertByte(_) | Self::InsertNewline | Self::Backspace
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_arrows() {
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Up, KeyModifiers::NONE)),
            EditorCommand::MoveCursorUp
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Right, KeyModifiers::NONE)),
            EditorCommand::MoveCursorRight
        );
    }

    #[test]
    fn test_printable_ascii_inserts() {
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            EditorCommand::InsertByte(b'a')
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            EditorCommand::InsertByte(b'A')
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Tab, KeyModifiers::NONE)),
            EditorCommand::InsertByte(b'\t')
        );
    }

    #[test]
    fn test_non_ascii_is_ignored() {
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('é'), KeyModifiers::NONE)),
            EditorCommand::None
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            EditorCommand::Save
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            EditorCommand::Quit
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            EditorCommand::Quit
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            EditorCommand::ToggleLineNumbers
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('h'), KeyModifiers::CONTROL)),
            EditorCommand::Backspace
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            EditorCommand::None
        );
    }

    #[test]
    fn test_is_edit() {
        assert!(EditorCommand::InsertNewline.is_edit());
        assert!(EditorCommand::Backspace.is_edit());
        assert!(!EditorCommand::Save.is_edit());
        assert!(!EditorCommand::MoveCursorLeft.is_edit());
    }
}
