//! UI rendering components for var.
//!
//! Draws the document window (line number gutter and text) and the status
//! bar into a ratatui [`Buffer`](ratatui::buffer::Buffer). Rendering only
//! reads the text store, cursor and viewport.

pub mod editor_view;
pub mod status_bar;

pub use editor_view::{render_editor, EditorView, EditorViewParams, LINE_NUMBERS_WIDTH};
pub use status_bar::{StatusBar, StatusMessage};
