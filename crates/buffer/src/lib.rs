//! Text buffer engine for var.
//!
//! Provides a flat byte store with an incrementally maintained line-start
//! index, the cursor coordinate model built on top of it, and the vertical
//! scroll window that follows the cursor.

mod cursor;
mod error;
mod line_index;
mod store;
mod viewport;

pub use cursor::Cursor;
pub use error::{LoadError, SaveError};
pub use line_index::build_line_starts;
pub use store::TextStore;
pub use viewport::Viewport;
