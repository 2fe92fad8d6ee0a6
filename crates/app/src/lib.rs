//! Application layer for var.
//!
//! Ties the text buffer engine to the terminal: a [`Session`] owns the
//! document state, [`EditorCommand`] decodes key events, and [`run`] drives
//! the blocking read-apply-draw loop.
//!
//! ```text
//! KeyEvent → EditorCommand → Session::apply → TextStore / Cursor → draw
//! ```

mod command;
mod event;
mod session;

pub use command::EditorCommand;
pub use event::{next_event, Event};
pub use session::Session;

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

/// Run the editor until the session stops.
///
/// Each cycle draws the current state, then blocks for exactly one input
/// event and applies it completely before drawing again.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, session: &mut Session) -> Result<()> {
    let size = terminal.size()?;
    session.resize(size.width, size.height);

    while session.is_running() {
        terminal.draw(|frame| session.render(frame))?;

        match next_event()? {
            Event::Key(key) => session.apply(EditorCommand::from_key_event(key)),
            Event::Resize(width, height) => session.resize(width, height),
            Event::Other => {}
        }
    }

    Ok(())
}
