use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Input events the editor reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize (width, height)
    Resize(u16, u16),
    /// Anything else (mouse, focus, paste, key release)
    Other,
}

/// Block until the next terminal event arrives.
///
/// There is no tick: the editor only wakes up for input.
pub fn next_event() -> Result<Event> {
    Ok(classify(event::read()?))
}

fn classify(event: CrosstermEvent) -> Event {
    match event {
        // Terminals with the kitty protocol also report Release and Repeat
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        _ => Event::Other,
    }
}
