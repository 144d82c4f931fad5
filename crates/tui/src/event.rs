//! Board events and terminal event polling.
//!
//! Terminal events are converted into [`Event`] values, the single input
//! type accepted by the board, its columns, and modal views.

use std::time::Duration;

use crossterm::event::{self as term, KeyEvent, KeyEventKind};
use kancli_protocol::{MoveMsg, Submission};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// An input to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The terminal was resized. The only event delivered to every column.
    Resize {
        /// New width in cells.
        width: u16,
        /// New height in cells.
        height: u16,
    },
    /// A key was pressed.
    Key(KeyEvent),
    /// A column asked for an item to be moved to another column.
    Move(MoveMsg),
    /// The item form produced a new or edited item for the focused column.
    Submit(Submission),
}

impl Event {
    /// Converts a terminal event into a board event.
    ///
    /// Only key presses and resizes are relevant; key releases and repeats
    /// reported by some terminals are dropped.
    #[must_use]
    pub fn from_terminal(event: &term::Event) -> Option<Self> {
        match event {
            term::Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(*key)),
            term::Event::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<term::Event>> {
    if term::poll(POLL_TIMEOUT)? {
        Ok(Some(term::read()?))
    } else {
        Ok(None)
    }
}
