//! The column capability set required by the board.

use kancli_protocol::Item;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::{command::Command, event::Event, modal::Modal};

/// Result of forwarding an event to a column.
#[derive(Debug)]
pub enum ColumnUpdate {
    /// The column handled the event and remains in control of its slot.
    Stay(Command),
    /// The column wants another view to take over the screen, e.g. a form
    /// for adding an item. The board hands control to the host, which keeps
    /// the board and returns to it once the modal closes.
    HandOff(Box<dyn Modal>, Command),
}

impl ColumnUpdate {
    /// Returns the command carried by either variant.
    #[must_use]
    pub fn command(&self) -> &Command {
        match self {
            Self::Stay(command) | Self::HandOff(_, command) => command,
        }
    }
}

impl From<Command> for ColumnUpdate {
    fn from(command: Command) -> Self {
        Self::Stay(command)
    }
}

/// A list-like widget occupying one of the three board slots.
///
/// The board keeps the focus flags of its columns in sync with its own
/// focus index through [`Column::focus`] and [`Column::blur`]; a column
/// never changes its own flag.
pub trait Column {
    /// Handles an event.
    ///
    /// Resize events reach every column; all other events reach only the
    /// focused one.
    fn update(&mut self, event: &Event) -> ColumnUpdate;

    /// Inserts an item at the end of the column.
    fn append(&mut self, item: Item) -> Command;

    /// Returns `true` if this column holds keyboard focus.
    fn is_focused(&self) -> bool;

    /// Gives this column keyboard focus.
    fn focus(&mut self);

    /// Removes keyboard focus from this column.
    fn blur(&mut self);

    /// Draws the column into `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);
}
