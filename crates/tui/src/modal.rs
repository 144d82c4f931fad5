//! Views that temporarily take over the screen from the board.

use std::fmt;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::{command::Command, event::Event};

/// Result of forwarding an event to a modal view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalUpdate {
    /// The modal keeps control.
    Stay(Command),
    /// The modal is finished; control returns to the board, then the
    /// command runs.
    Close(Command),
}

/// A top-level view shown instead of the board until it closes.
pub trait Modal: fmt::Debug {
    /// Handles an event.
    fn update(&mut self, event: &Event) -> ModalUpdate;

    /// Draws the modal over the full frame.
    fn render(&self, area: Rect, buf: &mut Buffer);
}
