//! Deferred follow-up work.
//!
//! Handlers never perform follow-up work themselves. They return a
//! [`Command`] describing it, and the host executes it after the current
//! event has been fully processed.

use crate::event::Event;

/// Follow-up work produced while handling an event.
///
/// # Examples
///
/// ```
/// use kancli_tui::Command;
///
/// let cmd = Command::batch([Command::None, Command::Quit, Command::None]);
/// assert_eq!(cmd, Command::Quit);
/// assert!(Command::batch([]).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do.
    #[default]
    None,
    /// Terminate the application.
    Quit,
    /// Dispatch another event after the current one.
    Emit(Event),
    /// Several commands, executed in order.
    Batch(Vec<Command>),
}

impl Command {
    /// Combines commands, dropping the empty ones.
    ///
    /// Nested batches are flattened. A batch of one command is that command,
    /// and a batch of nothing is [`Command::None`].
    #[must_use]
    pub fn batch(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut flat: Vec<Command> = commands.into_iter().flat_map(Command::into_vec).collect();
        match flat.len() {
            0 => Self::None,
            1 => flat.remove(0),
            _ => Self::Batch(flat),
        }
    }

    /// Returns `true` if there is nothing to do.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if executing this command terminates the application.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        match self {
            Self::Quit => true,
            Self::Batch(commands) => commands.iter().any(Self::is_quit),
            Self::None | Self::Emit(_) => false,
        }
    }

    /// Returns the events this command emits, in execution order.
    #[must_use]
    pub fn emitted(&self) -> Vec<&Event> {
        match self {
            Self::Emit(event) => vec![event],
            Self::Batch(commands) => commands.iter().flat_map(Self::emitted).collect(),
            Self::None | Self::Quit => Vec::new(),
        }
    }

    /// Flattens this command into its non-empty leaves.
    fn into_vec(self) -> Vec<Command> {
        match self {
            Self::None => Vec::new(),
            Self::Batch(commands) => commands.into_iter().flat_map(Self::into_vec).collect(),
            other => vec![other],
        }
    }
}
