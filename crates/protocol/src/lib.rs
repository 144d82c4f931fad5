//! Shared protocol types for the kancli application.
//!
//! This crate defines the values that flow between the board, its columns,
//! and the embedding application.
//!
//! # Overview
//!
//! - [`focus`]: The three-state column focus machine
//! - [`item`]: Items displayed in columns
//! - [`message`]: Move requests and form submissions
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use kancli_protocol::{Focus, Item, MoveMsg};
//!
//! let item = Item::new("Implement feature", "Add user authentication");
//! let msg = MoveMsg::new(Focus::ToDo.next(), item);
//! assert_eq!(msg.target, Focus::InProgress);
//! ```

pub mod dummy;
pub mod error;
pub mod focus;
pub mod item;
pub mod message;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use focus::Focus;
pub use item::{Item, ItemId};
pub use message::{MoveMsg, Submission};
