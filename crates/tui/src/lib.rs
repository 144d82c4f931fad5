//! Terminal UI for the kancli kanban board.
//!
//! This crate provides a three-column board built on Ratatui, the column
//! and modal abstractions it composes, and the application host driving
//! it from a terminal.
//!
//! # Overview
//!
//! - [`board`]: The [`Board`] and its event routing
//! - [`column`]: The [`Column`] trait and [`ListColumn`], its default implementation
//! - [`form`]: The [`ItemForm`] modal for adding and editing items
//! - [`app`]: The [`App`] host and its run loop
//! - [`command`] and [`event`]: What flows in and out of `update` calls
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use kancli_config::KeyBindings;
//! use kancli_protocol::{Focus, MoveMsg};
//! use kancli_tui::{App, Board, ListColumn, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let keys = KeyBindings::default();
//!     let columns = Focus::all().map(|kind| ListColumn::new(kind, keys.clone()));
//!     let board = Board::new(columns, keys, Arc::new(|msg: &MoveMsg| {
//!         eprintln!("moved {} to {}", msg.item.title, msg.target);
//!     }));
//!     let result = App::new(board).run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod board;
pub mod column;
pub mod command;
pub mod event;
pub mod form;
pub mod keymap;
pub mod layout;
pub mod list_column;
pub mod modal;
pub mod terminal;
pub mod widgets;

pub use app::App;
pub use board::{Board, BoardUpdate, MoveHandler};
pub use column::{Column, ColumnUpdate};
pub use command::Command;
pub use event::Event;
pub use form::{Field, ItemForm};
pub use list_column::ListColumn;
pub use modal::{Modal, ModalUpdate};
