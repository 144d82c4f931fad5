//! Configuration management for the kancli application.
//!
//! This crate handles loading, validating, and persisting the board
//! configuration, most importantly the key binding table.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`keys`]: Key patterns, bindings, and the binding table
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./kancli.json5` or `./kancli.json`)
//! 2. User config (`~/.config/kancli/config.json5` or `~/.config/kancli/config.json`)
//! 3. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   keys: {
//!     quit: { keys: ["ctrl+c", "q"], help: "quit" },
//!     left: { keys: ["left", "h"], help: "left" },
//!   },
//!   log_file: "/tmp/kancli.log",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use kancli_config::Config;
//!
//! # fn example() -> kancli_config::Result<()> {
//! let config = Config::load()?;
//! println!("quit with {}", config.keys.quit.help_keys());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use keys::{Binding, Key, KeyBindings, KeyPattern, Modifiers};
