//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components.

/// Columns subtracted from the frame width to get the help line width.
pub const HELP_MARGIN: u16 = 4;

/// Height of the help line under the board, in rows.
pub const HELP_HEIGHT: u16 = 1;

/// Height of each item entry in a column: title row and description row.
pub const ITEM_HEIGHT: u16 = 2;

/// Rows between two item entries.
pub const ITEM_SPACING: u16 = 1;

/// Placeholder shown until the first resize event arrives.
pub const LOADING_TEXT: &str = "loading...";

/// Width of the item form popup.
pub const FORM_WIDTH: u16 = 50;

/// Height of the item form popup.
///
/// Borders (2), top padding (1), title label and input (2), spacer (1),
/// description label and input (2), spacer (1), error (1), hint (1).
pub const FORM_HEIGHT: u16 = 11;
