//! Widget components for the kancli TUI.
//!
//! Each widget is a plain function rendering borrowed state into a
//! [`Buffer`], which keeps them easy to test and to compose.
//!
//! # Modules
//!
//! - [`column`]: One board column with its item list
//! - [`help`]: The single-line key legend under the board
//! - [`form`]: The item form popup
//!
//! # Example
//!
//! ```
//! use kancli_protocol::Item;
//! use kancli_tui::widgets;
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! let items = vec![Item::new("Example", "A sample item")];
//! let area = Rect::new(0, 0, 30, 8);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_column("To Do", &items, Some(0), true, area, &mut buf);
//! assert!(widgets::buffer_to_string(&buf).contains("Example"));
//! ```

use ratatui::buffer::Buffer;

pub mod column;
pub mod form;
pub mod help;

pub use column::render_column;
pub use form::render_form;
pub use help::{help_text, render_help_line};

/// Converts a ratatui [`Buffer`] to plain text.
///
/// Each row of the buffer becomes one line terminated by `\n`, with
/// trailing spaces removed.
#[must_use]
pub fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        let row_start = result.len();
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result[row_start..].trim_end_matches(' ').len();
        result.truncate(row_start + trimmed);
        result.push('\n');
    }
    result
}
