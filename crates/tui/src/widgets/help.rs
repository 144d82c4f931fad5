//! Single-line key legend shown under the board.

use kancli_config::Binding;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Separator placed between two legend entries.
const SEPARATOR: &str = " • ";

/// Marker appended when entries were left out for lack of space.
const ELLIPSIS: &str = " …";

/// Builds the legend text for `bindings`, at most `max_width` cells wide.
///
/// Entries are laid out as `keys help`, joined by a bullet. An entry that
/// does not fit is dropped together with everything after it, and an
/// ellipsis is appended if there is room for one.
///
/// # Examples
///
/// ```
/// use kancli_config::KeyBindings;
/// use kancli_tui::widgets::help_text;
///
/// let keys = KeyBindings::default();
/// let text = help_text(&[&keys.left, &keys.quit], 80);
/// assert_eq!(text, "←/h left • ctrl+c/q quit");
/// ```
#[must_use]
pub fn help_text(bindings: &[&Binding], max_width: u16) -> String {
    let max_width = usize::from(max_width);
    let mut text = String::new();
    let mut width = 0;

    for binding in bindings {
        let entry = format!("{} {}", binding.help_keys(), binding.help);
        let sep = if text.is_empty() { "" } else { SEPARATOR };
        let entry_width = sep.chars().count() + entry.chars().count();

        if width + entry_width > max_width {
            if !text.is_empty() && width + ELLIPSIS.chars().count() <= max_width {
                text.push_str(ELLIPSIS);
            }
            break;
        }

        text.push_str(sep);
        text.push_str(&entry);
        width += entry_width;
    }

    text
}

/// Renders the key legend for `bindings` into `area`.
///
/// The legend is truncated to `max_width` cells even when `area` is wider.
pub fn render_help_line(bindings: &[&Binding], max_width: u16, area: Rect, buf: &mut Buffer) {
    let text = help_text(bindings, max_width.min(area.width));
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_to_string;
    use kancli_config::KeyBindings;

    fn board_legend(keys: &KeyBindings) -> Vec<&Binding> {
        keys.board_bindings().into_iter().map(|(_, b)| b).collect()
    }

    #[test]
    fn full_legend_when_wide_enough() {
        let keys = KeyBindings::default();
        insta::assert_snapshot!(
            help_text(&board_legend(&keys), 200),
            @"↑/k up • ↓/j down • ←/h left • →/l right • n new • e edit • d delete • enter move • ctrl+c/q quit"
        );
    }

    #[test]
    fn truncates_whole_entries() {
        let keys = KeyBindings::default();
        let text = help_text(&board_legend(&keys), 20);
        assert_eq!(text, "↑/k up • ↓/j down …");
        assert!(text.chars().count() <= 20);
    }

    #[test]
    fn zero_width_is_empty() {
        let keys = KeyBindings::default();
        assert_eq!(help_text(&board_legend(&keys), 0), "");
    }

    #[test]
    fn first_entry_too_wide_gives_empty_text() {
        let keys = KeyBindings::default();
        assert_eq!(help_text(&[&keys.quit], 5), "");
    }

    #[test]
    fn render_respects_area_width() {
        let keys = KeyBindings::default();
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        render_help_line(&board_legend(&keys), 100, area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "↑/k up …\n");
    }
}
