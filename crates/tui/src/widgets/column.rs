//! Column rendering widget.
//!
//! This module renders a single board column: a bordered box with the
//! column title and item count, followed by a vertical list of items.

use kancli_protocol::Item;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::layout::{ITEM_HEIGHT, ITEM_SPACING};

/// Marker drawn in front of the selected item.
const SELECTED_MARKER: &str = "│ ";

/// Padding drawn in front of the other items.
const UNSELECTED_MARKER: &str = "  ";

/// Renders a column to the buffer.
///
/// # Arguments
///
/// * `title` - Column title, shown with the item count
/// * `items` - Items in display order
/// * `selected` - Index of the selected item, if any
/// * `focused` - Whether the column holds keyboard focus
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// ╭ To Do (2) ─────────╮
/// ││ Buy milk          │
/// ││ strawberry milk   │
/// │                    │
/// │  Eat sushi         │
/// │  negitoro roll     │
/// ╰────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use kancli_protocol::Item;
/// use kancli_tui::widgets::render_column;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let items = vec![Item::new("Buy milk", "strawberry")];
/// let area = Rect::new(0, 0, 24, 8);
/// let mut buf = Buffer::empty(area);
///
/// render_column("To Do", &items, Some(0), true, area, &mut buf);
/// ```
pub fn render_column(
    title: &str,
    items: &[Item],
    selected: Option<usize>,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let (border_style, title_style) = if focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {title} ({}) ", items.len()),
            title_style,
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    if items.is_empty() {
        render_empty_placeholder(inner, buf);
        return;
    }

    let entry_height = ITEM_HEIGHT + ITEM_SPACING;
    let visible = usize::from((inner.height + ITEM_SPACING) / entry_height).max(1);
    let offset = calculate_scroll_offset(selected, items.len(), visible);

    for (row, (idx, item)) in items.iter().enumerate().skip(offset).take(visible).enumerate() {
        // `row < visible`, and `visible` fits in a u16 because it was derived from one.
        let y = inner.y + row as u16 * entry_height;
        if y >= inner.bottom() {
            break;
        }
        let height = ITEM_HEIGHT.min(inner.bottom() - y);
        let item_area = Rect::new(inner.x, y, inner.width, height);
        render_item(item, selected == Some(idx), focused, item_area, buf);
    }
}

/// Renders one item as a title line and a dimmed description line.
fn render_item(item: &Item, is_selected: bool, focused: bool, area: Rect, buf: &mut Buffer) {
    let accent = if focused { Color::Cyan } else { Color::Gray };
    let (marker, title_style, desc_style) = if is_selected {
        (
            Span::styled(SELECTED_MARKER, Style::default().fg(accent)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
            Style::default().fg(accent),
        )
    } else {
        (
            Span::raw(UNSELECTED_MARKER),
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let lines = vec![
        Line::from(vec![marker.clone(), Span::styled(item.title.as_str(), title_style)]),
        Line::from(vec![marker, Span::styled(item.description.as_str(), desc_style)]),
    ];
    Paragraph::new(lines).render(area, buf);
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No items",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset that keeps the selected item visible.
fn calculate_scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total - visible;
    selected.saturating_sub(visible / 2).min(max_offset)
}
