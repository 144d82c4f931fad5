//! Item form popup widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::{
    form::{Field, ItemForm},
    layout::{FORM_HEIGHT, FORM_WIDTH},
    widgets::help_text,
};

/// Cursor drawn at the end of the active field.
const CURSOR: &str = "_";

/// Renders the item form as a centered popup.
///
/// # Layout
///
/// ```text
/// ╭ New item (To Do) ──────────────────────╮
/// │                                        │
/// │ Title                                  │
/// │ > Buy milk_                            │
/// │                                        │
/// │ Description                            │
/// │ >                                      │
/// │                                        │
/// │                                        │
/// │ enter submit • tab next field • esc back│
/// ╰────────────────────────────────────────╯
/// ```
pub fn render_form(form: &ItemForm, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    Clear.render(popup_area, buf);

    let verb = if form.is_edit() { "Edit" } else { "New" };
    let block = Block::default()
        .title(Span::styled(
            format!(" {verb} item ({}) ", form.target()),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    let keys = form.keys();
    let hint = help_text(&[&keys.submit, &keys.next_field, &keys.back], inner.width);
    let error = form.error().unwrap_or_default();

    let mut lines = vec![Line::from("")];
    lines.extend(field_lines(
        "Title",
        form.title(),
        form.active_field() == Field::Title,
    ));
    lines.push(Line::from(""));
    lines.extend(field_lines(
        "Description",
        form.description(),
        form.active_field() == Field::Description,
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red),
    )));
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    Paragraph::new(lines).render(inner, buf);
}

/// Builds the label and input lines of one field.
fn field_lines<'a>(label: &'a str, value: &'a str, active: bool) -> [Line<'a>; 2] {
    let (label_style, value_style) = if active {
        (
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let mut input = vec![
        Span::styled("> ", label_style),
        Span::styled(value, value_style),
    ];
    if active {
        input.push(Span::styled(CURSOR, label_style));
    }

    [
        Line::from(Span::styled(label, label_style)),
        Line::from(input),
    ]
}

/// Creates a centered rectangle within a given area, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
