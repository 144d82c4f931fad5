//! The default column: a selectable list of items.

use crossterm::event::KeyEvent;
use kancli_config::KeyBindings;
use kancli_protocol::{Focus, Item, MoveMsg, Submission};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::{
    column::{Column, ColumnUpdate},
    command::Command,
    event::Event,
    form::ItemForm,
    keymap::matches,
    widgets::render_column,
};

/// A bordered list of items occupying one board slot.
///
/// Items advanced out of a column move to the next one, and items leaving
/// `Done` wrap around to `To Do`.
///
/// # Examples
///
/// ```
/// use kancli_config::KeyBindings;
/// use kancli_protocol::{Focus, Item};
/// use kancli_tui::{Column, ListColumn};
///
/// let mut column = ListColumn::new(Focus::ToDo, KeyBindings::default());
/// column.append(Item::new("Buy milk", "strawberry"));
///
/// assert_eq!(column.title(), "To Do");
/// assert_eq!(column.items().len(), 1);
/// assert!(!column.is_focused());
/// ```
#[derive(Debug, Clone)]
pub struct ListColumn {
    kind: Focus,
    items: Vec<Item>,
    selected: usize,
    focused: bool,
    keys: KeyBindings,
    height: u16,
}

impl ListColumn {
    /// Creates an empty, unfocused column for the `kind` slot.
    #[must_use]
    pub fn new(kind: Focus, keys: KeyBindings) -> Self {
        Self::with_items(kind, Vec::new(), keys)
    }

    /// Creates an unfocused column holding `items`.
    #[must_use]
    pub fn with_items(kind: Focus, items: Vec<Item>, keys: KeyBindings) -> Self {
        Self {
            kind,
            items,
            selected: 0,
            focused: false,
            keys,
            height: 0,
        }
    }

    /// Marks the column as focused before it is handed to a board.
    #[must_use]
    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    /// The board slot this column occupies.
    #[must_use]
    pub fn kind(&self) -> Focus {
        self.kind
    }

    /// Title shown in the column border.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Index of the selected item, or `None` when the column is empty.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.selected)
    }

    /// The selected item, or `None` when the column is empty.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    /// Height of the terminal at the last resize.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    fn remove_selected(&mut self) -> Option<Item> {
        if self.selected >= self.items.len() {
            return None;
        }
        let item = self.items.remove(self.selected);
        self.clamp_selection();
        Some(item)
    }

    fn apply_submission(&mut self, submission: &Submission) {
        match submission.index {
            Some(index) if index < self.items.len() => {
                self.items[index] = submission.item.clone();
                self.selected = index;
            }
            _ => {
                self.items.push(submission.item.clone());
                self.selected = self.items.len() - 1;
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ColumnUpdate {
        if matches(&self.keys.up, key) {
            self.selected = self.selected.saturating_sub(1);
        } else if matches(&self.keys.down, key) {
            self.selected += 1;
            self.clamp_selection();
        } else if matches(&self.keys.new, key) {
            debug!(column = %self.kind, "opening form for new item");
            let form = ItemForm::create(self.kind, self.keys.clone());
            return ColumnUpdate::HandOff(Box::new(form), Command::None);
        } else if matches(&self.keys.edit, key) {
            if let Some(item) = self.selected_item() {
                debug!(column = %self.kind, id = %item.id, "opening form to edit item");
                let form = ItemForm::edit(self.kind, self.selected, item.clone(), self.keys.clone());
                return ColumnUpdate::HandOff(Box::new(form), Command::None);
            }
        } else if matches(&self.keys.delete, key) {
            if let Some(item) = self.remove_selected() {
                debug!(column = %self.kind, id = %item.id, "deleted item");
            }
        } else if matches(&self.keys.advance, key)
            && let Some(item) = self.remove_selected()
        {
            let msg = MoveMsg::new(self.kind.next(), item);
            return ColumnUpdate::Stay(Command::Emit(Event::Move(msg)));
        }
        ColumnUpdate::Stay(Command::None)
    }
}

impl Column for ListColumn {
    fn update(&mut self, event: &Event) -> ColumnUpdate {
        match event {
            Event::Resize { height, .. } => {
                self.height = *height;
                ColumnUpdate::Stay(Command::None)
            }
            Event::Submit(submission) => {
                self.apply_submission(submission);
                ColumnUpdate::Stay(Command::None)
            }
            Event::Key(key) if self.focused => self.handle_key(key),
            Event::Key(_) | Event::Move(_) => ColumnUpdate::Stay(Command::None),
        }
    }

    fn append(&mut self, item: Item) -> Command {
        self.items.push(item);
        Command::None
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        render_column(
            self.title(),
            &self.items,
            self.selected_index(),
            self.focused,
            area,
            buf,
        );
    }
}
