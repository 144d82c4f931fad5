//! The item form, a modal for adding and editing items.

use crossterm::event::{KeyCode, KeyEvent};
use kancli_config::KeyBindings;
use kancli_protocol::{Focus, Item, Submission};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::{
    command::Command,
    event::Event,
    keymap::{is_text_input, matches},
    modal::{Modal, ModalUpdate},
    widgets::render_form,
};

/// The text field receiving input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    /// The item title.
    #[default]
    Title,
    /// The item description.
    Description,
}

impl Field {
    /// Returns the other field.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }
}

/// A two-field form producing an [`Event::Submit`] for the column that
/// opened it.
///
/// # Examples
///
/// ```
/// use kancli_config::KeyBindings;
/// use kancli_protocol::Focus;
/// use kancli_tui::{Field, ItemForm};
///
/// let form = ItemForm::create(Focus::ToDo, KeyBindings::default());
/// assert_eq!(form.active_field(), Field::Title);
/// assert!(form.title().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ItemForm {
    target: Focus,
    editing: Option<(usize, Item)>,
    title: String,
    description: String,
    active: Field,
    error: Option<String>,
    keys: KeyBindings,
}

impl ItemForm {
    /// Creates an empty form for a new item in `target`.
    #[must_use]
    pub fn create(target: Focus, keys: KeyBindings) -> Self {
        Self {
            target,
            editing: None,
            title: String::new(),
            description: String::new(),
            active: Field::Title,
            error: None,
            keys,
        }
    }

    /// Creates a form pre-filled with `item`, stored at `index` in `target`.
    #[must_use]
    pub fn edit(target: Focus, index: usize, item: Item, keys: KeyBindings) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            editing: Some((index, item)),
            ..Self::create(target, keys)
        }
    }

    /// The column the form submits to.
    #[must_use]
    pub fn target(&self) -> Focus {
        self.target
    }

    /// Returns `true` when editing an existing item.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Current title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The field receiving typed text.
    #[must_use]
    pub fn active_field(&self) -> Field {
        self.active
    }

    /// The validation error from the last submit attempt, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The bindings shown in the form's hint line.
    #[must_use]
    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    fn active_text(&mut self) -> &mut String {
        match self.active {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ModalUpdate {
        if is_text_input(key) {
            if let KeyCode::Char(c) = key.code {
                self.active_text().push(c);
            }
            return ModalUpdate::Stay(Command::None);
        }

        if matches(&self.keys.back, key) {
            debug!(column = %self.target, "item form cancelled");
            return ModalUpdate::Close(Command::None);
        }
        if matches(&self.keys.next_field, key) {
            self.active = self.active.toggle();
            return ModalUpdate::Stay(Command::None);
        }
        if matches(&self.keys.submit, key) {
            return match self.active {
                Field::Title => {
                    self.active = Field::Description;
                    ModalUpdate::Stay(Command::None)
                }
                Field::Description => self.submit(),
            };
        }
        if matches(&self.keys.quit, key) {
            return ModalUpdate::Stay(Command::Quit);
        }
        if key.code == KeyCode::Backspace {
            self.active_text().pop();
        }
        ModalUpdate::Stay(Command::None)
    }

    fn submit(&mut self) -> ModalUpdate {
        let submission = match &self.editing {
            Some((index, item)) => item
                .with_text(&self.title, &self.description)
                .map(|edited| Submission::replace(*index, edited)),
            None => Item::try_new(&self.title, &self.description).map(Submission::create),
        };

        match submission {
            Ok(submission) => {
                debug!(column = %self.target, edit = submission.is_edit(), "item form submitted");
                ModalUpdate::Close(Command::Emit(Event::Submit(submission)))
            }
            Err(err) => {
                self.error = Some(err.to_string());
                ModalUpdate::Stay(Command::None)
            }
        }
    }
}

impl Modal for ItemForm {
    fn update(&mut self, event: &Event) -> ModalUpdate {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => ModalUpdate::Stay(Command::None),
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        render_form(self, area, buf);
    }
}
