//! Key binding configuration.
//!
//! Key bindings are plain data: a [`KeyPattern`] names a key and its
//! modifiers, a [`Binding`] groups the patterns that trigger one action along
//! with its help text, and [`KeyBindings`] is the immutable table handed to
//! the board at construction time.
//!
//! # Pattern Syntax
//!
//! Patterns are written as an optional list of modifiers followed by a key,
//! separated by `+`:
//!
//! ```text
//! q          plain character
//! ctrl+c     character with a modifier
//! shift+tab  named key with a modifier
//! left       named key
//! ```
//!
//! Recognized names are `left`, `right`, `up`, `down`, `enter`, `esc`,
//! `tab`, `backspace`, `delete`, `home`, `end` and `space`. Recognized
//! modifiers are `ctrl`, `alt` and `shift`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A key, without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character. Space is `Char(' ')`.
    Char(char),
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Enter / Return.
    Enter,
    /// Escape.
    Esc,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Home.
    Home,
    /// End.
    End,
}

impl Key {
    const NAMED: [Key; 12] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Enter,
        Key::Esc,
        Key::Tab,
        Key::Backspace,
        Key::Delete,
        Key::Home,
        Key::End,
        Key::Char(' '),
    ];

    fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Self::Char(c));
        }
        let lower = s.to_ascii_lowercase();
        Self::NAMED.into_iter().find(|key| key.name() == lower)
    }

    fn name(self) -> String {
        match self {
            Self::Char(' ') => "space".to_string(),
            Self::Char(c) => c.to_string(),
            Self::Left => "left".to_string(),
            Self::Right => "right".to_string(),
            Self::Up => "up".to_string(),
            Self::Down => "down".to_string(),
            Self::Enter => "enter".to_string(),
            Self::Esc => "esc".to_string(),
            Self::Tab => "tab".to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::Delete => "delete".to_string(),
            Self::Home => "home".to_string(),
            Self::End => "end".to_string(),
        }
    }

    /// Returns the short label used in the help line.
    fn label(self) -> String {
        match self {
            Self::Left => "←".to_string(),
            Self::Right => "→".to_string(),
            Self::Up => "↑".to_string(),
            Self::Down => "↓".to_string(),
            other => other.name(),
        }
    }
}

/// Modifier keys held together with a [`Key`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control.
    pub ctrl: bool,
    /// Alt / Option.
    pub alt: bool,
    /// Shift.
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Control only.
    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
    };
}

/// A key together with the modifiers that must be held.
///
/// Serialized as its textual form, e.g. `"ctrl+c"`.
///
/// # Examples
///
/// ```
/// use kancli_config::keys::{Key, KeyPattern, Modifiers};
///
/// let pattern: KeyPattern = "ctrl+c".parse().unwrap();
/// assert_eq!(pattern, KeyPattern::new(Key::Char('c'), Modifiers::CTRL));
/// assert_eq!(pattern.to_string(), "ctrl+c");
///
/// assert!("hyper+x".parse::<KeyPattern>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyPattern {
    /// The key.
    pub key: Key,
    /// Modifiers that must be held.
    pub modifiers: Modifiers,
}

impl KeyPattern {
    /// Creates a pattern from a key and modifiers.
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a pattern for a key with no modifiers.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Creates a pattern for a character with no modifiers.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }

    /// Returns `true` if this pattern produces text when typed into a field.
    ///
    /// Text input fields give such keys to the field instead of treating
    /// them as commands.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.key, Key::Char(_)) && !self.modifiers.ctrl && !self.modifiers.alt
    }

    /// Returns the short label used in the help line, e.g. `"←"` or `"ctrl+c"`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut out = self.modifier_prefix();
        out.push_str(&self.key.label());
        out
    }

    fn modifier_prefix(&self) -> String {
        let mut out = String::new();
        if self.modifiers.ctrl {
            out.push_str("ctrl+");
        }
        if self.modifiers.alt {
            out.push_str("alt+");
        }
        if self.modifiers.shift {
            out.push_str("shift+");
        }
        out
    }
}

impl FromStr for KeyPattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| ConfigError::InvalidKey {
            pattern: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("key cannot be empty"));
        }

        // A trailing "+" is the plus key itself ("+" or "ctrl++").
        let (prefix, key_part) = if trimmed == "+" {
            ("", "+")
        } else if let Some(prefix) = trimmed.strip_suffix("++") {
            (prefix, "+")
        } else {
            match trimmed.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", trimmed),
            }
        };

        let mut modifiers = Modifiers::NONE;
        if !prefix.is_empty() {
            for part in prefix.split('+') {
                match part.to_ascii_lowercase().as_str() {
                    "ctrl" | "control" => modifiers.ctrl = true,
                    "alt" | "option" => modifiers.alt = true,
                    "shift" => modifiers.shift = true,
                    _ => return Err(invalid(&format!("unknown modifier '{part}'"))),
                }
            }
        }

        let key = Key::parse(key_part).ok_or_else(|| invalid(&format!("unknown key '{key_part}'")))?;
        Ok(Self { key, modifiers })
    }
}

impl TryFrom<String> for KeyPattern {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<KeyPattern> for String {
    fn from(pattern: KeyPattern) -> Self {
        pattern.to_string()
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifier_prefix(), self.key.name())
    }
}

/// The keys that trigger one action, plus the text shown in the help line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Patterns that trigger the action.
    pub keys: Vec<KeyPattern>,
    /// Short description of the action, e.g. `"quit"`.
    pub help: String,
}

impl Binding {
    /// Creates a binding.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = KeyPattern>, help: impl Into<String>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            help: help.into(),
        }
    }

    /// Returns `true` if any pattern of this binding equals `pattern`.
    #[must_use]
    pub fn contains(&self, pattern: &KeyPattern) -> bool {
        self.keys.contains(pattern)
    }

    /// Returns the key part of the help entry, e.g. `"←/h"`.
    #[must_use]
    pub fn help_keys(&self) -> String {
        self.keys
            .iter()
            .map(KeyPattern::label)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// The complete key binding table.
///
/// `quit`, `left` and `right` are handled by the board itself. `up`, `down`,
/// `new`, `edit`, `delete` and `advance` are handled by the focused column.
/// `back`, `submit` and `next_field` are only used by the item form.
///
/// # Examples
///
/// ```
/// use kancli_config::keys::{KeyBindings, KeyPattern};
///
/// let keys = KeyBindings::default();
/// assert!(keys.quit.contains(&"q".parse::<KeyPattern>().unwrap()));
/// assert!(keys.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: Binding,
    /// Focus the column to the left.
    pub left: Binding,
    /// Focus the column to the right.
    pub right: Binding,
    /// Select the previous item.
    pub up: Binding,
    /// Select the next item.
    pub down: Binding,
    /// Open the form for a new item.
    pub new: Binding,
    /// Open the form for the selected item.
    pub edit: Binding,
    /// Delete the selected item.
    pub delete: Binding,
    /// Move the selected item to the next column.
    pub advance: Binding,
    /// Leave the form without saving.
    pub back: Binding,
    /// Confirm the current form field.
    pub submit: Binding,
    /// Switch between form fields.
    pub next_field: Binding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: Binding::new(
                [
                    KeyPattern::new(Key::Char('c'), Modifiers::CTRL),
                    KeyPattern::char('q'),
                ],
                "quit",
            ),
            left: Binding::new([KeyPattern::plain(Key::Left), KeyPattern::char('h')], "left"),
            right: Binding::new([KeyPattern::plain(Key::Right), KeyPattern::char('l')], "right"),
            up: Binding::new([KeyPattern::plain(Key::Up), KeyPattern::char('k')], "up"),
            down: Binding::new([KeyPattern::plain(Key::Down), KeyPattern::char('j')], "down"),
            new: Binding::new([KeyPattern::char('n')], "new"),
            edit: Binding::new([KeyPattern::char('e')], "edit"),
            delete: Binding::new([KeyPattern::char('d')], "delete"),
            advance: Binding::new([KeyPattern::plain(Key::Enter)], "move"),
            back: Binding::new([KeyPattern::plain(Key::Esc)], "back"),
            submit: Binding::new([KeyPattern::plain(Key::Enter)], "submit"),
            next_field: Binding::new([KeyPattern::plain(Key::Tab)], "next field"),
        }
    }
}

impl KeyBindings {
    /// Returns the bindings active while the board has control, with their names.
    #[must_use]
    pub fn board_bindings(&self) -> [(&'static str, &Binding); 9] {
        [
            ("up", &self.up),
            ("down", &self.down),
            ("left", &self.left),
            ("right", &self.right),
            ("new", &self.new),
            ("edit", &self.edit),
            ("delete", &self.delete),
            ("advance", &self.advance),
            ("quit", &self.quit),
        ]
    }

    /// Returns the bindings active while the item form has control.
    #[must_use]
    pub fn form_bindings(&self) -> [(&'static str, &Binding); 3] {
        [
            ("submit", &self.submit),
            ("next_field", &self.next_field),
            ("back", &self.back),
        ]
    }

    /// Validates the table.
    ///
    /// Every binding needs at least one key, and no key may trigger two
    /// different actions while the board has control. Form bindings are
    /// checked against each other only, and may not use keys that type
    /// text, since the form hands those to the active field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBinding`],
    /// [`ConfigError::TextFormBinding`] or
    /// [`ConfigError::ConflictingBinding`].
    pub fn validate(&self) -> Result<()> {
        let board = self.board_bindings();
        let form = self.form_bindings();

        for (name, binding) in board.iter().chain(form.iter()) {
            if binding.keys.is_empty() {
                return Err(ConfigError::EmptyBinding { action: *name });
            }
        }

        for (name, binding) in &form {
            if let Some(key) = binding.keys.iter().find(|k| k.is_text()) {
                return Err(ConfigError::TextFormBinding {
                    key: key.to_string(),
                    action: *name,
                });
            }
        }

        check_conflicts(&board)?;
        check_conflicts(&form)
    }
}

fn check_conflicts(bindings: &[(&'static str, &Binding)]) -> Result<()> {
    for (i, (first, a)) in bindings.iter().enumerate() {
        for (second, b) in &bindings[i + 1..] {
            if let Some(key) = a.keys.iter().find(|k| b.contains(k)) {
                return Err(ConfigError::ConflictingBinding {
                    key: key.to_string(),
                    first: *first,
                    second: *second,
                });
            }
        }
    }
    Ok(())
}
