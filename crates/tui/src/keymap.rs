//! Matching terminal key events against configured key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kancli_config::{Binding, Key, KeyPattern, Modifiers};

/// Returns `true` if `key` triggers `binding`.
#[must_use]
pub fn matches(binding: &Binding, key: &KeyEvent) -> bool {
    binding.keys.iter().any(|pattern| pattern_matches(pattern, key))
}

/// Returns `true` if `key` is the key described by `pattern`.
///
/// Control and alt must match exactly. For characters, shift is usually
/// part of the reported character (`'Q'` rather than `'q'`), so a pattern
/// with shift accepts either the shift flag or an uppercase character, and
/// a pattern without it compares the character as reported. Terminals
/// report shift+tab as `BackTab`.
#[must_use]
pub fn pattern_matches(pattern: &KeyPattern, key: &KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    if ctrl != pattern.modifiers.ctrl || alt != pattern.modifiers.alt {
        return false;
    }

    match (pattern.key, key.code) {
        (Key::Char(expected), KeyCode::Char(actual)) => {
            if pattern.modifiers.shift {
                (shift || actual.is_uppercase()) && expected.eq_ignore_ascii_case(&actual)
            } else if ctrl {
                expected.eq_ignore_ascii_case(&actual)
            } else {
                expected == actual
            }
        }
        (Key::Tab, KeyCode::BackTab) => pattern.modifiers.shift,
        (named, code) => shift == pattern.modifiers.shift && key_code(named) == code,
    }
}

/// Returns `true` if `key` types text into an input field.
#[must_use]
pub fn is_text_input(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Builds the key event a terminal reports for `pattern`.
///
/// Useful for driving the board from scripts and tests with the same
/// patterns the configuration uses.
#[must_use]
pub fn key_event(pattern: &KeyPattern) -> KeyEvent {
    let code = match pattern.key {
        Key::Tab if pattern.modifiers.shift => KeyCode::BackTab,
        other => key_code(other),
    };
    KeyEvent::new(code, key_modifiers(pattern.modifiers))
}

fn key_code(key: Key) -> KeyCode {
    match key {
        Key::Char(c) => KeyCode::Char(c),
        Key::Left => KeyCode::Left,
        Key::Right => KeyCode::Right,
        Key::Up => KeyCode::Up,
        Key::Down => KeyCode::Down,
        Key::Enter => KeyCode::Enter,
        Key::Esc => KeyCode::Esc,
        Key::Tab => KeyCode::Tab,
        Key::Backspace => KeyCode::Backspace,
        Key::Delete => KeyCode::Delete,
        Key::Home => KeyCode::Home,
        Key::End => KeyCode::End,
    }
}

fn key_modifiers(modifiers: Modifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.ctrl {
        out |= KeyModifiers::CONTROL;
    }
    if modifiers.alt {
        out |= KeyModifiers::ALT;
    }
    if modifiers.shift {
        out |= KeyModifiers::SHIFT;
    }
    out
}
