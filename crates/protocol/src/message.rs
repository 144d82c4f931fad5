//! Messages exchanged between columns and the board.

use serde::{Deserialize, Serialize};

use crate::{Focus, Item};

/// Request to move an item into another column.
///
/// Produced by a column when the user advances an item. The board appends
/// [`MoveMsg::item`] to the column named by [`MoveMsg::target`] and then
/// reports the message to its move callback. The value only lives for the
/// dispatch cycle that produced it.
///
/// # Examples
///
/// ```
/// use kancli_protocol::{Focus, Item, MoveMsg};
///
/// let msg = MoveMsg::new(Focus::Done, Item::new("Ship it", ""));
/// assert_eq!(msg.target, Focus::Done);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMsg {
    /// The column receiving the item.
    pub target: Focus,
    /// The item being moved.
    pub item: Item,
}

impl MoveMsg {
    /// Creates a move message.
    #[must_use]
    pub fn new(target: Focus, item: Item) -> Self {
        Self { target, item }
    }
}

/// An item produced by the add/edit form.
///
/// `index` is the position of the item being edited in the focused column,
/// or `None` when the form created a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// The new or edited item.
    pub item: Item,
    /// Position of the edited item, if this is an edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Submission {
    /// A submission that appends a new item.
    #[must_use]
    pub fn create(item: Item) -> Self {
        Self { item, index: None }
    }

    /// A submission that replaces the item at `index`.
    #[must_use]
    pub fn replace(index: usize, item: Item) -> Self {
        Self {
            item,
            index: Some(index),
        }
    }

    /// Returns `true` if this submission edits an existing item.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.index.is_some()
    }
}
