//! Board item types.
//!
//! An [`Item`] is the unit of work displayed in a column. Items carry no
//! column information of their own: the column that holds an item decides
//! where it is shown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for an item.
///
/// Uses UUID v4 for globally unique identification.
pub type ItemId = uuid::Uuid;

/// A card on the kanban board.
///
/// # Examples
///
/// ```
/// use kancli_protocol::Item;
///
/// let item = Item::new("Write docs", "Document the public API");
/// assert_eq!(item.title, "Write docs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Short summary shown on the first line of the card.
    pub title: String,
    /// Longer text shown dimmed under the title.
    #[serde(default)]
    pub description: String,
    /// When this item was created.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item with a fresh identifier.
    ///
    /// No validation is performed; use [`Item::try_new`] for user input.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::new_v4(),
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Creates a new item from user input.
    ///
    /// Leading and trailing whitespace is trimmed from both fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidItemTitle`] if the trimmed title is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Item;
    ///
    /// let item = Item::try_new("  Fix bug ", "").unwrap();
    /// assert_eq!(item.title, "Fix bug");
    ///
    /// assert!(Item::try_new("   ", "no title").is_err());
    /// ```
    pub fn try_new(title: &str, description: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ProtocolError::InvalidItemTitle);
        }
        Ok(Self::new(title, description.trim()))
    }

    /// Returns a copy of this item with new text, keeping its identity.
    ///
    /// Used when an existing item is edited: the id and creation time stay
    /// the same so the edit replaces the card in place.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidItemTitle`] if the trimmed title is empty.
    pub fn with_text(&self, title: &str, description: &str) -> Result<Self> {
        let fresh = Self::try_new(title, description)?;
        Ok(Self {
            id: self.id,
            created_at: self.created_at,
            ..fresh
        })
    }
}
