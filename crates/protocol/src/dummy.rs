//! Sample data for demonstration and tests.
//!
//! # Examples
//!
//! ```
//! use kancli_protocol::dummy::sample_items;
//!
//! let [todo, in_progress, done] = sample_items();
//! assert_eq!(todo.len() + in_progress.len() + done.len(), 7);
//! ```

use crate::item::Item;

/// Generates a sample set of items for each of the three columns.
///
/// The arrays are in column order: To Do, In Progress, Done.
#[must_use]
pub fn sample_items() -> [Vec<Item>; 3] {
    [
        vec![
            Item::new("Buy milk", "strawberry milk"),
            Item::new("Eat sushi", "negitoro roll, miso soup, rice"),
            Item::new("Fold laundry", "or wear wrinkly t-shirts"),
        ],
        vec![
            Item::new("Write code", "don't worry, it's Rust"),
            Item::new("Plan trip", "pack light"),
        ],
        vec![
            Item::new("Stay cool", "as a cucumber"),
            Item::new("Water plants", "the fern looked thirsty"),
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_items_have_titles() {
        for column in sample_items() {
            assert!(!column.is_empty());
            assert!(column.iter().all(|item| !item.title.is_empty()));
        }
    }
}
