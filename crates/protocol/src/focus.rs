//! Column focus state machine.
//!
//! The board always has exactly one focused column. [`Focus`] names that
//! column and cycles through the three columns in both directions.

use serde::{Deserialize, Serialize};

/// The column that currently holds keyboard focus.
///
/// The order of the variants is the left-to-right order of the columns on
/// the board. Both [`Focus::next`] and [`Focus::prev`] wrap around, so the
/// state machine is total: every state has exactly one successor and one
/// predecessor.
///
/// # Examples
///
/// ```
/// use kancli_protocol::Focus;
///
/// let focus = Focus::ToDo;
/// assert_eq!(focus.next(), Focus::InProgress);
/// assert_eq!(focus.prev(), Focus::Done);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// Items that have not been started.
    #[default]
    ToDo,
    /// Items currently being worked on.
    InProgress,
    /// Completed items.
    Done,
}

impl Focus {
    /// Number of columns on a board.
    pub const COUNT: usize = 3;

    /// Returns all focus values in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Focus;
    ///
    /// let all = Focus::all();
    /// assert_eq!(all.len(), 3);
    /// assert_eq!(all[0], Focus::ToDo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::ToDo, Self::InProgress, Self::Done]
    }

    /// Returns the column title shown in the board header.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Focus;
    ///
    /// assert_eq!(Focus::ToDo.display_name(), "To Do");
    /// assert_eq!(Focus::InProgress.display_name(), "In Progress");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the index of the column (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `Focus` from a column index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Focus;
    ///
    /// assert_eq!(Focus::from_index(2), Some(Focus::Done));
    /// assert_eq!(Focus::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ToDo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the column to the right, wrapping from `Done` to `ToDo`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ToDo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::ToDo,
        }
    }

    /// Returns the column to the left, wrapping from `ToDo` to `Done`.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::ToDo => Self::Done,
            Self::InProgress => Self::ToDo,
            Self::Done => Self::InProgress,
        }
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for Focus {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(Focus::ToDo), Just(Focus::InProgress), Just(Focus::Done)].boxed()
        }
    }

    proptest! {
        /// `prev` undoes `next`.
        #[test]
        fn prev_is_inverse_of_next(focus in any::<Focus>()) {
            prop_assert_eq!(focus.next().prev(), focus);
        }

        /// `next` undoes `prev`.
        #[test]
        fn next_is_inverse_of_prev(focus in any::<Focus>()) {
            prop_assert_eq!(focus.prev().next(), focus);
        }

        /// Three steps in either direction return to the start, and fewer never do.
        #[test]
        fn cycle_length_is_three(focus in any::<Focus>()) {
            prop_assert_ne!(focus.next(), focus);
            prop_assert_ne!(focus.next().next(), focus);
            prop_assert_eq!(focus.next().next().next(), focus);

            prop_assert_ne!(focus.prev(), focus);
            prop_assert_ne!(focus.prev().prev(), focus);
            prop_assert_eq!(focus.prev().prev().prev(), focus);
        }

        /// Index conversion roundtrips for every column.
        #[test]
        fn index_roundtrip(focus in any::<Focus>()) {
            prop_assert_eq!(Focus::from_index(focus.index()), Some(focus));
        }
    }
}
