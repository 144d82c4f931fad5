//! The three-column board.
//!
//! The board is a thin composition layer: it owns three columns and the
//! focus index, routes events to them, and draws them side by side above a
//! one-line key legend. Everything a column does with an event is up to
//! the column.

use std::{fmt, sync::Arc};

use kancli_config::KeyBindings;
use kancli_protocol::{Focus, MoveMsg};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Widget},
};
use tracing::{debug, info, warn};

use crate::{
    column::{Column, ColumnUpdate},
    command::Command,
    event::Event,
    keymap::matches,
    layout::{HELP_HEIGHT, HELP_MARGIN, LOADING_TEXT},
    modal::Modal,
    widgets::{buffer_to_string, render_help_line},
};

/// Callback invoked after an item has been appended to its target column.
pub type MoveHandler = Arc<dyn Fn(&MoveMsg) + Send + Sync>;

/// Result of [`Board::update`].
#[derive(Debug)]
pub enum BoardUpdate {
    /// The board stays in control.
    Continue(Command),
    /// The focused column asked for a modal view. The host shows it until
    /// it closes, then resumes dispatching to this board.
    HandOff(Box<dyn Modal>, Command),
}

impl BoardUpdate {
    /// Returns the command carried by either variant.
    #[must_use]
    pub fn command(&self) -> &Command {
        match self {
            Self::Continue(command) | Self::HandOff(_, command) => command,
        }
    }
}

/// A kanban board of three columns: To Do, In Progress and Done.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use kancli_config::KeyBindings;
/// use kancli_protocol::{Focus, MoveMsg};
/// use kancli_tui::{Board, Event, ListColumn};
///
/// let keys = KeyBindings::default();
/// let columns = Focus::all().map(|kind| ListColumn::new(kind, keys.clone()));
/// let mut board = Board::new(columns, keys, Arc::new(|_: &MoveMsg| {}));
///
/// assert_eq!(board.view(60, 8), "loading...");
/// board.update(Event::Resize { width: 60, height: 8 });
/// assert!(board.view(60, 8).contains("To Do"));
/// ```
pub struct Board<C> {
    columns: [C; Focus::COUNT],
    focused: Focus,
    keys: KeyBindings,
    on_move: MoveHandler,
    help_width: u16,
    loaded: bool,
    quitting: bool,
}

impl<C: fmt::Debug> fmt::Debug for Board<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("columns", &self.columns)
            .field("focused", &self.focused)
            .field("help_width", &self.help_width)
            .field("loaded", &self.loaded)
            .field("quitting", &self.quitting)
            .finish_non_exhaustive()
    }
}

impl<C: Column> Board<C> {
    /// Creates a board from columns ordered To Do, In Progress, Done.
    ///
    /// The first column that reports itself focused keeps focus, or To Do
    /// if none does. Every other column is blurred.
    #[must_use]
    pub fn new(columns: [C; Focus::COUNT], keys: KeyBindings, on_move: MoveHandler) -> Self {
        let focused = columns
            .iter()
            .position(Column::is_focused)
            .and_then(Focus::from_index)
            .unwrap_or_default();

        let mut board = Self {
            columns,
            focused,
            keys,
            on_move,
            help_width: 0,
            loaded: false,
            quitting: false,
        };
        for (column, kind) in board.columns.iter_mut().zip(Focus::all()) {
            if kind == focused {
                column.focus();
            } else {
                column.blur();
            }
        }
        board
    }

    /// The column holding keyboard focus.
    #[must_use]
    pub fn focused(&self) -> Focus {
        self.focused
    }

    /// The column in the `kind` slot.
    #[must_use]
    pub fn column(&self, kind: Focus) -> &C {
        &self.columns[kind.index()]
    }

    /// All columns, ordered To Do, In Progress, Done.
    #[must_use]
    pub fn columns(&self) -> &[C; Focus::COUNT] {
        &self.columns
    }

    /// The key bindings the board matches against.
    #[must_use]
    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    /// Width available to the key legend.
    #[must_use]
    pub fn help_width(&self) -> u16 {
        self.help_width
    }

    /// Returns `true` once the first resize has been seen.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns `true` once the quit binding was pressed.
    #[must_use]
    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Handles one event.
    ///
    /// - Resizes go to every column.
    /// - Moves append the item to the target column and report the move to
    ///   the callback before reaching the focused column.
    /// - Quit stops the board.
    /// - Left and right shift focus, and the key then reaches the newly
    ///   focused column.
    /// - Anything else only reaches the focused column.
    pub fn update(&mut self, event: Event) -> BoardUpdate {
        match &event {
            Event::Resize { width, .. } => {
                self.help_width = width.saturating_sub(HELP_MARGIN);
                self.broadcast(&event)
            }
            Event::Move(msg) => {
                let appended = self.columns[msg.target.index()].append(msg.item.clone());
                info!(target_column = %msg.target, id = %msg.item.id, title = %msg.item.title, "moved item");
                (self.on_move)(msg);
                self.forward(&event, appended)
            }
            Event::Key(key) if matches(&self.keys.quit, key) => {
                info!("quit requested");
                self.quitting = true;
                BoardUpdate::Continue(Command::Quit)
            }
            Event::Key(key) if matches(&self.keys.left, key) => {
                self.set_focus(self.focused.prev());
                self.forward(&event, Command::None)
            }
            Event::Key(key) if matches(&self.keys.right, key) => {
                self.set_focus(self.focused.next());
                self.forward(&event, Command::None)
            }
            Event::Key(_) | Event::Submit(_) => self.forward(&event, Command::None),
        }
    }

    /// Renders the board to text, the way a `width` by `height` terminal
    /// would show it, with trailing blank space removed.
    ///
    /// A quitting board renders as an empty string.
    #[must_use]
    pub fn view(&self, width: u16, height: u16) -> String {
        if self.quitting {
            return String::new();
        }
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Widget::render(self, area, &mut buf);
        buffer_to_string(&buf).trim_end().to_string()
    }

    fn set_focus(&mut self, next: Focus) {
        self.columns[self.focused.index()].blur();
        self.columns[next.index()].focus();
        debug!(from = %self.focused, to = %next, "focus changed");
        self.focused = next;
    }

    fn forward(&mut self, event: &Event, pending: Command) -> BoardUpdate {
        match self.columns[self.focused.index()].update(event) {
            ColumnUpdate::Stay(command) => BoardUpdate::Continue(Command::batch([pending, command])),
            ColumnUpdate::HandOff(modal, command) => {
                debug!(column = %self.focused, "column handed off to modal");
                BoardUpdate::HandOff(modal, Command::batch([pending, command]))
            }
        }
    }

    fn broadcast(&mut self, event: &Event) -> BoardUpdate {
        let commands: Vec<Command> = self
            .columns
            .iter_mut()
            .zip(Focus::all())
            .map(|(column, kind)| match column.update(event) {
                ColumnUpdate::Stay(command) => command,
                ColumnUpdate::HandOff(_, command) => {
                    warn!(column = %kind, "ignoring hand-off requested during resize");
                    command
                }
            })
            .collect();
        self.loaded = true;
        BoardUpdate::Continue(Command::batch(commands))
    }
}

impl<C: Column> Widget for &Board<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.quitting {
            return;
        }
        if !self.loaded {
            Paragraph::new(LOADING_TEXT).render(area, buf);
            return;
        }

        let [columns_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(HELP_HEIGHT)]).areas(area);
        let column_areas: [Rect; Focus::COUNT] =
            Layout::horizontal([Constraint::Ratio(1, 3); Focus::COUNT]).areas(columns_area);

        for (column, column_area) in self.columns.iter().zip(column_areas) {
            Column::render(column, column_area, buf);
        }

        let legend: Vec<_> = self
            .keys
            .board_bindings()
            .into_iter()
            .map(|(_, binding)| binding)
            .collect();
        render_help_line(&legend, self.help_width, help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{list_column::ListColumn, modal::ModalUpdate};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use kancli_protocol::{Item, Submission};
    use proptest::prelude::*;

    #[derive(Debug)]
    struct NullModal;

    impl Modal for NullModal {
        fn update(&mut self, _event: &Event) -> ModalUpdate {
            ModalUpdate::Close(Command::None)
        }

        fn render(&self, _area: Rect, _buf: &mut Buffer) {}
    }

    /// A column that records what reaches it.
    #[derive(Debug, Default)]
    struct Recorder {
        focused: bool,
        seen: Vec<Event>,
        appended: Vec<Item>,
        hand_off: bool,
    }

    impl Recorder {
        fn focused() -> Self {
            Self {
                focused: true,
                ..Self::default()
            }
        }

        fn handing_off() -> Self {
            Self {
                hand_off: true,
                ..Self::default()
            }
        }
    }

    impl Column for Recorder {
        fn update(&mut self, event: &Event) -> ColumnUpdate {
            self.seen.push(event.clone());
            if self.hand_off {
                ColumnUpdate::HandOff(Box::new(NullModal), Command::None)
            } else {
                ColumnUpdate::Stay(Command::None)
            }
        }

        fn append(&mut self, item: Item) -> Command {
            self.appended.push(item);
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

        fn render(&self, _area: Rect, _buf: &mut Buffer) {}
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn board(columns: [Recorder; 3]) -> Board<Recorder> {
        Board::new(columns, KeyBindings::default(), Arc::new(|_: &MoveMsg| {}))
    }

    fn recorders() -> [Recorder; 3] {
        [Recorder::default(), Recorder::default(), Recorder::default()]
    }

    fn focus_flags<C: Column>(board: &Board<C>) -> [bool; 3] {
        Focus::all().map(|kind| board.column(kind).is_focused())
    }

    fn resize(width: u16, height: u16) -> Event {
        Event::Resize { width, height }
    }

    #[test]
    fn defaults_to_todo_when_no_column_is_focused() {
        let board = board(recorders());
        assert_eq!(board.focused(), Focus::ToDo);
        assert_eq!(focus_flags(&board), [true, false, false]);
    }

    #[test]
    fn first_focused_column_wins() {
        let board = board([Recorder::default(), Recorder::focused(), Recorder::focused()]);
        assert_eq!(board.focused(), Focus::InProgress);
        assert_eq!(focus_flags(&board), [false, true, false]);
    }

    #[test]
    fn right_cycles_through_all_columns() {
        let mut board = board(recorders());
        let expected = [Focus::InProgress, Focus::Done, Focus::ToDo];

        for focus in expected {
            board.update(key(KeyCode::Right));
            assert_eq!(board.focused(), focus);
            let flags = focus_flags(&board);
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            assert!(flags[focus.index()]);
        }
    }

    #[test]
    fn left_wraps_to_done() {
        let mut board = board(recorders());
        board.update(key(KeyCode::Char('h')));
        assert_eq!(board.focused(), Focus::Done);
        assert_eq!(focus_flags(&board), [false, false, true]);
    }

    #[test]
    fn focus_keys_reach_the_new_column() {
        let mut board = board(recorders());
        board.update(key(KeyCode::Right));

        assert!(board.column(Focus::ToDo).seen.is_empty());
        assert_eq!(board.column(Focus::InProgress).seen, [key(KeyCode::Right)]);
    }

    #[test]
    fn resize_reaches_every_column() {
        let mut board = board(recorders());
        let update = board.update(resize(100, 30));

        assert!(update.command().is_none());
        for kind in Focus::all() {
            assert_eq!(board.column(kind).seen, [resize(100, 30)]);
        }
        assert_eq!(board.help_width(), 96);
        assert!(board.is_loaded());
    }

    #[test]
    fn narrow_resize_saturates_help_width() {
        let mut board = board(recorders());
        board.update(resize(2, 10));
        assert_eq!(board.help_width(), 0);
    }

    #[test]
    fn other_keys_reach_only_the_focused_column() {
        let mut board = board([Recorder::default(), Recorder::focused(), Recorder::default()]);
        board.update(key(KeyCode::Down));

        assert!(board.column(Focus::ToDo).seen.is_empty());
        assert_eq!(board.column(Focus::InProgress).seen, [key(KeyCode::Down)]);
        assert!(board.column(Focus::Done).seen.is_empty());
    }

    #[test]
    fn move_appends_then_notifies_once() {
        let moves = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&moves);
        let mut columns = recorders();
        columns[2].appended.push(Item::new("earlier", ""));
        let mut board = Board::new(
            columns,
            KeyBindings::default(),
            Arc::new(move |msg: &MoveMsg| recorded.lock().expect("lock").push(msg.clone())),
        );

        let msg = MoveMsg::new(Focus::Done, Item::new("X", ""));
        let update = board.update(Event::Move(msg.clone()));

        assert!(update.command().is_none());
        let done: Vec<_> = board.column(Focus::Done).appended.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(done, ["earlier", "X"]);
        assert_eq!(*moves.lock().expect("lock"), [msg.clone()]);
        // The move also reaches the focused column, and no other.
        assert_eq!(board.column(Focus::ToDo).seen, [Event::Move(msg)]);
        assert!(board.column(Focus::InProgress).seen.is_empty());
        assert!(board.column(Focus::Done).seen.is_empty());
    }

    #[test]
    fn submit_reaches_only_the_focused_column() {
        let mut board = board([Recorder::default(), Recorder::default(), Recorder::focused()]);
        let submit = Event::Submit(Submission::create(Item::new("new", "")));

        let update = board.update(submit.clone());

        assert!(update.command().is_none());
        assert!(board.column(Focus::ToDo).seen.is_empty());
        assert!(board.column(Focus::InProgress).seen.is_empty());
        assert_eq!(board.column(Focus::Done).seen, [submit]);
        for kind in Focus::all() {
            assert!(board.column(kind).appended.is_empty());
        }
    }

    #[test]
    fn quit_stops_rendering() {
        let mut board = board(recorders());
        board.update(resize(40, 10));

        let update = board.update(key(KeyCode::Char('q')));
        assert!(update.command().is_quit());
        assert!(board.is_quitting());
        assert_eq!(board.view(40, 10), "");

        board.update(resize(80, 20));
        assert_eq!(board.view(80, 20), "");
    }

    #[test]
    fn quit_is_not_forwarded() {
        let mut board = board(recorders());
        board.update(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(board.column(Focus::ToDo).seen.is_empty());
    }

    #[test]
    fn hand_off_is_passed_to_host() {
        let mut board = board([Recorder::handing_off(), Recorder::default(), Recorder::default()]);
        assert!(matches!(
            board.update(key(KeyCode::Char('n'))),
            BoardUpdate::HandOff(_, Command::None)
        ));
    }

    #[test]
    fn hand_off_during_resize_is_dropped() {
        let mut board = board([Recorder::handing_off(), Recorder::default(), Recorder::default()]);
        assert!(matches!(
            board.update(resize(80, 24)),
            BoardUpdate::Continue(Command::None)
        ));
        assert!(board.is_loaded());
    }

    #[test]
    fn shows_loading_until_first_resize() {
        let board = board(recorders());
        insta::assert_snapshot!(board.view(40, 5), @"loading...");
    }

    #[test]
    fn renders_columns_and_legend() {
        let keys = KeyBindings::default();
        let columns = [
            ListColumn::with_items(Focus::ToDo, vec![Item::new("Buy milk", "strawberry")], keys.clone()),
            ListColumn::new(Focus::InProgress, keys.clone()),
            ListColumn::new(Focus::Done, keys.clone()),
        ];
        let mut board = Board::new(columns, keys, Arc::new(|_: &MoveMsg| {}));
        board.update(resize(90, 12));

        let view = board.view(90, 12);
        assert!(view.contains("To Do (1)"));
        assert!(view.contains("In Progress (0)"));
        assert!(view.contains("Done (0)"));
        assert!(view.contains("│ Buy milk"));
        let legend = view.lines().last().expect("legend line");
        assert!(legend.starts_with("↑/k up • ↓/j down"));
        assert!(legend.chars().count() <= 86);
    }

    #[test]
    fn item_advances_across_the_board() {
        let keys = KeyBindings::default();
        let columns = [
            ListColumn::with_items(Focus::ToDo, vec![Item::new("task", "")], keys.clone()),
            ListColumn::new(Focus::InProgress, keys.clone()),
            ListColumn::new(Focus::Done, keys.clone()),
        ];
        let mut board = Board::new(columns, keys, Arc::new(|_: &MoveMsg| {}));

        let BoardUpdate::Continue(Command::Emit(event)) = board.update(key(KeyCode::Enter)) else {
            panic!("expected a move to be emitted");
        };
        board.update(event);

        assert!(board.column(Focus::ToDo).items().is_empty());
        assert_eq!(board.column(Focus::InProgress).items()[0].title, "task");
    }

    proptest! {
        #[test]
        fn exactly_one_column_stays_focused(moves in proptest::collection::vec(any::<bool>(), 0..30)) {
            let mut board = board(recorders());
            let mut expected: usize = 0;

            for right in moves {
                if right {
                    board.update(key(KeyCode::Right));
                    expected = (expected + 1) % 3;
                } else {
                    board.update(key(KeyCode::Left));
                    expected = (expected + 2) % 3;
                }
                let flags = focus_flags(&board);
                prop_assert_eq!(flags.iter().filter(|f| **f).count(), 1);
                prop_assert!(flags[board.focused().index()]);
                prop_assert_eq!(board.focused().index(), expected);
            }
        }
    }
}
