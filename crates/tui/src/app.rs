//! Main application struct and run loop.
//!
//! The [`App`] owns the board and at most one modal view. It routes events
//! to whichever is in control, executes the commands they return, and
//! drives the terminal.

use std::collections::VecDeque;

use ratatui::Frame;
use tracing::{debug, warn};

use crate::{
    board::{Board, BoardUpdate},
    column::Column,
    command::Command,
    event::{Event, poll_event},
    list_column::ListColumn,
    modal::{Modal, ModalUpdate},
    terminal::AppTerminal,
};

/// The main application struct.
///
/// Manages the board and provides the main event loop.
#[derive(Debug)]
pub struct App<C = ListColumn> {
    board: Board<C>,
    modal: Option<Box<dyn Modal>>,
    pending: VecDeque<Event>,
    should_quit: bool,
}

impl<C: Column> App<C> {
    /// Creates a new application around `board`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use kancli_config::KeyBindings;
    /// use kancli_protocol::{Focus, MoveMsg};
    /// use kancli_tui::{App, Board, ListColumn};
    ///
    /// let keys = KeyBindings::default();
    /// let columns = Focus::all().map(|kind| ListColumn::new(kind, keys.clone()));
    /// let app = App::new(Board::new(columns, keys, Arc::new(|_: &MoveMsg| {})));
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(board: Board<C>) -> Self {
        Self {
            board,
            modal: None,
            pending: VecDeque::new(),
            should_quit: false,
        }
    }

    /// The board, including while a modal has control.
    #[must_use]
    pub fn board(&self) -> &Board<C> {
        &self.board
    }

    /// Returns `true` while a modal view has control.
    #[must_use]
    pub fn has_modal(&self) -> bool {
        self.modal.is_some()
    }

    /// Returns `true` once a quit command was executed.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Processes an event and every event emitted while handling it.
    ///
    /// Emitted events are handled in the order they were produced, before
    /// this function returns.
    pub fn dispatch(&mut self, event: Event) {
        self.pending.push_back(event);
        while let Some(event) = self.pending.pop_front() {
            self.handle(event);
        }
    }

    fn handle(&mut self, event: Event) {
        let Some(modal) = self.modal.as_mut() else {
            let update = self.board.update(event);
            self.apply_board(update);
            return;
        };

        match modal.update(&event) {
            ModalUpdate::Stay(command) => self.apply(command),
            ModalUpdate::Close(command) => {
                debug!("modal closed");
                self.modal = None;
                self.apply(command);
            }
        }

        // The board keeps track of the terminal size and of moved items
        // while hidden.
        if matches!(event, Event::Resize { .. } | Event::Move(_)) {
            match self.board.update(event) {
                BoardUpdate::Continue(command) => self.apply(command),
                BoardUpdate::HandOff(_, command) => {
                    warn!("ignoring hand-off requested while a modal is open");
                    self.apply(command);
                }
            }
        }
    }

    fn apply_board(&mut self, update: BoardUpdate) {
        match update {
            BoardUpdate::Continue(command) => self.apply(command),
            BoardUpdate::HandOff(modal, command) => {
                debug!("modal opened");
                self.modal = Some(modal);
                self.apply(command);
            }
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Quit => self.should_quit = true,
            Command::Emit(event) => self.pending.push_back(event),
            Command::Batch(commands) => {
                for command in commands {
                    self.apply(command);
                }
            }
        }
    }

    /// Renders the modal when one is active, otherwise the board.
    ///
    /// Nothing is drawn once a quit command was executed.
    pub fn view(&self, frame: &mut Frame) {
        if self.should_quit {
            return;
        }
        let area = frame.area();
        match &self.modal {
            Some(modal) => modal.render(area, frame.buffer_mut()),
            None => frame.render_widget(&self.board, area),
        }
    }

    /// Runs the main application loop.
    ///
    /// This function returns once a quit command was executed. The board
    /// receives the current terminal size before the first frame is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use kancli_config::KeyBindings;
    /// use kancli_protocol::{Focus, MoveMsg};
    /// use kancli_tui::{App, Board, ListColumn, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let keys = KeyBindings::default();
    ///     let columns = Focus::all().map(|kind| ListColumn::new(kind, keys.clone()));
    ///     let mut app = App::new(Board::new(columns, keys, Arc::new(|_: &MoveMsg| {})));
    ///
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let size = terminal.size()?;
        self.dispatch(Event::Resize {
            width: size.width,
            height: size.height,
        });

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if self.should_quit {
                break;
            }

            if let Some(raw) = poll_event()?
                && let Some(event) = Event::from_terminal(&raw)
            {
                self.dispatch(event);
            }
        }

        debug!("event loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::widgets::buffer_to_string;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use kancli_config::KeyBindings;
    use kancli_protocol::{Focus, Item, MoveMsg};
    use ratatui::{Terminal, backend::TestBackend};

    fn app(todo: &[&str]) -> App {
        let keys = KeyBindings::default();
        let items = todo.iter().map(|t| Item::new(*t, "")).collect();
        let columns = [
            ListColumn::with_items(Focus::ToDo, items, keys.clone()),
            ListColumn::new(Focus::InProgress, keys.clone()),
            ListColumn::new(Focus::Done, keys.clone()),
        ];
        App::new(Board::new(columns, keys, Arc::new(|_: &MoveMsg| {})))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.dispatch(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn titles(app: &App, kind: Focus) -> Vec<String> {
        app.board()
            .column(kind)
            .items()
            .iter()
            .map(|i| i.title.clone())
            .collect()
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| app.view(frame)).expect("draw");
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn view_shows_loading_before_resize() {
        let app = app(&[]);
        assert!(render(&app, 60, 10).starts_with("loading..."));
    }

    #[test]
    fn view_shows_board_after_resize() {
        let mut app = app(&["Buy milk"]);
        app.dispatch(Event::Resize {
            width: 60,
            height: 10,
        });

        let content = render(&app, 60, 10);
        assert!(content.contains("To Do (1)"));
        assert!(content.contains("Buy milk"));
    }

    #[test]
    fn quit_key_sets_should_quit() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
        assert!(app.board().is_quitting());
        assert_eq!(render(&app, 40, 5).trim(), "");
    }

    #[test]
    fn emitted_move_is_applied_in_same_dispatch() {
        let mut app = app(&["a", "b"]);
        press(&mut app, KeyCode::Enter);

        assert_eq!(titles(&app, Focus::ToDo), ["b"]);
        assert_eq!(titles(&app, Focus::InProgress), ["a"]);
    }

    #[test]
    fn new_item_through_form() {
        let mut app = app(&["existing"]);
        app.dispatch(Event::Resize {
            width: 80,
            height: 24,
        });

        press(&mut app, KeyCode::Char('n'));
        assert!(app.has_modal());
        assert!(render(&app, 80, 24).contains("New item (To Do)"));

        // `q` is typed, not treated as quit, while the form is open.
        type_text(&mut app, "quiz");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "prep");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_modal());
        assert!(!app.should_quit());
        assert_eq!(titles(&app, Focus::ToDo), ["existing", "quiz"]);
        let item = &app.board().column(Focus::ToDo).items()[1];
        assert_eq!(item.description, "prep");
    }

    #[test]
    fn edit_item_through_form() {
        let mut app = app(&["old"]);
        press(&mut app, KeyCode::Char('e'));
        assert!(app.has_modal());

        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "new");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(titles(&app, Focus::ToDo), ["new"]);
    }

    #[test]
    fn esc_cancels_form() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "abandoned");
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_modal());
        assert!(titles(&app, Focus::ToDo).is_empty());
    }

    #[test]
    fn ctrl_c_in_form_quits() {
        let mut app = app(&[]);
        app.dispatch(Event::Resize {
            width: 80,
            height: 24,
        });
        press(&mut app, KeyCode::Char('n'));
        assert!(render(&app, 80, 24).contains("New item (To Do)"));

        app.dispatch(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));

        assert!(app.should_quit());
        assert_eq!(render(&app, 80, 24).trim(), "");
    }

    #[test]
    fn move_while_form_open_reaches_board() {
        let moves = Arc::new(std::sync::Mutex::new(Vec::new()));
        let recorded = Arc::clone(&moves);
        let keys = KeyBindings::default();
        let columns = Focus::all().map(|kind| ListColumn::new(kind, keys.clone()));
        let mut app = App::new(Board::new(
            columns,
            keys,
            Arc::new(move |msg: &MoveMsg| recorded.lock().expect("lock").push(msg.clone())),
        ));

        press(&mut app, KeyCode::Char('n'));
        let msg = MoveMsg::new(Focus::Done, Item::new("X", ""));
        app.dispatch(Event::Move(msg.clone()));
        assert!(app.has_modal());

        press(&mut app, KeyCode::Esc);

        assert!(!app.has_modal());
        assert_eq!(titles(&app, Focus::Done), ["X"]);
        assert_eq!(*moves.lock().expect("lock"), [msg]);
    }

    #[test]
    fn focus_keys_do_not_reach_board_while_form_open() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.board().focused(), Focus::ToDo);
    }

    #[test]
    fn resize_reaches_board_while_form_open() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char('n'));
        app.dispatch(Event::Resize {
            width: 50,
            height: 20,
        });

        assert!(app.has_modal());
        assert!(app.board().is_loaded());
        assert_eq!(app.board().help_width(), 46);
    }
}
