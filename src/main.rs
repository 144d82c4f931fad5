//! kancli - a three-column kanban board for the terminal.
//!
//! This is the main binary: it loads the configuration, sets up logging to
//! a file, and runs the board on a demo data set.

use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use kancli_config::Config;
use kancli_protocol::{Focus, MoveMsg, dummy::sample_items};
use kancli_tui::{App, Board, ListColumn, terminal};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `kancli_tui=debug`.
const LOG_ENV: &str = "KANCLI_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = init_logging(&config)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting kancli");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(demo_board(&config));
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;
    info!("kancli exited");

    result
}

/// Sends tracing output to the configured log file.
///
/// The terminal belongs to the UI, so nothing is ever logged to stdout or
/// stderr. The returned guard flushes buffered lines when dropped.
fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    let path = config.log_path()?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Builds a board populated with the sample items, To Do focused.
fn demo_board(config: &Config) -> Board<ListColumn> {
    let keys = config.keys.clone();
    let [todo, in_progress, done] = sample_items();
    let columns = [
        ListColumn::with_items(Focus::ToDo, todo, keys.clone()).focused(),
        ListColumn::with_items(Focus::InProgress, in_progress, keys.clone()),
        ListColumn::with_items(Focus::Done, done, keys.clone()),
    ];

    Board::new(
        columns,
        keys,
        Arc::new(|msg: &MoveMsg| {
            debug!(target_column = %msg.target, id = %msg.item.id, "move callback");
        }),
    )
}
