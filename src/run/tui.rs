//! Terminal (TUI) mode implementation.

use std::io::{self, Read, Write};
use std::os::fd::AsFd;

use crate::config::Config;
use crate::core::app::Editor;
use crate::error::Result;
use crate::terminal::geometry::{self, ScreenSize};
use crate::terminal::raw::RawMode;
use crate::terminal::{CLEAR_SCREEN, CURSOR_HOME, Terminal};

/// Run the editor on the controlling terminal (stdin/stdout).
pub fn run_terminal_mode(config: &Config) -> Result<()> {
    let mut tty = Terminal::stdio();
    run_session(&mut tty, io::stdin(), config, geometry::query_window_size)
}

/// Run one editor session on `tty`, with raw mode applied to `fd`.
///
/// Raw mode is left before this returns, on success and on every error
/// after it was entered. On error the screen is cleared first. If leaving
/// raw mode fails after an error, both failures are returned together.
pub fn run_session<T, F, Q>(tty: &mut T, fd: F, config: &Config, query: Q) -> Result<()>
where
    T: Read + Write,
    F: AsFd,
    Q: FnOnce() -> io::Result<ScreenSize>,
{
    let session = RawMode::enable(fd, config.read_timeout())?;

    let result = run_editor(tty, config, query);
    if result.is_err() {
        clear_screen(tty);
    }

    match (result, session.restore()) {
        (Ok(()), restored) => restored,
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore)) => {
            tracing::error!("failed to restore terminal mode: {}", restore);
            Err(e.unrestored(restore))
        }
    }
}

fn run_editor<T, Q>(tty: &mut T, config: &Config, query: Q) -> Result<()>
where
    T: Read + Write,
    Q: FnOnce() -> io::Result<ScreenSize>,
{
    let probe_only = config.probe_only();
    let screen = geometry::resolve_screen_size(tty, || {
        if probe_only {
            Err(io::Error::other("window size query disabled"))
        } else {
            query()
        }
    })?;
    tracing::info!(rows = screen.rows, cols = screen.cols, "editor started");

    let mut editor = Editor::new(screen, config);
    editor.run(tty)
}

fn clear_screen<W: Write>(out: &mut W) {
    let _ = out
        .write_all(CLEAR_SCREEN)
        .and_then(|_| out.write_all(CURSOR_HOME))
        .and_then(|_| out.flush());
}
