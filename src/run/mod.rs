//! Application execution for tilde.
//!
//! Owns the top-level fatal-error policy: whatever goes wrong, the terminal
//! restore has already been attempted by the time an error reaches
//! [`exit_status`], which reports it on stderr and maps it to status 1. A
//! failed restore travels inside the error, so it is reported too.

mod tui;

pub use tui::{run_session, run_terminal_mode};

use crate::error::Result;

/// Process exit status for a finished run: 0 on quit, 1 on any fatal error.
pub fn exit_status(result: Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("fatal: {}", e);
            eprintln!("tilde: {}", e);
            1
        }
    }
}
