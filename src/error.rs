//! Error types for the terminal session, geometry and input layers.
//!
//! Every variant here is fatal: it propagates to the runner, which restores the
//! terminal, prints the message and exits with status 1. Read timeouts and
//! interrupted reads never become an `Error`.

use std::io;
use thiserror::Error;

/// Editor error type
#[derive(Error, Debug)]
pub enum Error {
    /// Terminal attributes could not be read or applied
    #[error("{op}: {source}")]
    TerminalConfig {
        op: &'static str,
        #[source]
        source: nix::Error,
    },

    /// Screen size could not be determined by either method
    #[error("getWindowSize: {0}")]
    Geometry(#[from] GeometryError),

    /// Reading a key failed for a reason other than timeout or interrupt
    #[error("read: {0}")]
    Input(#[source] io::Error),

    /// A fatal error, after which the original terminal mode could not be put back either
    #[error("{error} (terminal mode not restored: {restore})")]
    Unrestored {
        #[source]
        error: Box<Error>,
        restore: Box<Error>,
    },
}

/// Failure of the escape-sequence size probe
#[derive(Error, Debug)]
pub enum GeometryError {
    /// The terminal accepted fewer bytes than the request length
    #[error("short write of cursor request ({written} of {expected} bytes)")]
    ShortWrite { written: usize, expected: usize },

    /// The request could not be written or the report could not be read
    #[error("cursor position probe failed: {0}")]
    Io(#[from] io::Error),

    /// No `R` terminator arrived before the response buffer filled or input dried up
    #[error("no cursor position report terminator within {limit} bytes")]
    Unterminated { limit: usize },

    /// The report did not have the form `ESC [ rows ; cols R`
    #[error("malformed cursor position report {0:?}")]
    Malformed(String),
}

impl Error {
    pub(crate) fn terminal_config(op: &'static str, source: nix::Error) -> Self {
        Self::TerminalConfig { op, source }
    }

    /// Attach a failed terminal restore to the error that ended the session.
    pub(crate) fn unrestored(self, restore: Error) -> Self {
        Self::Unrestored {
            error: Box::new(self),
            restore: Box::new(restore),
        }
    }
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, Error>;
