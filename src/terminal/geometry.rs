//! Screen geometry discovery
//!
//! The window-size query is tried first. When it fails, or reports zero
//! columns, the cursor is pushed to the bottom-right corner and the terminal
//! is asked where it ended up; that position is the screen size.

use std::io::{self, Read, Write};

use crate::error::{GeometryError, Result};
use crate::terminal::{CURSOR_FAR_CORNER, CURSOR_POSITION_REQUEST};

/// Upper bound on the bytes read while waiting for a cursor-position report
pub const PROBE_BUFFER_LEN: usize = 32;

/// Usable viewport size in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub rows: u16,
    pub cols: u16,
}

impl ScreenSize {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Ask the host for the window dimensions directly (crossterm `TIOCGWINSZ`).
pub fn query_window_size() -> io::Result<ScreenSize> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok(ScreenSize::new(rows, cols))
}

/// Resolve the screen size: `query` first, the cursor probe on `tty` as fallback.
pub fn resolve_screen_size<T, Q>(tty: &mut T, query: Q) -> Result<ScreenSize>
where
    T: Read + Write,
    Q: FnOnce() -> io::Result<ScreenSize>,
{
    match query() {
        Ok(size) if size.cols > 0 => {
            tracing::debug!(rows = size.rows, cols = size.cols, "window size from query");
            return Ok(size);
        }
        Ok(_) => tracing::warn!("window size query reported zero columns, probing"),
        Err(e) => tracing::warn!("window size query failed ({}), probing", e),
    }

    let size = probe_screen_size(tty)?;
    tracing::debug!(rows = size.rows, cols = size.cols, "window size from cursor probe");
    Ok(size)
}

/// Move the cursor to the far corner and read back its position.
pub fn probe_screen_size<T: Read + Write>(
    tty: &mut T,
) -> std::result::Result<ScreenSize, GeometryError> {
    send_request(tty, CURSOR_FAR_CORNER)?;
    cursor_position(tty)
}

/// Request a cursor-position report and parse the answer.
pub fn cursor_position<T: Read + Write>(
    tty: &mut T,
) -> std::result::Result<ScreenSize, GeometryError> {
    send_request(tty, CURSOR_POSITION_REQUEST)?;
    let report = read_report(tty)?;
    parse_cursor_report(&report)
}

/// Parse a cursor-position report body `ESC [ rows ; cols` (terminator stripped).
pub fn parse_cursor_report(report: &[u8]) -> std::result::Result<ScreenSize, GeometryError> {
    let malformed = || GeometryError::Malformed(String::from_utf8_lossy(report).into_owned());

    let body = report.strip_prefix(b"\x1b[").ok_or_else(malformed)?;
    let body = std::str::from_utf8(body).map_err(|_| malformed())?;
    let (rows, cols) = body.split_once(';').ok_or_else(malformed)?;
    let rows = parse_decimal(rows).ok_or_else(malformed)?;
    let cols = parse_decimal(cols).ok_or_else(malformed)?;

    if rows == 0 || cols == 0 {
        return Err(malformed());
    }
    Ok(ScreenSize::new(rows, cols))
}

fn parse_decimal(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// A single write call: a short write is a probe failure, not something to retry.
fn send_request<W: Write>(
    out: &mut W,
    request: &[u8],
) -> std::result::Result<(), GeometryError> {
    let written = out.write(request)?;
    if written != request.len() {
        return Err(GeometryError::ShortWrite {
            written,
            expected: request.len(),
        });
    }
    out.flush()?;
    Ok(())
}

/// Read up to the `R` terminator, one byte at a time, never more than
/// `PROBE_BUFFER_LEN` bytes. A read timeout ends the report early.
fn read_report<R: Read>(input: &mut R) -> std::result::Result<Vec<u8>, GeometryError> {
    let mut report = Vec::with_capacity(PROBE_BUFFER_LEN);
    let mut byte = [0u8; 1];

    while report.len() < PROBE_BUFFER_LEN {
        match input.read(&mut byte) {
            Ok(0) => break,
            Ok(_) if byte[0] == b'R' => return Ok(report),
            Ok(_) => report.push(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(GeometryError::Unterminated {
        limit: PROBE_BUFFER_LEN,
    })
}
