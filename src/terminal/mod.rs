//! Terminal device layer: raw-mode session, screen geometry, key input and
//! screen rendering, all speaking raw escape sequences to a byte stream.

pub mod events;
pub mod geometry;
pub mod raw;
pub mod render;

use std::io::{self, Read, Write};

/// `ESC [ 2 J`: erase the entire screen
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
/// `ESC [ H`: cursor to row 1, column 1
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Cursor maximally right, then maximally down; the terminal clamps both
pub const CURSOR_FAR_CORNER: &[u8] = b"\x1b[999C\x1b[999B";
/// `ESC [ 6 n`: ask for a cursor-position report `ESC [ rows ; cols R`
pub const CURSOR_POSITION_REQUEST: &[u8] = b"\x1b[6n";

/// The terminal device as one input stream and one output stream.
///
/// The real editor pairs stdin with stdout; tests pair an in-memory reader
/// with a `Vec<u8>`, or a pseudo-terminal with a `Vec<u8>`.
#[derive(Debug)]
pub struct Terminal<R, W> {
    pub input: R,
    pub output: W,
}

impl<R, W> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Terminal<io::Stdin, io::Stdout> {
    /// The controlling terminal via the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W> Read for Terminal<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.input.read(buf)
    }
}

impl<R, W: Write> Write for Terminal<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
