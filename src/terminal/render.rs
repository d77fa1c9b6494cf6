//! Terminal rendering module
//!
//! Every refresh repaints the whole viewport: clear, home, one placeholder
//! marker per row not backed by document content, home again. The frame is
//! assembled in memory and handed to the terminal in a single `write_all`,
//! so a short write can not leave half a frame behind.

use std::io::Write;

use crate::terminal::geometry::ScreenSize;
use crate::terminal::{CLEAR_SCREEN, CURSOR_HOME};

/// Append one full frame for `size` to `frame`.
pub fn build_frame(frame: &mut Vec<u8>, size: ScreenSize, placeholder: &str) {
    frame.extend_from_slice(CLEAR_SCREEN);
    frame.extend_from_slice(CURSOR_HOME);

    for row in 0..size.rows {
        frame.extend_from_slice(placeholder.as_bytes());
        // No line break after the last row, the screen would scroll.
        if row + 1 < size.rows {
            frame.extend_from_slice(b"\r\n");
        }
    }

    frame.extend_from_slice(CURSOR_HOME);
}

/// Redraw the viewport on `out`.
///
/// Write failures are logged and otherwise ignored; the next refresh
/// repaints everything anyway.
pub fn refresh_screen<W: Write>(out: &mut W, size: ScreenSize, placeholder: &str) {
    let mut frame = Vec::with_capacity(frame_len(size, placeholder));
    build_frame(&mut frame, size, placeholder);

    if let Err(e) = out.write_all(&frame).and_then(|_| out.flush()) {
        tracing::warn!("screen refresh failed: {}", e);
    }
}

fn frame_len(size: ScreenSize, placeholder: &str) -> usize {
    CLEAR_SCREEN.len() + 2 * CURSOR_HOME.len() + size.rows as usize * (placeholder.len() + 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_frame_layout() {
        let mut frame = Vec::new();
        build_frame(&mut frame, ScreenSize::new(3, 80), "~");
        assert_eq!(frame, b"\x1b[2J\x1b[H~\r\n~\r\n~\x1b[H");
    }

    #[test]
    fn test_one_marker_per_row() {
        let mut out = Vec::new();
        refresh_screen(&mut out, ScreenSize::new(24, 80), "~");
        assert_eq!(out.iter().filter(|&&b| b == b'~').count(), 24);
        assert!(out.starts_with(b"\x1b[2J\x1b[H"));
        assert!(out.ends_with(b"\x1b[H"));
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let size = ScreenSize::new(24, 80);
        let mut first = Vec::new();
        let mut second = Vec::new();
        refresh_screen(&mut first, size, "~");
        refresh_screen(&mut second, size, "~");
        assert_eq!(first, second);
    }

    #[test]
    fn test_frame_len_is_an_upper_bound() {
        let size = ScreenSize::new(24, 80);
        let mut frame = Vec::new();
        build_frame(&mut frame, size, "~");
        assert!(frame.len() <= frame_len(size, "~"));
    }

    #[test]
    fn test_short_writes_are_completed() {
        /// Accepts at most three bytes per call
        struct Trickle(Vec<u8>);
        impl Write for Trickle {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                let n = buf.len().min(3);
                self.0.extend_from_slice(&buf[..n]);
                Ok(n)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let size = ScreenSize::new(5, 10);
        let mut out = Trickle(Vec::new());
        refresh_screen(&mut out, size, "~");

        let mut expected = Vec::new();
        build_frame(&mut expected, size, "~");
        assert_eq!(out.0, expected);
    }

    #[test]
    fn test_write_failure_is_absorbed() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        refresh_screen(&mut Broken, ScreenSize::new(24, 80), "~");
    }
}
