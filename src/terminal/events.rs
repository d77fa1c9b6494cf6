use std::io::{self, Read};

use crate::core::input::Key;
use crate::error::{Error, Result};

/// Block until one key arrives.
///
/// In raw mode the terminal returns from `read` after the configured timeout
/// even with nothing typed. Those empty reads, interrupted reads and
/// would-block reads are the normal idle state and are retried here; any
/// other failure is an [`Error::Input`].
pub fn read_key<R: Read>(input: &mut R) -> Result<Key> {
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(1) => return Ok(Key(byte[0])),
            Ok(_) => continue,
            Err(e) if is_transient(&e) => continue,
            Err(e) => return Err(Error::Input(e)),
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
    )
}
