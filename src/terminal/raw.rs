use std::os::fd::AsFd;

use nix::sys::termios::{
    self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices,
    Termios,
};

use crate::error::{Error, Result};

/// RAII wrapper for raw mode.
///
/// Captures the terminal attributes once on creation and puts the terminal
/// into raw mode. The captured snapshot is the only value ever used to
/// restore the terminal, either through [`RawMode::restore`] or on drop.
pub struct RawMode<F: AsFd> {
    fd: F,
    original: Termios,
    active: bool,
}

impl<F: AsFd> RawMode<F> {
    /// Enter raw mode on `fd`.
    ///
    /// `read_timeout` is the non-canonical read timeout in tenths of a second;
    /// reads return after that long even when no byte arrived.
    pub fn enable(fd: F, read_timeout: u8) -> Result<Self> {
        let original =
            termios::tcgetattr(fd.as_fd()).map_err(|e| Error::terminal_config("tcgetattr", e))?;

        let raw = raw_attributes(&original, read_timeout);
        if let Err(e) = termios::tcsetattr(fd.as_fd(), SetArg::TCSAFLUSH, &raw) {
            // A partial apply is possible; put the snapshot back before bailing out.
            if let Err(rollback) = termios::tcsetattr(fd.as_fd(), SetArg::TCSAFLUSH, &original) {
                tracing::error!("failed to roll back terminal mode: {}", rollback);
            }
            return Err(Error::terminal_config("tcsetattr", e));
        }

        tracing::debug!(read_timeout, "entered raw mode");
        Ok(Self {
            fd,
            original,
            active: true,
        })
    }

    /// Leave raw mode now and report whether the snapshot could be reapplied.
    ///
    /// There is no fallback when this fails; the terminal may stay raw.
    pub fn restore(mut self) -> Result<()> {
        self.restore_original()
    }

    fn restore_original(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        termios::tcsetattr(self.fd.as_fd(), SetArg::TCSAFLUSH, &self.original)
            .map_err(|e| Error::terminal_config("tcsetattr", e))?;
        tracing::debug!("restored original terminal mode");
        Ok(())
    }
}

impl<F: AsFd> Drop for RawMode<F> {
    fn drop(&mut self) {
        if let Err(e) = self.restore_original() {
            tracing::error!("failed to restore terminal mode: {}", e);
        }
    }
}

/// Derive raw-mode attributes from a captured snapshot.
pub fn raw_attributes(original: &Termios, read_timeout: u8) -> Termios {
    let mut raw = original.clone();

    raw.input_flags &= !(InputFlags::BRKINT
        | InputFlags::ICRNL
        | InputFlags::INPCK
        | InputFlags::ISTRIP
        | InputFlags::IXON);
    raw.output_flags &= !OutputFlags::OPOST;
    raw.control_flags |= ControlFlags::CS8;
    raw.local_flags &=
        !(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG);

    // Return as soon as any input is there, or after the timeout with nothing.
    raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
    raw.control_chars[SpecialCharacterIndices::VTIME as usize] = read_timeout;

    raw
}
