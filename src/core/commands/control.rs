/// Application control commands
use std::io::Write;

use crate::core::command::Command;
use crate::core::dispatcher::LoopSignal;
use crate::terminal::{CLEAR_SCREEN, CURSOR_HOME};

/// Quit the editor: wipe the screen, home the cursor, stop the loop
#[derive(Clone)]
pub struct Quit;

impl Command for Quit {
    fn execute(&self, out: &mut dyn Write) -> LoopSignal {
        let written = out
            .write_all(CLEAR_SCREEN)
            .and_then(|_| out.write_all(CURSOR_HOME))
            .and_then(|_| out.flush());
        if let Err(e) = written {
            tracing::warn!("failed to clear screen on quit: {}", e);
        }
        LoopSignal::Terminate
    }
}
