//! The editor session and its control loop.
//!
//! The loop is an explicit state machine:
//!
//! ```text
//! Rendering -> AwaitingInput -> Dispatching(key) -> Rendering ...
//!                                      \
//!                                       -> Terminated
//! ```
//!
//! `Terminated` is only reached when a dispatched command returns
//! [`LoopSignal::Terminate`], and nothing leaves it.

use std::io::{Read, Write};

use crate::config::Config;
use crate::core::command::CommandRegistry;
use crate::core::commands;
use crate::core::dispatcher::{self, Keymap, LoopSignal};
use crate::core::input::Key;
use crate::error::Result;
use crate::terminal::events::read_key;
use crate::terminal::geometry::ScreenSize;
use crate::terminal::render;

/// Where the control loop is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Rendering,
    AwaitingInput,
    Dispatching(Key),
    Terminated,
}

/// Editor session state, built once at startup and owned by the runner.
pub struct Editor {
    screen: ScreenSize,
    placeholder: String,
    keymap: Keymap,
    registry: CommandRegistry,
    state: LoopState,
}

impl Editor {
    pub fn new(screen: ScreenSize, config: &Config) -> Self {
        let registry = commands::builtin_registry();
        let keymap = Keymap::from_config(config, &registry);
        Self {
            screen,
            placeholder: config.placeholder().to_string(),
            keymap,
            registry,
            state: LoopState::Rendering,
        }
    }

    #[cfg(test)]
    pub fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    #[cfg(test)]
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Repaint the viewport
    pub fn refresh_screen<W: Write>(&self, out: &mut W) {
        render::refresh_screen(out, self.screen, &self.placeholder);
    }

    /// Wait for one key and run what it is bound to.
    pub fn process_keypress<T: Read + Write>(&mut self, tty: &mut T) -> Result<LoopSignal> {
        let key = read_key(tty)?;
        Ok(self.dispatch(key, tty))
    }

    fn dispatch<W: Write>(&self, key: Key, out: &mut W) -> LoopSignal {
        dispatcher::dispatch(key, &self.keymap, &self.registry, out)
    }

    /// Advance the loop by one transition and return the new state.
    pub fn step<T: Read + Write>(&mut self, tty: &mut T) -> Result<LoopState> {
        self.state = match self.state {
            LoopState::Rendering => {
                self.refresh_screen(tty);
                LoopState::AwaitingInput
            }
            LoopState::AwaitingInput => LoopState::Dispatching(read_key(tty)?),
            LoopState::Dispatching(key) => match self.dispatch(key, tty) {
                LoopSignal::Continue => LoopState::Rendering,
                LoopSignal::Terminate => LoopState::Terminated,
            },
            LoopState::Terminated => LoopState::Terminated,
        };
        Ok(self.state)
    }

    /// Drive the loop until a command terminates it.
    pub fn run<T: Read + Write>(&mut self, tty: &mut T) -> Result<()> {
        while self.step(tty)? != LoopState::Terminated {}
        tracing::debug!("control loop terminated");
        Ok(())
    }
}
