//! Command Pattern implementation for the editor
//!
//! Key bindings name commands; the dispatcher looks the name up in a
//! [`CommandRegistry`] and executes it. New bindings (navigation, insert,
//! delete) attach by registering another `Command` and binding a key to its
//! name, without touching the dispatch mechanism.

use std::collections::HashMap;
use std::io::Write;

use crate::core::dispatcher::LoopSignal;

/// Core command trait implementing the Command Pattern
///
/// # Parameters
/// - `out`: the terminal output stream, for commands with screen side effects
///
/// # Returns
/// `LoopSignal` telling the control loop whether to keep going
pub trait Command {
    /// Execute the command
    fn execute(&self, out: &mut dyn Write) -> LoopSignal;
}

/// Named commands available to key bindings
pub type CommandRegistry = HashMap<&'static str, Box<dyn Command>>;
