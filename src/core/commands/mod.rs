//! Command implementations for the editor
//!
//! - **control**: Application control (quit)
//!
//! All commands implement the [`Command`](crate::core::command::Command) trait.

/// Application control
pub mod control;

use crate::core::command::CommandRegistry;

/// Register every built-in command under its binding name.
pub fn register_all(registry: &mut CommandRegistry) {
    use self::control::*;

    registry.insert("quit", Box::new(Quit));
}

/// Registry pre-populated with every built-in command.
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_all(&mut registry);
    registry
}
