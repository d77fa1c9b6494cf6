use std::collections::HashMap;
use std::io::Write;

use crate::config::Config;
use crate::core::command::CommandRegistry;
use crate::core::input::Key;

/// What the control loop does after a key has been dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    /// Render again and wait for the next key
    Continue,
    /// Leave the loop; the session is torn down next
    Terminate,
}

/// Open dispatch table from raw key values to command names
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<Key, String>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to the command registered as `command`
    pub fn bind(&mut self, key: Key, command: &str) {
        self.bindings.insert(key, command.to_string());
    }

    /// Build the table from configured bindings like `"^Q" -> "quit"`.
    ///
    /// Bindings whose key notation does not parse, or whose command is not in
    /// `registry`, are skipped with a warning. Bindings are applied in notation
    /// order; when two notations name the same key, the first one keeps it.
    pub fn from_config(config: &Config, registry: &CommandRegistry) -> Self {
        let mut bindings: Vec<_> = config.keybindings.iter().collect();
        bindings.sort();

        let mut keymap = Self::new();
        for (notation, command) in bindings {
            let key = match notation.parse::<Key>() {
                Ok(key) => key,
                Err(e) => {
                    tracing::warn!("ignoring binding for {}: {}", command, e);
                    continue;
                }
            };
            if !registry.contains_key(command.as_str()) {
                tracing::warn!("ignoring binding {} -> unknown command {}", notation, command);
                continue;
            }
            if let Some(bound) = keymap.lookup(key) {
                if bound != command.as_str() {
                    tracing::warn!(
                        "ignoring binding {} -> {}: {} is already bound to {}",
                        notation,
                        command,
                        key,
                        bound
                    );
                }
                continue;
            }
            keymap.bind(key, command);
        }
        keymap
    }

    pub fn lookup(&self, key: Key) -> Option<&str> {
        self.bindings.get(&key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

/// Run whatever `key` is bound to.
///
/// Unbound keys are a no-op that keeps the loop going: there is no document
/// to insert into yet.
pub fn dispatch(
    key: Key,
    keymap: &Keymap,
    registry: &CommandRegistry,
    out: &mut dyn Write,
) -> LoopSignal {
    let Some(name) = keymap.lookup(key) else {
        tracing::trace!(%key, "unbound key");
        return LoopSignal::Continue;
    };

    match registry.get(name) {
        Some(command) => {
            tracing::debug!(%key, command = name, "dispatch");
            command.execute(out)
        }
        None => {
            tracing::warn!("command not found in registry: {}", name);
            LoopSignal::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::Command;
    use crate::core::commands::builtin_registry;

    fn quit_keymap() -> Keymap {
        let mut keymap = Keymap::new();
        keymap.bind(Key::ctrl(b'q'), "quit");
        keymap
    }

    #[test]
    fn test_ctrl_q_terminates() {
        let registry = builtin_registry();
        let mut out = Vec::new();
        let signal = dispatch(Key(17), &quit_keymap(), &registry, &mut out);
        assert_eq!(signal, LoopSignal::Terminate);
        assert_eq!(out, b"\x1b[2J\x1b[H");
    }

    #[test]
    fn test_printable_key_continues_silently() {
        let registry = builtin_registry();
        let mut out = Vec::new();
        let signal = dispatch(Key(b'a'), &quit_keymap(), &registry, &mut out);
        assert_eq!(signal, LoopSignal::Continue);
        assert!(out.is_empty());
    }

    #[test]
    fn test_binding_to_missing_command_continues() {
        let mut keymap = Keymap::new();
        keymap.bind(Key(b'z'), "no-such-command");
        let mut out = Vec::new();
        let signal = dispatch(Key(b'z'), &keymap, &builtin_registry(), &mut out);
        assert_eq!(signal, LoopSignal::Continue);
    }

    #[test]
    fn test_from_config_skips_bad_bindings() {
        let mut config = Config::default();
        config.bind("^Q", "quit");
        config.bind("^X^C", "quit");
        config.bind("^W", "unknown-command");

        let keymap = Keymap::from_config(&config, &builtin_registry());
        assert_eq!(keymap.len(), 1);
        assert_eq!(keymap.lookup(Key::ctrl(b'q')), Some("quit"));
    }

    #[test]
    fn test_from_config_conflicting_notations_first_wins() {
        struct Stay;
        impl Command for Stay {
            fn execute(&self, _out: &mut dyn Write) -> LoopSignal {
                LoopSignal::Continue
            }
        }

        let mut registry = builtin_registry();
        registry.insert("stay", Box::new(Stay));

        // Fresh maps hash in a different order each time.
        for _ in 0..8 {
            let mut config = Config::default();
            config.bind("^Q", "quit");
            config.bind("C-q", "stay");
            config.bind("^q", "quit");

            let keymap = Keymap::from_config(&config, &registry);
            assert_eq!(keymap.len(), 1);
            assert_eq!(keymap.lookup(Key::ctrl(b'q')), Some("stay"));
        }
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut keymap = quit_keymap();
        keymap.bind(Key::ctrl(b'q'), "other");
        assert_eq!(keymap.lookup(Key(0x11)), Some("other"));
    }
}
