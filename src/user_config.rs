// tilde Configuration
// Edit this file to customize your editor, then rebuild.

use crate::config::Config;

/// User configuration function
pub fn configure(config: &mut Config) {
    // Keybindings
    config.bind("^Q", "quit");

    // Display
    config.set("placeholder", "~");

    // Terminal
    config.set("read-timeout", 1i64); // tenths of a second per idle read
    config.set("probe-only", false); // true: always use the cursor-report probe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_quit() {
        let mut config = Config::default();
        configure(&mut config);
        assert_eq!(config.keybindings.get("^Q").map(String::as_str), Some("quit"));
        assert_eq!(config.read_timeout(), 1);
        assert_eq!(config.placeholder(), "~");
    }
}
