// Configuration module
// Internal representation of user configuration

use std::collections::HashMap;

/// Row marker drawn where no document content exists
pub const DEFAULT_PLACEHOLDER: &str = "~";
/// Raw-mode read timeout, tenths of a second
pub const DEFAULT_READ_TIMEOUT: u8 = 1;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub keybindings: HashMap<String, String>,
    pub settings: HashMap<String, ConfigValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl Config {
    /// Bind a key to a command
    pub fn bind(&mut self, key: &str, command: &str) {
        self.keybindings
            .insert(key.to_string(), command.to_string());
    }

    /// Set a configuration value
    pub fn set<V: Into<ConfigValue>>(&mut self, key: &str, value: V) {
        self.settings.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| match v {
            ConfigValue::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Marker drawn on every empty row
    pub fn placeholder(&self) -> &str {
        self.get_string("placeholder").unwrap_or(DEFAULT_PLACEHOLDER)
    }

    /// Raw-mode `VTIME` in tenths of a second, clamped to `1..=255`
    pub fn read_timeout(&self) -> u8 {
        self.get_int("read-timeout")
            .map(|t| t.clamp(1, u8::MAX as i64) as u8)
            .unwrap_or(DEFAULT_READ_TIMEOUT)
    }

    /// Skip the window-size query and go straight to the cursor probe
    pub fn probe_only(&self) -> bool {
        self.get_bool("probe-only").unwrap_or(false)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.keybindings.is_empty());
        assert!(config.settings.is_empty());
        assert_eq!(config.placeholder(), "~");
        assert_eq!(config.read_timeout(), 1);
        assert!(!config.probe_only());
    }

    #[test]
    fn test_bind_key() {
        let mut config = Config::default();
        config.bind("^Q", "quit");
        assert_eq!(config.keybindings.get("^Q"), Some(&"quit".to_string()));
    }

    #[test]
    fn test_set_get_settings() {
        let mut config = Config::default();

        config.set("bool_setting", true);
        assert_eq!(config.get_bool("bool_setting"), Some(true));

        config.set("int_setting", 42i64);
        assert_eq!(config.get_int("int_setting"), Some(42));

        config.set("string_setting", "hello");
        assert_eq!(config.get_string("string_setting"), Some("hello"));
    }

    #[test]
    fn test_type_mismatch() {
        let mut config = Config::default();
        config.set("val", 10i64);
        // Should return None if type doesn't match
        assert_eq!(config.get_bool("val"), None);
        assert_eq!(config.get_string("val"), None);
    }

    #[test]
    fn test_read_timeout_is_clamped() {
        let mut config = Config::default();
        config.set("read-timeout", 1000i64);
        assert_eq!(config.read_timeout(), 255);
        config.set("read-timeout", -5i64);
        assert_eq!(config.read_timeout(), 1);
        config.set("read-timeout", 0i64);
        assert_eq!(config.read_timeout(), 1, "VTIME 0 would make reads spin");
    }

    #[test]
    fn test_mistyped_setting_falls_back_to_default() {
        let mut config = Config::default();
        config.set("placeholder", 7i64);
        config.set("probe-only", "yes");
        assert_eq!(config.placeholder(), DEFAULT_PLACEHOLDER);
        assert!(!config.probe_only());
    }
}
