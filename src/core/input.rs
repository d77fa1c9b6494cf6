use std::fmt;
use std::str::FromStr;

/// Mask applied to a letter to get its control-key code (`Ctrl-Q` is `0x11`).
const CTRL_MASK: u8 = 0x1f;
/// DEL, spelled `^?` in binding notation
const DEL: u8 = 0x7f;

/// A single input unit read from the terminal: one byte, no modifiers, no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub u8);

impl Key {
    /// The key produced by holding Ctrl with `c`.
    ///
    /// The upper three bits are masked off, so `ctrl(b'q')` and `ctrl(b'Q')`
    /// are the same key.
    pub const fn ctrl(c: u8) -> Self {
        Key(c & CTRL_MASK)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0x1b => write!(f, "ESC"),
            DEL => write!(f, "DEL"),
            b if b < 0x20 => write!(f, "^{}", (b | 0x40) as char),
            b if b.is_ascii() => write!(f, "{}", b as char),
            b => write!(f, "\\x{:02x}", b),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    /// Parse binding notation: `^q`, `^Q`, `C-q`, `^?` or a single ASCII character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ctrl_target = s
            .strip_prefix('^')
            .or_else(|| s.strip_prefix("C-"))
            .filter(|rest| rest.len() == 1);

        if let Some(rest) = ctrl_target {
            return match rest.as_bytes()[0] {
                b'?' => Ok(Key(DEL)),
                c if c.is_ascii_graphic() => Ok(Key::ctrl(c)),
                _ => Err(format!("Invalid control key: {}", s)),
            };
        }

        match s.as_bytes() {
            [b] if b.is_ascii() => Ok(Key(*b)),
            _ => Err(format!("Unknown key: {}", s)),
        }
    }
}
