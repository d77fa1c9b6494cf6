//! Command-line argument parsing for tilde.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and methods for parsing them.

use crate::config::Config;
use std::path::PathBuf;

pub const USAGE: &str = "\
tilde - raw-mode terminal editor core

Usage: tilde [OPTIONS]

Options:
  -h, --help        Show this help message
  -V, --version     Show version
  -l, --log FILE    Write debug logs to FILE (or set TILDE_LOG_FILE)
  -p, --probe       Size the screen with the cursor-report probe only

Keys:
  Ctrl-Q            Quit";

/// Command-line interface configuration.
#[derive(Debug, Default, PartialEq)]
pub struct Cli {
    /// Print usage and exit
    pub help: bool,

    /// Print version and exit
    pub version: bool,

    /// Log file path
    pub log_file: Option<PathBuf>,

    /// Skip the window-size query
    pub probe: bool,
}

impl Cli {
    /// Parse the process arguments.
    pub fn parse() -> Result<Self, String> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments (program name already stripped).
    ///
    /// Returns an error for unknown flags, missing values and positional
    /// arguments; this editor core does not open files.
    pub fn parse_from<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => cli.help = true,
                "-V" | "--version" => cli.version = true,
                "-p" | "--probe" => cli.probe = true,
                "-l" | "--log" => {
                    if let Some(path) = args.next() {
                        cli.log_file = Some(PathBuf::from(path));
                    } else {
                        return Err("--log requires a value".into());
                    }
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown flag: {}. Use --help for usage.", arg));
                }
                arg => {
                    return Err(format!(
                        "Unexpected argument: {}. File loading is not supported.",
                        arg
                    ));
                }
            }
        }

        Ok(cli)
    }

    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        if self.probe {
            config.set("probe-only", true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, String> {
        Cli::parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Cli::default());
    }

    #[test]
    fn test_flags() {
        let cli = parse(&["-p", "--log", "/tmp/t.log"]).unwrap();
        assert!(cli.probe);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/t.log")));
        assert!(parse(&["--help"]).unwrap().help);
        assert!(parse(&["-V"]).unwrap().version);
    }

    #[test]
    fn test_log_requires_value() {
        assert_eq!(parse(&["-l"]).unwrap_err(), "--log requires a value");
    }

    #[test]
    fn test_rejects_unknown_and_positional() {
        assert!(parse(&["--gui"]).unwrap_err().starts_with("Unknown flag: --gui"));
        assert!(parse(&["notes.txt"]).unwrap_err().starts_with("Unexpected argument"));
    }

    #[test]
    fn test_probe_overrides_config() {
        let mut config = Config::default();
        parse(&["--probe"]).unwrap().apply_to_config(&mut config);
        assert!(config.probe_only());
    }
}
