//! tilde - the raw-mode core of a terminal text editor
//!
//! This is the main entry point. It parses CLI arguments, sets up logging and
//! configuration, and hands the terminal to the editor loop.

use std::process::ExitCode;

use tilde::cli::{Cli, USAGE};
use tilde::{config, logging, run, user_config};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("tilde: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }
    if cli.version {
        println!("tilde {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if let Some(path) = logging::log_path(cli.log_file.as_deref()) {
        if let Err(e) = logging::init(&path) {
            eprintln!("tilde: cannot open log file {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    }

    // Load configuration
    let mut config = config::Config::default();
    user_config::configure(&mut config);

    // Apply CLI overrides
    cli.apply_to_config(&mut config);

    ExitCode::from(run::exit_status(run::run_terminal_mode(&config)))
}
