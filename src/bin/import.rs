//! conda-import CLI Entry Point
//!
//! Recreates a conda environment from a manifest produced by conda-export.
//! Takes no arguments; detects `environment.yml` (preferred) or
//! `requirements.txt` in the current directory and prompts for the
//! environment name.
//!
//! # Usage
//!
//! ```bash
//! conda-import
//! ```

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;

use condaport::environment::{locate_conda, CondaClient};
use condaport::import::import_environment;
use condaport::prompt::TerminalPrompter;
use condaport::{APP_NAME, VERSION};

/// Configures the logging system with compact formatting.
fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

fn print_banner() {
    println!();
    println!("{} v{} - environment import", APP_NAME, VERSION);
    println!();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conda = CondaClient::new(locate_conda()?);
    let prompter = TerminalPrompter;

    // A missing manifest is reported inside the workflow and ends the run
    // without failing it
    if let Some(name) = import_environment(&conda, &prompter, Path::new("."))? {
        println!();
        println!(
            "{} environment '{}' created",
            "SUCCESS".green().bold(),
            name
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    setup_logging();
    print_banner();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
