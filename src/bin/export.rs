//! conda-export CLI Entry Point
//!
//! Exports the explicitly installed packages of the active conda
//! environment into `environment.yml` or `requirements.txt` in the current
//! directory. Takes no arguments; behavior is driven by the environment
//! itself and by interactive prompts.
//!
//! # Usage
//!
//! ```bash
//! conda-export
//! ```

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;

use condaport::bootstrap::ensure_module;
use condaport::environment::{locate_conda, python_executable, CondaClient, ModuleMap};
use condaport::export::export_environment;
use condaport::index::PyPiIndex;
use condaport::packages::PipdeptreeInspector;
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
    println!("{} v{} - environment export", APP_NAME, VERSION);
    println!();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conda = CondaClient::new(locate_conda()?);
    let index = PyPiIndex::new();
    let prompter = TerminalPrompter;

    let python = python_executable();
    ensure_module(&python, "pipdeptree", &ModuleMap::load(), &prompter)?;
    let inspector = PipdeptreeInspector::new(python);

    let report = export_environment(&conda, &index, &inspector, Path::new("."))?;

    let path = report.manifest.path();
    let resolved = path.canonicalize().unwrap_or_else(|_| path.clone());
    println!();
    println!("{} {}", "SUCCESS".green().bold(), resolved.display());

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
