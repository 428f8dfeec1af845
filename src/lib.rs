//! Condaport - Conda Environment Export/Import
//!
//! Exports the user-intentionally-installed packages of a conda environment
//! and re-imports them elsewhere. Packages available on PyPI are separated
//! from conda-only packages, and pip root packages (installed directly, not
//! pulled in as dependencies) are separated from their dependency closure.
//!
//! # Architecture
//!
//! - [`environment`]: conda executable location, subprocess client, and the
//!   import-name to distribution-name mapping
//! - [`index`]: PyPI existence checks
//! - [`packages`]: classification by index availability and pip root
//!   resolution from the pipdeptree graph
//! - [`manifest`]: the `environment.yml`/`requirements.txt` formats
//! - [`export`] / [`import`]: the two top-level workflows, written against
//!   injected capabilities so they can be tested with fakes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use condaport::environment::{locate_conda, python_executable, CondaClient};
//! use condaport::export::export_environment;
//! use condaport::index::PyPiIndex;
//! use condaport::packages::PipdeptreeInspector;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let conda = CondaClient::new(locate_conda()?);
//!     let index = PyPiIndex::new();
//!     let inspector = PipdeptreeInspector::new(python_executable());
//!
//!     let report = export_environment(&conda, &index, &inspector, Path::new("."))?;
//!     println!("Wrote {}", report.manifest.path().display());
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod environment;
pub mod export;
pub mod import;
pub mod index;
pub mod manifest;
pub mod packages;
pub mod prompt;

// Re-export commonly used types
pub use environment::{locate_conda, CondaClient, EnvironmentManager, ModuleMap};
pub use export::{export_environment, ExportReport};
pub use import::import_environment;
pub use index::{PackageIndex, PyPiIndex};
pub use manifest::ManifestKind;
pub use prompt::{Prompter, TerminalPrompter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Condaport";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "Condaport");
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        for part in parts {
            assert!(part.parse::<u32>().is_ok(), "Version components should be numeric");
        }
    }
}
