//! Manifest Data Model
//!
//! Two on-disk formats describe an exported environment:
//!
//! - `environment.yml` when conda-only packages are present, with pip
//!   packages nested under a single `pip:` entry:
//!
//! ```yaml
//! name: exported_env
//! dependencies:
//! - some-conda-only-tool=2.1
//! - pip:
//!   - numpy==1.26.0
//! ```
//!
//! - `requirements.txt` when every package is index-available: one
//!   `name==version` line per package.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filename of the mixed (conda + pip) manifest.
pub const CONDA_MANIFEST: &str = "environment.yml";

/// Filename of the flat pip manifest.
pub const PIP_MANIFEST: &str = "requirements.txt";

/// Environment name written into exported manifests.
pub const DEFAULT_EXPORT_NAME: &str = "exported_env";

/// Environment name used on import when none is declared or entered.
pub const DEFAULT_IMPORT_NAME: &str = "imported_env";

/// Which manifest format a run produced or detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestKind {
    /// Mixed manifest (`environment.yml`).
    Conda(PathBuf),
    /// Flat pip manifest (`requirements.txt`).
    Pip(PathBuf),
}

impl ManifestKind {
    pub fn path(&self) -> &PathBuf {
        match self {
            ManifestKind::Conda(path) | ManifestKind::Pip(path) => path,
        }
    }
}

/// Parsed `environment.yml` document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnvironmentFile {
    /// Declared environment name.
    #[serde(default = "default_import_name")]
    pub name: String,

    /// Conda specs in order, followed by at most one nested pip entry.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

fn default_import_name() -> String {
    DEFAULT_IMPORT_NAME.to_string()
}

/// A single `dependencies:` entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Dependency {
    /// Bare conda spec (`name=version`).
    Spec(String),
    /// Nested pip package list.
    Pip { pip: Vec<String> },
}
