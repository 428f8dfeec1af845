//! Dependency-Tree Introspection
//!
//! Obtains the full pip dependency graph by running pipdeptree as a module
//! of the resolved Python interpreter.

use std::error::Error;
use std::path::PathBuf;
use std::process::Command;

use log::{debug, error};

use super::roots::{parse_tree, PackageNode};

/// Capability interface for dependency-graph retrieval.
pub trait DependencyInspector {
    fn dependency_tree(&self) -> Result<Vec<PackageNode>, Box<dyn Error>>;
}

/// Runs `python -m pipdeptree --warn silence --json` and parses the output.
pub struct PipdeptreeInspector {
    python: PathBuf,
}

impl PipdeptreeInspector {
    pub fn new(python: PathBuf) -> Self {
        Self { python }
    }
}

impl DependencyInspector for PipdeptreeInspector {
    fn dependency_tree(&self) -> Result<Vec<PackageNode>, Box<dyn Error>> {
        debug!(
            "Running: {} -m pipdeptree --warn silence --json",
            self.python.display()
        );

        let output = Command::new(&self.python)
            .args(["-m", "pipdeptree", "--warn", "silence", "--json"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("pipdeptree failed: {}", stderr);
            return Err(format!(
                "pipdeptree failed (exit status: {})",
                output.status
            )
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_tree(&stdout).map_err(|e| format!("failed to parse pipdeptree output: {}", e).into())
    }
}
