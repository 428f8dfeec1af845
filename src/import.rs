//! Import Workflow
//!
//! Detects which manifest is present in the working directory and drives
//! conda to materialize a matching environment. The mixed manifest is
//! handed to `conda env create` wholesale; the flat manifest gets a bare
//! environment (honoring a pinned Python version) followed by a pip install
//! run inside it.

use std::error::Error;
use std::fs;
use std::path::Path;

use log::{debug, error, info};

use crate::environment::EnvironmentManager;
use crate::manifest::{
    detect_manifest, extract_python_version, load_environment_file, ManifestKind,
    DEFAULT_IMPORT_NAME, PIP_MANIFEST,
};
use crate::prompt::Prompter;

/// Runs the import workflow against the given capabilities.
///
/// Returns the name of the created environment, or `None` when no manifest
/// was found in `dir`. The missing-manifest case is reported but does not
/// fail the run; this mirrors the behavior of the original tooling.
pub fn import_environment(
    manager: &dyn EnvironmentManager,
    prompter: &dyn Prompter,
    dir: &Path,
) -> Result<Option<String>, Box<dyn Error>> {
    let Some(manifest) = detect_manifest(dir) else {
        error!(
            "No environment.yml or requirements.txt found in {}",
            dir.display()
        );
        return Ok(None);
    };

    // Informational only; a failing info query must not block the import
    match manager.envs_dirs() {
        Ok(dirs) if !dirs.is_empty() => {
            info!("New environments are stored in:");
            for d in dirs {
                info!("  - {}", d.display());
            }
        }
        Ok(_) => {}
        Err(e) => debug!("Could not query conda info: {}", e),
    }

    match manifest {
        ManifestKind::Conda(path) => {
            info!("environment.yml found, importing the conda environment...");
            let env_file = load_environment_file(&path)?;
            info!("Original environment name: {}", env_file.name);

            let answer = prompter.input("New name (press Enter to keep the original)")?;
            let name = if answer.trim().is_empty() {
                info!("Keeping the original name: {}", env_file.name);
                env_file.name
            } else {
                let chosen = answer.trim().to_string();
                info!("Using the new name: {}", chosen);
                chosen
            };

            info!("Creating conda environment '{}'...", name);
            manager.create_from_file(&path, &name)?;
            Ok(Some(name))
        }
        ManifestKind::Pip(path) => {
            info!("requirements.txt found, importing a pip-based environment...");

            let answer = prompter.input(&format!(
                "Environment name (default: {})",
                DEFAULT_IMPORT_NAME
            ))?;
            let name = if answer.trim().is_empty() {
                DEFAULT_IMPORT_NAME.to_string()
            } else {
                answer.trim().to_string()
            };

            let content = fs::read_to_string(&path)?;
            let python_spec = match extract_python_version(&content) {
                Some(version) => {
                    info!("Python version {} found in {}", version, PIP_MANIFEST);
                    format!("python={}", version)
                }
                None => "python".to_string(),
            };

            info!("Creating conda environment '{}' with {}...", name, python_spec);
            manager.create_env(&name, &python_spec)?;
            manager.run_pip_install(&name, &path)?;
            Ok(Some(name))
        }
    }
}
