//! Manifest Writer
//!
//! Serializes the classified package sets into exactly one of the two
//! manifest formats. The choice is made by content, never by flag: any
//! conda-only package forces the mixed `environment.yml`; otherwise the
//! flat `requirements.txt` is written.

use std::error::Error;
use std::fs;
use std::path::Path;

use log::info;

use super::model::{
    Dependency, EnvironmentFile, ManifestKind, CONDA_MANIFEST, DEFAULT_EXPORT_NAME, PIP_MANIFEST,
};

/// Writes the manifest for the given package partition into `dir`.
///
/// # Arguments
///
/// * `dir` - Directory the manifest file is created in
/// * `conda_only` - Conda specs not available on the index, in order
/// * `pip_packages` - Index-available packages plus pip roots, in order
pub fn write_manifest(
    dir: &Path,
    conda_only: &[String],
    pip_packages: &[String],
) -> Result<ManifestKind, Box<dyn Error>> {
    if !conda_only.is_empty() {
        let mut dependencies: Vec<Dependency> =
            conda_only.iter().cloned().map(Dependency::Spec).collect();

        if !pip_packages.is_empty() {
            dependencies.push(Dependency::Pip {
                pip: pip_packages.to_vec(),
            });
        }

        let env = EnvironmentFile {
            name: DEFAULT_EXPORT_NAME.to_string(),
            dependencies,
        };

        let path = dir.join(CONDA_MANIFEST);
        fs::write(&path, serde_yaml::to_string(&env)?)?;
        info!("{} created: {}", CONDA_MANIFEST, path.display());

        Ok(ManifestKind::Conda(path))
    } else {
        let path = dir.join(PIP_MANIFEST);
        let mut content = pip_packages.join("\n");
        content.push('\n');
        fs::write(&path, content)?;
        info!("{} created: {}", PIP_MANIFEST, path.display());

        Ok(ManifestKind::Pip(path))
    }
}
