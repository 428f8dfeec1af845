//! Manifest Reader
//!
//! Detects which manifest format is present in a directory, parses the
//! mixed manifest, and extracts a pinned Python version from a flat
//! requirements file.

use std::error::Error;
use std::fs;
use std::path::Path;

use log::debug;

use super::model::{EnvironmentFile, ManifestKind, CONDA_MANIFEST, PIP_MANIFEST};

/// Checks `dir` for a manifest, preferring the mixed format.
///
/// Returns `None` when neither `environment.yml` nor `requirements.txt`
/// exists.
pub fn detect_manifest(dir: &Path) -> Option<ManifestKind> {
    let yml = dir.join(CONDA_MANIFEST);
    if yml.exists() {
        debug!("Detected {}", yml.display());
        return Some(ManifestKind::Conda(yml));
    }

    let req = dir.join(PIP_MANIFEST);
    if req.exists() {
        debug!("Detected {}", req.display());
        return Some(ManifestKind::Pip(req));
    }

    None
}

/// Loads and parses a mixed manifest file.
pub fn load_environment_file(path: &Path) -> Result<EnvironmentFile, Box<dyn Error>> {
    let content = fs::read_to_string(path).map_err(|e| {
        format!(
            "failed to read manifest '{}': {}. Check that the file exists and is readable.",
            path.display(),
            e
        )
    })?;

    let env: EnvironmentFile = serde_yaml::from_str(&content)
        .map_err(|e| format!("failed to parse manifest '{}': {}", path.display(), e))?;

    Ok(env)
}

/// Scans requirements content for a pinned Python version.
///
/// The first line starting with `python==` or `python>=` (case-insensitive)
/// wins; everything after the separator is the version.
pub fn extract_python_version(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        let lower = line.to_lowercase();

        if lower.starts_with("python==") || lower.starts_with("python>=") {
            let version = if let Some((_, v)) = line.rsplit_once("==") {
                v
            } else if let Some((_, v)) = line.rsplit_once(">=") {
                v
            } else {
                continue;
            };
            return Some(version.trim().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::writer::write_manifest;
    use tempfile::tempdir;

    #[test]
    fn test_detection_prefers_mixed_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONDA_MANIFEST), "name: env\n").unwrap();
        fs::write(dir.path().join(PIP_MANIFEST), "numpy==1.26.0\n").unwrap();

        let detected = detect_manifest(dir.path()).unwrap();
        assert!(matches!(detected, ManifestKind::Conda(_)));
    }

    #[test]
    fn test_detection_falls_back_to_flat_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PIP_MANIFEST), "numpy==1.26.0\n").unwrap();

        let detected = detect_manifest(dir.path()).unwrap();
        assert!(matches!(detected, ManifestKind::Pip(_)));
    }

    #[test]
    fn test_detection_without_manifests() {
        let dir = tempdir().unwrap();
        assert!(detect_manifest(dir.path()).is_none());
    }

    #[test]
    fn test_written_manifest_name_roundtrips() {
        let dir = tempdir().unwrap();
        let conda_only = vec!["some-conda-only-tool=2.1".to_string()];
        let pip = vec!["numpy==1.26.0".to_string()];

        let kind = write_manifest(dir.path(), &conda_only, &pip).unwrap();
        let env = load_environment_file(kind.path()).unwrap();

        assert_eq!(env.name, "exported_env");
        assert_eq!(env.dependencies.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_environment_file(Path::new("/nonexistent/environment.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONDA_MANIFEST);
        fs::write(&path, "dependencies: [[[").unwrap();

        assert!(load_environment_file(&path).is_err());
    }

    #[test]
    fn test_extract_pinned_python_version() {
        let content = "numpy==1.26.0\npython==3.11\nflask==3.0.0\n";
        assert_eq!(extract_python_version(content), Some("3.11".to_string()));
    }

    #[test]
    fn test_extract_minimum_python_version() {
        let content = "python>=3.10\n";
        assert_eq!(extract_python_version(content), Some("3.10".to_string()));
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let content = "Python==3.9\n";
        assert_eq!(extract_python_version(content), Some("3.9".to_string()));
    }

    #[test]
    fn test_extract_without_python_entry() {
        let content = "numpy==1.26.0\npandas==2.1.4\n";
        assert_eq!(extract_python_version(content), None);
    }

    #[test]
    fn test_extract_ignores_other_python_prefixed_packages() {
        // python-dateutil must not be mistaken for an interpreter pin
        let content = "python-dateutil==2.8.2\n";
        assert_eq!(extract_python_version(content), None);
    }
}
