//! Export Workflow
//!
//! Collects the explicitly installed conda packages, classifies them by
//! index availability, adds the pip root packages from the dependency
//! graph, and writes exactly one manifest. Strictly sequential: one
//! subprocess or index lookup at a time.

use std::error::Error;
use std::path::Path;

use log::info;

use crate::environment::EnvironmentManager;
use crate::index::PackageIndex;
use crate::manifest::{write_manifest, ManifestKind};
use crate::packages::{classify_explicit, resolve_roots, Classified, DependencyInspector};

/// What an export run produced.
#[derive(Debug)]
pub struct ExportReport {
    /// The manifest that was written.
    pub manifest: ManifestKind,
    /// Index-available packages plus pip roots, in order.
    pub pip_packages: Vec<String>,
    /// Conda-only packages, in order.
    pub conda_only: Vec<String>,
}

/// Runs the export workflow against the given capabilities, writing the
/// manifest into `dir`.
pub fn export_environment(
    manager: &dyn EnvironmentManager,
    index: &dyn PackageIndex,
    inspector: &dyn DependencyInspector,
    dir: &Path,
) -> Result<ExportReport, Box<dyn Error>> {
    info!("Exporting directly installed packages (without dependencies)...");

    let explicit = manager.explicit_packages()?;
    info!(
        "Checking {} explicit conda packages against the package index...",
        explicit.len()
    );

    let Classified {
        mut pip,
        conda_only,
    } = classify_explicit(&explicit, index);

    info!("Determining directly installed pip packages...");
    let tree = inspector.dependency_tree()?;
    let roots = resolve_roots(&tree);
    info!("{} pip root packages found", roots.len());
    pip.extend(roots);

    if !conda_only.is_empty() {
        info!(
            "{} conda-only packages found, writing the mixed manifest",
            conda_only.len()
        );
    } else {
        info!("All packages are index-available, writing the flat manifest");
    }

    let manifest = write_manifest(dir, &conda_only, &pip)?;

    Ok(ExportReport {
        manifest,
        pip_packages: pip,
        conda_only,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::roots::{DependencyRef, PackageInfo, PackageNode};
    use std::collections::HashSet;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    struct FakeManager {
        explicit: Vec<String>,
    }

    impl EnvironmentManager for FakeManager {
        fn explicit_packages(&self) -> Result<Vec<String>, Box<dyn Error>> {
            Ok(self.explicit.clone())
        }

        fn create_from_file(&self, _: &Path, _: &str) -> Result<(), Box<dyn Error>> {
            unreachable!("export never creates environments")
        }

        fn create_env(&self, _: &str, _: &str) -> Result<(), Box<dyn Error>> {
            unreachable!("export never creates environments")
        }

        fn run_pip_install(&self, _: &str, _: &Path) -> Result<(), Box<dyn Error>> {
            unreachable!("export never installs packages")
        }

        fn envs_dirs(&self) -> Result<Vec<PathBuf>, Box<dyn Error>> {
            Ok(Vec::new())
        }
    }

    struct FakeIndex {
        known: HashSet<String>,
    }

    impl PackageIndex for FakeIndex {
        fn exists(&self, name: &str) -> bool {
            self.known.contains(name)
        }
    }

    struct FakeInspector {
        tree: Vec<PackageNode>,
    }

    impl DependencyInspector for FakeInspector {
        fn dependency_tree(&self) -> Result<Vec<PackageNode>, Box<dyn Error>> {
            Ok(self.tree.clone())
        }
    }

    fn node(key: &str, version: &str, deps: &[&str]) -> PackageNode {
        PackageNode {
            package: PackageInfo {
                key: key.to_string(),
                package_name: key.to_string(),
                installed_version: version.to_string(),
            },
            dependencies: deps
                .iter()
                .map(|d| DependencyRef { key: d.to_string() })
                .collect(),
        }
    }

    fn index_with(names: &[&str]) -> FakeIndex {
        FakeIndex {
            known: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_mixed_export_scenario() {
        let dir = tempdir().unwrap();
        let manager = FakeManager {
            explicit: vec![
                "numpy=1.26.0".to_string(),
                "some-conda-only-tool=2.1".to_string(),
            ],
        };
        let index = index_with(&["numpy"]);
        let inspector = FakeInspector {
            tree: vec![
                node("requests", "2.31.0", &["urllib3"]),
                node("urllib3", "2.1.0", &[]),
            ],
        };

        let report = export_environment(&manager, &index, &inspector, dir.path()).unwrap();

        assert_eq!(report.conda_only, vec!["some-conda-only-tool=2.1"]);
        assert_eq!(report.pip_packages, vec!["numpy==1.26.0", "requests==2.31.0"]);

        let content = fs::read_to_string(report.manifest.path()).unwrap();
        assert!(content.contains("some-conda-only-tool=2.1"));
        assert!(content.contains("numpy==1.26.0"));
        assert!(content.contains("requests==2.31.0"));
    }

    #[test]
    fn test_flat_export_when_everything_is_on_the_index() {
        let dir = tempdir().unwrap();
        let manager = FakeManager {
            explicit: vec!["numpy=1.26.0".to_string()],
        };
        let index = index_with(&["numpy"]);
        let inspector = FakeInspector {
            tree: vec![node("flask", "3.0.0", &[])],
        };

        let report = export_environment(&manager, &index, &inspector, dir.path()).unwrap();

        assert!(matches!(report.manifest, ManifestKind::Pip(_)));
        assert_eq!(
            fs::read_to_string(report.manifest.path()).unwrap(),
            "numpy==1.26.0\nflask==3.0.0\n"
        );
    }

    #[test]
    fn test_export_with_empty_environment() {
        let dir = tempdir().unwrap();
        let manager = FakeManager { explicit: vec![] };
        let index = index_with(&[]);
        let inspector = FakeInspector { tree: vec![] };

        let report = export_environment(&manager, &index, &inspector, dir.path()).unwrap();

        assert!(matches!(report.manifest, ManifestKind::Pip(_)));
        assert!(report.pip_packages.is_empty());
        assert!(report.conda_only.is_empty());
    }
}
