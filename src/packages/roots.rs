//! Pip Root-Package Resolution
//!
//! A root package is one the user installed directly, i.e. a package whose
//! key never appears in any other package's dependency list. Roots are
//! computed by a single set-difference over the flat dependency graph
//! reported by pipdeptree; cycles need no special handling because only set
//! membership is consulted, never traversal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One entry of the pipdeptree JSON output.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PackageNode {
    pub package: PackageInfo,

    /// Packages this one directly requires, referenced by key.
    #[serde(default)]
    pub dependencies: Vec<DependencyRef>,
}

/// Identity of an installed package.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PackageInfo {
    /// Canonical lowercase key (e.g. `scikit-learn`).
    pub key: String,

    /// Display name as the distribution declares it.
    #[serde(default)]
    pub package_name: String,

    pub installed_version: String,
}

/// Reference to a required package inside a dependency list.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DependencyRef {
    pub key: String,
}

/// Computes the root packages of a dependency graph.
///
/// Returns `key==installed_version` strings in the graph's original order,
/// one per package whose key is absent from the union of all dependency
/// lists.
pub fn resolve_roots(tree: &[PackageNode]) -> Vec<String> {
    let depended_upon: HashSet<&str> = tree
        .iter()
        .flat_map(|node| node.dependencies.iter().map(|dep| dep.key.as_str()))
        .collect();

    tree.iter()
        .filter(|node| !depended_upon.contains(node.package.key.as_str()))
        .map(|node| {
            format!(
                "{}=={}",
                node.package.key, node.package.installed_version
            )
        })
        .collect()
}

/// Parses pipdeptree's `--json` output.
pub fn parse_tree(json: &str) -> Result<Vec<PackageNode>, serde_json::Error> {
    serde_json::from_str(json)
}
