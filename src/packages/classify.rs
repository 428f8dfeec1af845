//! Explicit-Package Classification
//!
//! Partitions the explicitly installed conda specs into packages available
//! on the public index (rewritten to pip's `name==version` convention) and
//! conda-only packages (kept verbatim for the environment manifest).

use log::debug;

use crate::index::PackageIndex;

/// Result of classifying the explicit package set.
///
/// The two lists are disjoint and together cover every input spec, each in
/// its original order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Classified {
    /// Index-available packages, in pip `name==version` form.
    pub pip: Vec<String>,
    /// Packages only installable through conda, in their original spec form.
    pub conda_only: Vec<String>,
}

/// Splits a conda spec into its name and the remainder after the first `=`.
///
/// Handles `name`, `name=version`, and `name=version=build`.
pub fn split_spec(spec: &str) -> (&str, Option<&str>) {
    match spec.split_once('=') {
        Some((name, rest)) => (name, Some(rest)),
        None => (spec, None),
    }
}

/// Classifies explicit conda specs by index availability.
///
/// For each spec the index is queried with the package name alone. A hit
/// rewrites the first `=` separator to pip's `==`; a miss keeps the spec
/// unmodified in the conda-only list.
pub fn classify_explicit(specs: &[String], index: &dyn PackageIndex) -> Classified {
    let mut classified = Classified::default();

    for spec in specs {
        let (name, _version) = split_spec(spec);

        if index.exists(name) {
            debug!("'{}' found on the index", name);
            classified.pip.push(spec.replacen('=', "==", 1));
        } else {
            debug!("'{}' not found on the index, keeping for conda", name);
            classified.conda_only.push(spec.clone());
        }
    }

    classified
}
