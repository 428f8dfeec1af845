//! Package Classification Module
//!
//! Splits the explicit conda package set by index availability and computes
//! the pip root packages from the pipdeptree dependency graph.

pub mod classify;
pub mod inspect;
pub mod roots;

pub use classify::{classify_explicit, split_spec, Classified};
pub use inspect::{DependencyInspector, PipdeptreeInspector};
pub use roots::{parse_tree, resolve_roots, PackageNode};
