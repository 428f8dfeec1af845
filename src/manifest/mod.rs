//! Manifest Module
//!
//! The on-disk artifacts describing an exported environment: the mixed
//! `environment.yml` and the flat `requirements.txt`, plus writing,
//! detection, and parsing.

pub mod model;
pub mod reader;
pub mod writer;

pub use model::{
    Dependency, EnvironmentFile, ManifestKind, CONDA_MANIFEST, DEFAULT_EXPORT_NAME,
    DEFAULT_IMPORT_NAME, PIP_MANIFEST,
};
pub use reader::{detect_manifest, extract_python_version, load_environment_file};
pub use writer::write_manifest;
