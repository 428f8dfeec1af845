//! Environment Management Module
//!
//! Handles locating the conda installation, invoking its subcommands, and
//! the import-name to distribution-name mapping.

pub mod conda;
pub mod modmap;

pub use conda::{locate_conda, python_executable, CondaClient, CondaNotFound, EnvironmentManager};
pub use modmap::{ModuleMap, MODULE_MAP_PATH};
