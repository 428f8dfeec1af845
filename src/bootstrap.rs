//! Required-Module Bootstrap
//!
//! The export workflow needs pipdeptree inside the inspected Python
//! environment. When a required module cannot be imported, the user is
//! asked for consent and the matching distribution is installed via pip.
//! Refusal is fatal with an actionable message naming the mapping entry to
//! add when the import name differs from the distribution name.

use std::error::Error;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info, warn};

use crate::environment::ModuleMap;
use crate::prompt::Prompter;

/// Checks whether `module` can be imported by the given interpreter.
fn module_importable(python: &Path, module: &str) -> Result<bool, Box<dyn Error>> {
    let status = Command::new(python)
        .arg("-c")
        .arg(format!("import {}", module))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    Ok(status.success())
}

fn refusal_message(module: &str, dist: &str) -> String {
    format!(
        "the module '{}' is required. If its import name differs from the PyPI \
         package name, add an entry to module_map.json, for example:\n    \
         \"{}\": \"{}\"",
        module, module, dist
    )
}

/// Ensures `module` is importable, installing its distribution on consent.
///
/// # Errors
///
/// Fails when the user declines, when pip exits non-zero, or when the
/// interpreter cannot be spawned. Blocking and interactive; not suited to
/// unattended invocation with a terminal prompter.
pub fn ensure_module(
    python: &Path,
    module: &str,
    map: &ModuleMap,
    prompter: &dyn Prompter,
) -> Result<(), Box<dyn Error>> {
    if module_importable(python, module)? {
        debug!("Module '{}' is already importable", module);
        return Ok(());
    }

    let dist = map.resolve(module);
    warn!("The module '{}' is not installed", module);

    let consent = prompter.confirm(&format!("Install the package '{}' now?", dist))?;
    if !consent {
        return Err(refusal_message(module, &dist).into());
    }

    info!("Installing {}...", dist);
    let status = Command::new(python)
        .args(["-m", "pip", "install"])
        .arg(&dist)
        .status()?;

    if !status.success() {
        return Err(format!(
            "failed to install '{}' (pip exit status: {})",
            dist, status
        )
        .into());
    }

    info!("{} installed successfully", dist);
    Ok(())
}
