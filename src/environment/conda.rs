//! Conda Executable Location and Invocation
//!
//! Finds the conda executable across common installation layouts and wraps
//! the subcommands the export/import workflows need.
//!
//! # Executable Resolution Priority
//!
//! The conda binary is resolved in the following order:
//! 1. System PATH
//! 2. `Scripts\conda.exe` beneath the active environment prefix (Windows)
//! 3. `bin/conda` beneath the active environment prefix (Linux/macOS)

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, error, info};
use serde::Deserialize;
use thiserror::Error;

/// Raised when no conda executable could be located.
///
/// The message enumerates every location that was checked so a broken
/// installation can be diagnosed from the error alone.
#[derive(Debug, Error)]
#[error(
    "could not find the conda executable\nsearched locations:\n{searched}\n\
     Make sure Miniconda/Anaconda is installed and conda is available on PATH"
)]
pub struct CondaNotFound {
    searched: String,
}

impl CondaNotFound {
    fn new(locations: &[String]) -> Self {
        let searched = locations
            .iter()
            .map(|l| format!("  - {}", l))
            .collect::<Vec<_>>()
            .join("\n");
        Self { searched }
    }
}

/// Looks up an executable name on the system PATH.
fn path_lookup(name: &str) -> Option<PathBuf> {
    let finder = if cfg!(windows) { "where" } else { "which" };
    let output = Command::new(finder).arg(name).output().ok()?;

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let first = stdout.lines().next()?.trim();
        if !first.is_empty() {
            return Some(PathBuf::from(first));
        }
    }

    None
}

/// Locates the conda executable.
///
/// Checks the system PATH first, then the platform-specific subdirectory
/// beneath the active environment prefix (`$CONDA_PREFIX`). A single
/// filesystem/environment probe with no retries.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Absolute path to the conda executable
/// * `Err(CondaNotFound)` - No executable found; lists every searched location
pub fn locate_conda() -> Result<PathBuf, CondaNotFound> {
    info!("Searching for the conda executable...");

    let mut searched = Vec::new();

    if let Some(path) = path_lookup("conda") {
        info!("Found conda on PATH: {}", path.display());
        return Ok(path);
    }
    searched.push("system PATH".to_string());

    match env::var("CONDA_PREFIX") {
        Ok(prefix) => {
            let scripts = Path::new(&prefix).join("Scripts").join("conda.exe");
            if scripts.exists() {
                info!("Found conda in Scripts directory: {}", scripts.display());
                return Ok(scripts);
            }
            searched.push(scripts.display().to_string());

            let bin = Path::new(&prefix).join("bin").join("conda");
            if bin.exists() {
                info!("Found conda in bin directory: {}", bin.display());
                return Ok(bin);
            }
            searched.push(bin.display().to_string());
        }
        Err(_) => searched.push("$CONDA_PREFIX (not set)".to_string()),
    }

    Err(CondaNotFound::new(&searched))
}

/// Resolves the Python interpreter that module invocations (pipdeptree, pip)
/// run under.
///
/// Prefers the interpreter of the active conda environment, then `python3`
/// and `python` on PATH. Falls back to the bare `python3` name and lets the
/// subsequent spawn report the failure.
pub fn python_executable() -> PathBuf {
    if let Ok(prefix) = env::var("CONDA_PREFIX") {
        let candidate = if cfg!(windows) {
            Path::new(&prefix).join("python.exe")
        } else {
            Path::new(&prefix).join("bin").join("python")
        };

        if candidate.exists() {
            debug!("Using environment interpreter: {}", candidate.display());
            return candidate;
        }
    }

    if let Some(path) = path_lookup("python3") {
        return path;
    }
    if let Some(path) = path_lookup("python") {
        return path;
    }

    PathBuf::from("python3")
}

/// Narrow interface over the environment manager, as consumed by the
/// export/import workflows. Allows the workflows to be exercised with fakes.
pub trait EnvironmentManager {
    /// Lists the explicitly installed package specs (`name` or `name=version`)
    /// of the active environment, without transitive dependencies.
    fn explicit_packages(&self) -> Result<Vec<String>, Box<dyn std::error::Error>>;

    /// Creates an environment named `env_name` from a manifest file,
    /// delegating all resolution and installation to conda.
    fn create_from_file(&self, manifest: &Path, env_name: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Creates a bare environment with the given Python spec
    /// (`python` or `python=3.11`).
    fn create_env(&self, env_name: &str, python_spec: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Runs `pip install -r <requirements>` inside the named environment.
    fn run_pip_install(&self, env_name: &str, requirements: &Path) -> Result<(), Box<dyn std::error::Error>>;

    /// Reports the directories where conda stores environments.
    fn envs_dirs(&self) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>;
}

/// Conda subprocess client.
///
/// Each method is a single, synchronous subprocess invocation. Creation and
/// install commands stream their output to the terminal so conda's own
/// progress reporting stays visible; query commands capture stdout.
pub struct CondaClient {
    exe: PathBuf,
}

impl CondaClient {
    pub fn new(exe: PathBuf) -> Self {
        Self { exe }
    }

    /// Path of the wrapped conda executable.
    pub fn executable(&self) -> &Path {
        &self.exe
    }

    fn run_streaming(&self, args: &[&str], what: &str) -> Result<(), Box<dyn std::error::Error>> {
        debug!("Running: conda {}", args.join(" "));

        let status = Command::new(&self.exe).args(args).status()?;
        if status.success() {
            Ok(())
        } else {
            error!("conda exited with {} while {}", status, what);
            Err(format!("conda failed while {} (exit status: {})", what, status).into())
        }
    }

    fn run_captured(&self, args: &[&str], what: &str) -> Result<String, Box<dyn std::error::Error>> {
        debug!("Running: conda {}", args.join(" "));

        let output = Command::new(&self.exe).args(args).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("conda failed while {}: {}", what, stderr);
            return Err(
                format!("conda failed while {} (exit status: {})", what, output.status).into(),
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// JSON shape of `conda env export --from-history --json`.
#[derive(Deserialize)]
struct HistoryExport {
    #[serde(default)]
    dependencies: Vec<serde_json::Value>,
}

/// JSON shape of `conda info --json` (only the fields we read).
#[derive(Deserialize)]
struct CondaInfo {
    #[serde(default)]
    envs_dirs: Vec<PathBuf>,
}

/// Extracts the plain string entries from a history export document.
/// Structured entries (e.g. a nested pip block) are not part of the
/// explicit conda set and are skipped.
fn parse_explicit_packages(json: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let export: HistoryExport = serde_json::from_str(json)
        .map_err(|e| format!("failed to parse conda history export: {}", e))?;

    Ok(export
        .dependencies
        .into_iter()
        .filter_map(|dep| match dep {
            serde_json::Value::String(spec) => Some(spec),
            _ => None,
        })
        .collect())
}

fn parse_envs_dirs(json: &str) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let info: CondaInfo = serde_json::from_str(json)
        .map_err(|e| format!("failed to parse conda info output: {}", e))?;
    Ok(info.envs_dirs)
}

impl EnvironmentManager for CondaClient {
    fn explicit_packages(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let stdout = self.run_captured(
            &["env", "export", "--from-history", "--json"],
            "exporting the environment history",
        )?;
        parse_explicit_packages(&stdout)
    }

    fn create_from_file(&self, manifest: &Path, env_name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let manifest = manifest.to_string_lossy();
        self.run_streaming(
            &["env", "create", "-f", &manifest, "-n", env_name],
            "creating the environment from the manifest",
        )
    }

    fn create_env(&self, env_name: &str, python_spec: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.run_streaming(
            &["create", "-y", "-n", env_name, python_spec],
            "creating the environment",
        )
    }

    fn run_pip_install(&self, env_name: &str, requirements: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let requirements = requirements.to_string_lossy();
        self.run_streaming(
            &["run", "-n", env_name, "pip", "install", "-r", &requirements],
            "installing pip packages into the environment",
        )
    }

    fn envs_dirs(&self) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        let stdout = self.run_captured(&["info", "--json"], "querying conda info")?;
        parse_envs_dirs(&stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_searched_locations() {
        let err = CondaNotFound::new(&[
            "system PATH".to_string(),
            "/opt/conda/bin/conda".to_string(),
        ]);

        let message = err.to_string();
        assert!(message.contains("system PATH"));
        assert!(message.contains("/opt/conda/bin/conda"));
        assert!(message.contains("Miniconda/Anaconda"));
    }

    #[test]
    fn test_parse_explicit_packages() {
        let json = r#"{
            "name": "base",
            "channels": ["defaults"],
            "dependencies": ["python=3.11", "numpy=1.26.0", "pip"]
        }"#;

        let packages = parse_explicit_packages(json).unwrap();
        assert_eq!(packages, vec!["python=3.11", "numpy=1.26.0", "pip"]);
    }

    #[test]
    fn test_parse_explicit_packages_skips_structured_entries() {
        let json = r#"{
            "dependencies": ["numpy=1.26.0", {"pip": ["requests==2.31.0"]}]
        }"#;

        let packages = parse_explicit_packages(json).unwrap();
        assert_eq!(packages, vec!["numpy=1.26.0"]);
    }

    #[test]
    fn test_parse_explicit_packages_missing_dependencies() {
        let packages = parse_explicit_packages(r#"{"name": "base"}"#).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_parse_explicit_packages_invalid_json() {
        assert!(parse_explicit_packages("not json").is_err());
    }

    #[test]
    fn test_parse_envs_dirs() {
        let json = r#"{"envs_dirs": ["/home/user/miniconda3/envs"], "platform": "linux-64"}"#;

        let dirs = parse_envs_dirs(json).unwrap();
        assert_eq!(dirs, vec![PathBuf::from("/home/user/miniconda3/envs")]);
    }

    #[test]
    fn test_python_executable_is_never_empty() {
        let python = python_executable();
        assert!(!python.as_os_str().is_empty());
    }
}
