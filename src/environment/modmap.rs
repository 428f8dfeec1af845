//! Module-Name Mapping
//!
//! Maps Python import names to the distribution names pip installs them
//! under (e.g. `yaml` → `pyyaml`, `cv2` → `opencv-python`). The built-in
//! defaults cover the common offenders; users extend the mapping through a
//! `module_map.json` file without touching core logic.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use log::info;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Import names whose distribution name differs on PyPI.
const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    // Parsers / media
    ("yaml", "pyyaml"),
    ("bs4", "beautifulsoup4"),
    ("PIL", "pillow"),
    ("cv2", "opencv-python"),
    ("Crypto", "pycryptodome"),
    ("dateutil", "python-dateutil"),
    ("pkg_resources", "setuptools"),
    ("mpl_toolkits", "matplotlib"),
    // Data science / ML
    ("sklearn", "scikit-learn"),
    ("skimage", "scikit-image"),
    // Misc
    ("psycopg2", "psycopg2-binary"),
    ("importlib_metadata", "importlib-metadata"),
    ("fitz", "pymupdf"),
    ("socks", "pysocks"),
    ("dotenv", "python-dotenv"),
    ("sqlalchemy_schemadisplay", "sqlalchemy-schemadisplay"),
    ("win_inet_pton", "win-inet-pton"),
    ("youtube_dl", "youtube-dl"),
];

/// Lazily-initialized path to the module mapping override file.
pub static MODULE_MAP_PATH: Lazy<PathBuf> = Lazy::new(|| {
    // Priority 1: Next to the executable (packaged installs)
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let prod_path = exe_dir.join("module_map.json");
            if prod_path.exists() {
                info!("Using bundled module map: {}", prod_path.display());
                return prod_path;
            }
        }
    }

    // Priority 2: Development environment (running via `cargo run`)
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("runtime")
        .join("module_map.json");

    if dev_path.exists() {
        info!("Using development module map: {}", dev_path.display());
        return dev_path;
    }

    // Priority 3: Current working directory
    PathBuf::from("module_map.json")
});

/// Mapping from Python import name to PyPI distribution name.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModuleMap {
    map: HashMap<String, String>,
}

impl ModuleMap {
    /// Creates a mapping holding only the built-in defaults.
    pub fn new() -> Self {
        let map = DEFAULT_MAPPINGS
            .iter()
            .map(|(module, dist)| (module.to_string(), dist.to_string()))
            .collect();
        Self { map }
    }

    /// Loads the mapping: built-in defaults merged with any user overrides
    /// found at [`MODULE_MAP_PATH`]. Overrides win on conflict.
    pub fn load() -> Self {
        let mut mapping = Self::new();

        if MODULE_MAP_PATH.exists() {
            let content = fs::read_to_string(&*MODULE_MAP_PATH).unwrap_or_default();
            if let Ok(overrides) = serde_json::from_str::<HashMap<String, String>>(&content) {
                mapping.merge(overrides);
            }
        }

        mapping
    }

    /// Saves the full mapping to [`MODULE_MAP_PATH`].
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = MODULE_MAP_PATH.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.map)?;
        fs::write(&*MODULE_MAP_PATH, json)?;
        Ok(())
    }

    /// Merges override entries into the mapping.
    pub fn merge(&mut self, overrides: HashMap<String, String>) {
        self.map.extend(overrides);
    }

    /// Resolves an import name to its distribution name. Unmapped names
    /// resolve to themselves.
    pub fn resolve(&self, module: &str) -> String {
        self.map
            .get(module)
            .cloned()
            .unwrap_or_else(|| module.to_string())
    }

    /// Adds or replaces a single mapping entry.
    pub fn set(&mut self, module: impl Into<String>, dist: impl Into<String>) {
        self.map.insert(module.into(), dist.into());
    }

    /// Returns the internal map.
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.map
    }
}

impl Default for ModuleMap {
    fn default() -> Self {
        Self::new()
    }
}
