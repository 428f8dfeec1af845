//! Package Index Lookups
//!
//! Answers a single question: does a package of a given name exist on PyPI?
//! One GET per lookup with a short fixed timeout; any failure (timeout, DNS,
//! non-200 status) counts as "does not exist" so that uncertain packages end
//! up in the conda-only bucket rather than in a requirements file pip cannot
//! satisfy. No retries, no caching.

use std::time::Duration;

use log::debug;
use ureq::Agent;

/// Timeout for a single index lookup.
const INDEX_TIMEOUT: Duration = Duration::from_secs(5);

/// Capability interface for index existence checks, so classification can be
/// tested without network access.
pub trait PackageIndex {
    /// Whether a package with this exact name exists on the index.
    fn exists(&self, name: &str) -> bool;
}

/// PyPI-backed implementation querying the JSON metadata endpoint.
pub struct PyPiIndex {
    agent: Agent,
}

impl PyPiIndex {
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(INDEX_TIMEOUT))
            .build();
        Self {
            agent: config.new_agent(),
        }
    }

    fn url(name: &str) -> String {
        format!("https://pypi.org/pypi/{}/json", name)
    }
}

impl Default for PyPiIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageIndex for PyPiIndex {
    fn exists(&self, name: &str) -> bool {
        let url = Self::url(name);
        debug!("GET {}", url);

        match self.agent.get(&url).call() {
            Ok(resp) => resp.status().as_u16() == 200,
            Err(e) => {
                debug!("Index lookup for '{}' failed: {}", name, e);
                false
            }
        }
    }
}
