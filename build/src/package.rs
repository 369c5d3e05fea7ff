//! Simulation package metadata.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};

/// The subset of `package.json` the build reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Repository name, also the name of its strings directory.
    pub name: String,
    /// Version string reported in build logs.
    #[serde(default)]
    pub version: String,
}

impl PackageInfo {
    /// Read `<repo_dir>/package.json`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::PackageRead`] if the file cannot be read and
    /// [`BuildError::PackageParse`] if it is not valid JSON or has no `name`.
    pub fn read(repo_dir: &Utf8Path) -> Result<Self> {
        let path = repo_dir.join("package.json");
        let contents = std::fs::read_to_string(&path).map_err(|source| BuildError::PackageRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| BuildError::PackageParse { path, source })
    }
}
