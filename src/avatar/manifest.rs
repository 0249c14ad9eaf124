//! Build-time listing of pool-mode assets per category.
//!
//! Written once by `avatarsverse-manifest`, loaded once at startup, and
//! shared read-only from then on.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::{scan_catalog, PNG_EXTENSIONS};

pub const MANIFEST_FILE_NAME: &str = "avatars.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub count: usize,
    pub files: Vec<String>,
}

impl ManifestEntry {
    pub fn new(files: Vec<String>) -> Self {
        Self {
            count: files.len(),
            files,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    categories: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn new(categories: BTreeMap<String, ManifestEntry>) -> Self {
        Self { categories }
    }

    /// Scan `root` for `.png` assets, one category per subdirectory.
    pub fn generate(root: &Path) -> Result<Self, ManifestError> {
        let catalog = scan_catalog(root, PNG_EXTENSIONS).map_err(|source| ManifestError::Io {
            path: root.to_path_buf(),
            source,
        })?;

        let categories = catalog
            .into_iter()
            .map(|(name, files)| (name, ManifestEntry::new(files)))
            .collect();

        Ok(Self { categories })
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = fs::read(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&raw).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ManifestError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, json).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Files for `category`, empty when the category is unknown.
    pub fn files(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(|entry| entry.files.as_slice())
            .unwrap_or_default()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.categories
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn total(&self) -> usize {
        self.categories.values().map(|entry| entry.count).sum()
    }
}
