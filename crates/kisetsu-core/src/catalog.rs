use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::KisetsuError;
use crate::models::CatalogEntry;

const BUNDLED_SNAPSHOT: &str = include_str!("../../../data/catalog.json");

/// On-disk snapshot layout: `{ "data": [ ... ] }`. Other top-level keys are
/// ignored.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    data: Vec<CatalogEntry>,
}

/// Read-only collection of catalog entries, loaded once and shared.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, KisetsuError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::from_entries(snapshot.data))
    }

    /// The snapshot compiled into the binary.
    pub fn bundled() -> Result<Self, KisetsuError> {
        Self::from_json(BUNDLED_SNAPSHOT)
            .map_err(|e| KisetsuError::Catalog(format!("bundled snapshot: {e}")))
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> Result<Self, KisetsuError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)
            .map_err(|e| KisetsuError::Catalog(format!("{}: {e}", path.display())))?;
        tracing::info!(path = %path.display(), entries = catalog.len(), "Loaded catalog snapshot");
        Ok(catalog)
    }

    /// Load `path` if given, the bundled snapshot otherwise.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, KisetsuError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
