use super::types::CatalogEntry;
use std::collections::HashMap;
use std::path::Path;

/// Failure while reading or writing the catalog snapshot.
///
/// A load failure is fatal at startup: without a catalog no book id can be
/// resolved, so the service refuses to start.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The immutable book index: book id -> catalog entry.
///
/// Constructed exactly once per process by [`Catalog::load`], before the
/// service accepts requests, and shared read-only afterwards. Keys are
/// unique; insertion order is irrelevant.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Deserializes the catalog from the JSON snapshot at `path`.
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let raw = std::fs::read(path)?;
        let entries: HashMap<String, CatalogEntry> = serde_json::from_slice(&raw)?;
        tracing::info!("Loaded catalog with {} entries", entries.len());
        Ok(Catalog { entries })
    }

    /// Writes the catalog back out as a JSON snapshot.
    ///
    /// Administrative operation for the offline catalog builder; the serving
    /// process never calls this.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let raw = serde_json::to_vec_pretty(&self.entries)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    pub fn from_entries(entries: HashMap<String, CatalogEntry>) -> Catalog {
        Catalog { entries }
    }

    pub fn get(&self, book_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(book_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (book id, entry) pairs, for the index listing.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CatalogEntry)> {
        self.entries.iter()
    }
}
