use serde::{Deserialize, Serialize};

/// A single catalog record describing one book.
///
/// The `path` is the book's location on the mirror and is distinct from the
/// book id; it can only be resolved through the catalog. Entries are
/// immutable once the snapshot is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub language: String,
    pub path: String,
    pub content_type: String,
}
