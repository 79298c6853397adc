use serde::{Deserialize, Serialize};

/// A fully paginated book, immutable after construction.
///
/// `pages[i]` is the i-th page's rendered text: its words joined by single
/// ASCII spaces. Invariants: `page_count == pages.len()`, every page except
/// possibly the last holds exactly `PAGE_SIZE` words, and the page word
/// counts sum to `word_count`.
///
/// This structure is what gets bincode-serialized into the persistent store,
/// so field order is part of the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub content_type: String,
    pub word_count: usize,
    pub page_count: usize,
    pub pages: Vec<String>,
}

impl Book {
    /// Returns the requested window of page texts, or `None` when the window
    /// falls outside `0..page_count`.
    pub fn page_range(&self, first_page: usize, page_count: usize) -> Option<&[String]> {
        let end = first_page.checked_add(page_count)?;
        if first_page >= self.page_count || end > self.page_count {
            return None;
        }
        Some(&self.pages[first_page..end])
    }
}
