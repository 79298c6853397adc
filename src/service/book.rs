use super::error::BookError;
use super::types::BookSummary;
use crate::catalog::Catalog;
use crate::ingestion::RemoteFetcher;
use crate::pagination::{paginate, Book, PAGE_SIZE};
use crate::storage::DiskStore;
use dashmap::DashMap;
use std::sync::Arc;

/// The book orchestrator, constructed once at startup and shared behind an
/// `Arc` by all request handlers.
///
/// Owns the read-only catalog and the tier-1 process cache. Concurrent
/// requests for the same cold id may both fetch and paginate; both produce
/// an identical Book, so the last writer wins without observable divergence.
pub struct BookService {
    catalog: Catalog,
    fetcher: RemoteFetcher,
    store: DiskStore,
    cache: DashMap<String, Arc<Book>>,
    page_size: usize,
}

impl BookService {
    pub fn new(catalog: Catalog, fetcher: RemoteFetcher, store: DiskStore) -> Self {
        Self::with_page_size(catalog, fetcher, store, PAGE_SIZE)
    }

    pub fn with_page_size(
        catalog: Catalog,
        fetcher: RemoteFetcher,
        store: DiskStore,
        page_size: usize,
    ) -> Self {
        Self {
            catalog,
            fetcher,
            store,
            cache: DashMap::new(),
            page_size,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolves a book id through process cache, catalog, disk store and
    /// finally the remote mirror.
    pub async fn get_book(&self, book_id: &str) -> Result<Arc<Book>, BookError> {
        if let Some(book) = self.cache.get(book_id) {
            return Ok(book.clone());
        }

        let entry = self
            .catalog
            .get(book_id)
            .ok_or_else(|| BookError::UnknownBookId(book_id.to_string()))?;

        match self.store.load(&entry.path).await {
            Ok(Some(book)) => {
                tracing::info!("Read {} from disk cache", entry.path);
                let book = Arc::new(book);
                self.cache.insert(book_id.to_string(), book.clone());
                return Ok(book);
            }
            Ok(None) => {}
            Err(err) => {
                // Corrupt or unreadable record: treat as a miss and refetch.
                tracing::warn!("Disk cache read for {} failed: {}", entry.path, err);
            }
        }

        let raw = self.fetcher.fetch(&entry.path).await?;
        let book = Arc::new(paginate(&raw, &entry.content_type, self.page_size));

        if let Err(err) = self.store.store(&entry.path, &book).await {
            // The Book is still served from memory; the next cold request
            // will refetch.
            tracing::error!("Disk cache write for {} failed: {}", entry.path, err);
        }

        self.cache.insert(book_id.to_string(), book.clone());
        Ok(book)
    }

    /// Returns the requested window of page texts.
    pub async fn page_range(
        &self,
        book_id: &str,
        first_page: usize,
        page_count: usize,
    ) -> Result<Vec<String>, BookError> {
        let book = self.get_book(book_id).await?;

        match book.page_range(first_page, page_count) {
            Some(pages) => Ok(pages.to_vec()),
            None => Err(BookError::OutOfRange {
                first_page,
                page_count,
                total: book.page_count,
            }),
        }
    }

    /// Returns the book's metadata summary.
    pub async fn summary(&self, book_id: &str) -> Result<BookSummary, BookError> {
        let book = self.get_book(book_id).await?;
        Ok(BookSummary {
            content_type: book.content_type.clone(),
            word_count: book.word_count,
            page_count: book.page_count,
        })
    }
}
