use crate::ingestion::FetchError;

/// Error kinds surfaced by the book service.
///
/// All of these map to a not-found response at the HTTP boundary; the detail
/// is for logs and tests. None are retried automatically; the only retry is
/// a future request re-attempting a failed fetch. Local store failures never
/// appear here: reads degrade to cache misses, writes are logged and the
/// request still succeeds.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// The id is absent from the catalog. User input error; the fetcher and
    /// the store are never consulted.
    #[error("unknown book id {0}")]
    UnknownBookId(String),

    /// The mirror was unreachable or answered with a non-success status.
    /// Nothing is cached for the request.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The requested page window falls outside the book.
    #[error("page range {first_page}+{page_count} out of range for {total} pages")]
    OutOfRange {
        first_page: usize,
        page_count: usize,
        total: usize,
    },
}
