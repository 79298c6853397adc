//! Ingestion Module
//!
//! The outbound I/O boundary: downloads raw book text from a Project
//! Gutenberg mirror over HTTP.
//!
//! The fetcher is deliberately thin. It resolves a mirror-relative path to a
//! URL, performs a single GET, and returns the body bytes. Retry and backoff
//! are not its business: a failed fetch is propagated to the service, and the
//! only retry is a future request attempting the same book again.

pub mod fetcher;

pub use fetcher::{FetchError, RemoteFetcher};
