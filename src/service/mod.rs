//! Book Service Module
//!
//! The orchestrator that ties catalog, caches, fetcher and paginator together.
//!
//! ## Resolution Order
//! `get_book` resolves a book id as a read-through cache:
//! 1. **Process cache** (tier 1, in-memory): a hit returns immediately.
//! 2. **Catalog**: a miss here is `UnknownBookId`.
//! 3. **Disk store** (tier 2): a hit is decoded and promoted to tier 1.
//! 4. **Remote fetch** + tokenize + paginate, then write-through to the disk
//!    store and tier 1.
//!
//! Disk read or decode failures degrade to cache misses; disk write failures
//! are logged but the freshly built Book is still served from memory.
//!
//! ## Submodules
//! - **`book`**: The `BookService` struct and resolution logic.
//! - **`error`**: The typed error kinds surfaced to callers.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod book;
pub mod error;
pub mod handlers;
pub mod types;

pub use book::BookService;
pub use error::BookError;

#[cfg(test)]
mod tests;
