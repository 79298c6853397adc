//! Paginated Book Server Library
//!
//! This library crate defines the core modules of the book server.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`catalog`**: The static book index. An immutable mapping from book id to
//!   title, language, remote path and content type, loaded once from a JSON
//!   snapshot at startup.
//! - **`ingestion`**: The data intake boundary. Responsible for downloading raw
//!   book text from a Project Gutenberg mirror over HTTP.
//! - **`pagination`**: The text processing pipeline. Contains the word tokenizer
//!   and the paginator that turns raw bytes into a `Book` of fixed-size pages.
//! - **`storage`**: The persistence tier. A per-book on-disk store of binary
//!   serialized `Book` records keyed by remote path, acting as the second
//!   cache tier behind the in-process one.
//! - **`service`**: The orchestrator. Resolves a book id through catalog and
//!   both cache tiers, falls back to fetch + paginate + persist, and answers
//!   page-range and metadata queries over HTTP.

pub mod catalog;
pub mod ingestion;
pub mod pagination;
pub mod service;
pub mod storage;
