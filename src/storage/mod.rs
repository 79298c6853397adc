//! Storage Module
//!
//! The persistence tier: one binary-serialized `Book` record per remote path,
//! written on first fetch and read by every later process or cache-cold
//! request for that path.
//!
//! ## Core Concepts
//! - **Layout**: Records live under a cache root mirroring the remote path's
//!   directory structure, so distinct remote paths always map to distinct
//!   records (no content-hash deduplication).
//! - **Codec**: bincode over the `Book` struct; a store followed by a load
//!   reproduces an equal Book.
//! - **Atomicity**: Writes go to a temp file in the target directory and are
//!   renamed into place, so a concurrent reader never observes a partial
//!   record.

pub mod disk;

pub use disk::{DiskStore, StoreError};
