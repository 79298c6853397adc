//! Catalog Module
//!
//! The static book index mapping opaque book ids to their location on the
//! remote mirror and their display metadata.
//!
//! ## Lifecycle
//! 1. **Load**: The catalog is deserialized from a JSON snapshot exactly once,
//!    during startup, before the service accepts any request.
//! 2. **Serve**: Request handling only ever reads the catalog; it is never
//!    mutated by the running process.
//! 3. **Save**: An administrative operation used by an offline builder to
//!    produce or update the snapshot. Request serving never calls it.

pub mod snapshot;
pub mod types;

pub use snapshot::{Catalog, CatalogError};
pub use types::CatalogEntry;
