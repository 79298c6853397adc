//! Pagination Module
//!
//! The text processing pipeline that turns raw book bytes into a `Book` of
//! fixed-size pages.
//!
//! ## Pipeline
//! 1. **Tokenization**: A bounded, resumable scanner splits decoded text into
//!    words at Unicode whitespace, treating a carriage return (optionally
//!    followed by a line feed) as both a word boundary and the end of the
//!    current call.
//! 2. **Pagination**: Words are grouped into contiguous runs of `PAGE_SIZE`,
//!    each rendered as a single text block with words joined by one ASCII
//!    space. The last page may be shorter; there is no empty trailing page.
//!
//! This is the performance-sensitive whole-book scan: O(total bytes) time,
//! O(total words) auxiliary space.

pub mod paginator;
pub mod tokenizer;
pub mod types;

pub use paginator::paginate;
pub use tokenizer::{tokenize, TokenizeStep};
pub use types::Book;

/// Words per page served to clients.
pub const PAGE_SIZE: usize = 1024;

/// Maximum word length in code points; longer runs are truncated.
pub const MAX_WORD_LEN: usize = 100;

/// Maximum words emitted per tokenizer invocation.
pub const MAX_WORDS: usize = 100;
