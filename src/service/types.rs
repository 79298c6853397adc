use serde::{Deserialize, Serialize};

/// Book metadata returned by the `/book` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub content_type: String,
    pub word_count: usize,
    pub page_count: usize,
}

/// Query parameters for the `/page` endpoint.
///
/// The counts are parsed as signed integers so that negative values arrive
/// here instead of failing extraction; the handler maps them to the same
/// not-found response as any other invalid window.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub book_id: String,
    pub first_page: i64,
    pub page_count: i64,
}

/// Query parameters for the `/book` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookParams {
    pub book_id: String,
}
