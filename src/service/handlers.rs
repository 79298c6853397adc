use super::book::BookService;
use super::types::{BookParams, BookSummary, PageParams};
use axum::extract::{Extension, Query};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

/// `GET /page?bookId=&firstPage=&pageCount=`
///
/// Responds with the requested pages' text, each page separated by a single
/// NUL byte, under the book's stored content type. Unknown ids, fetch
/// failures and invalid windows all map to 404.
pub async fn handle_page(
    Extension(service): Extension<Arc<BookService>>,
    Query(params): Query<PageParams>,
) -> Response {
    let (first_page, page_count) = match (
        usize::try_from(params.first_page),
        usize::try_from(params.page_count),
    ) {
        (Ok(first), Ok(count)) => (first, count),
        _ => {
            tracing::info!(
                "Out of range ({}) : {} + {}",
                params.book_id,
                params.first_page,
                params.page_count
            );
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    // One resolution serves both the content type and the page window.
    let book = match service.get_book(&params.book_id).await {
        Ok(book) => book,
        Err(err) => {
            tracing::info!("Not found: {} ({})", params.book_id, err);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let pages = match book.page_range(first_page, page_count) {
        Some(pages) => pages,
        None => {
            tracing::info!(
                "Out of range ({}) : {} + {} of {}",
                params.book_id,
                first_page,
                page_count,
                book.page_count
            );
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let body = pages.join("\u{0000}");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, book.content_type.clone())],
        body,
    )
        .into_response()
}

/// `GET /book?bookId=`
///
/// Responds with the book's `{contentType, wordCount, pageCount}` summary.
pub async fn handle_book(
    Extension(service): Extension<Arc<BookService>>,
    Query(params): Query<BookParams>,
) -> Result<Json<BookSummary>, StatusCode> {
    match service.summary(&params.book_id).await {
        Ok(summary) => Ok(Json(summary)),
        Err(err) => {
            tracing::info!("Not found: {} ({})", params.book_id, err);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// `GET /index`
///
/// Responds with an HTML listing of every catalog entry for display.
pub async fn handle_index(Extension(service): Extension<Arc<BookService>>) -> Html<String> {
    let mut body = String::from("<!DOCTYPE html><html><body>");
    for (book_id, entry) in service.catalog().iter() {
        body.push_str(&format!(
            "<a href='/#{}'>{}</a><br>",
            book_id, entry.title
        ));
    }
    body.push_str("</body></html>");
    Html(body)
}
