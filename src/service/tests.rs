//! Service Module Tests
//!
//! Validates the cache resolution order, the typed error kinds, and the
//! serving boundary.
//!
//! ## Test Scopes
//! - **Resolution**: Cache tiering (disk hits never touch the mirror),
//!   unknown ids, write-through after a fetch.
//! - **Queries**: Page-range validation including boundary windows, and the
//!   metadata summary.
//! - **HTTP**: The `/page`, `/book` and `/index` endpoints end to end,
//!   against a loopback mirror.

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, CatalogEntry};
    use crate::ingestion::RemoteFetcher;
    use crate::pagination::paginate;
    use crate::service::handlers::{handle_book, handle_index, handle_page};
    use crate::service::types::BookSummary;
    use crate::service::{BookError, BookService};
    use crate::storage::DiskStore;
    use axum::extract::Extension;
    use axum::routing::get;
    use axum::Router;
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::path::Path;
    use std::sync::Arc;

    const ALICE_PATH: &str = "1/11/11.txt";
    const ALICE_TEXT: &[u8] = b"alpha beta\r\ngamma";

    fn test_catalog() -> Catalog {
        let mut entries = HashMap::new();
        entries.insert(
            "11".to_string(),
            CatalogEntry {
                title: "Alice's Adventures in Wonderland".to_string(),
                language: "en".to_string(),
                path: ALICE_PATH.to_string(),
                content_type: "text/plain; charset=utf-8".to_string(),
            },
        );
        Catalog::from_entries(entries)
    }

    /// Spawns a loopback mirror serving the Alice text; returns its base URL.
    async fn spawn_mirror() -> String {
        let app = Router::new().route(
            "/1/11/11.txt",
            get(|| async { String::from_utf8_lossy(ALICE_TEXT).into_owned() }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// A mirror base URL that refuses every connection, for tests that must
    /// prove the fetcher is never consulted.
    fn dead_mirror() -> String {
        "http://127.0.0.1:1".to_string()
    }

    fn make_service(mirror: &str, cache_root: &Path) -> BookService {
        BookService::with_page_size(
            test_catalog(),
            RemoteFetcher::new(mirror),
            DiskStore::new(cache_root),
            2,
        )
    }

    // ============================================================
    // RESOLUTION ORDER
    // ============================================================

    #[tokio::test]
    async fn test_unknown_id_never_touches_fetcher_or_store() {
        let dir = tempfile::tempdir().unwrap();
        // A fetch attempt against the dead mirror would yield a Fetch error,
        // not UnknownBookId.
        let service = make_service(&dead_mirror(), dir.path());

        let err = service.get_book("does-not-exist").await.unwrap_err();
        assert!(matches!(err, BookError::UnknownBookId(_)));
    }

    #[tokio::test]
    async fn test_disk_hit_never_touches_fetcher() {
        let dir = tempfile::tempdir().unwrap();

        // Seed tier 2 only; the mirror refuses connections.
        let seeded = paginate(ALICE_TEXT, "text/plain; charset=utf-8", 2);
        DiskStore::new(dir.path())
            .store(ALICE_PATH, &seeded)
            .await
            .unwrap();

        let service = make_service(&dead_mirror(), dir.path());
        let book = service.get_book("11").await.unwrap();

        assert_eq!(*book, seeded);
    }

    #[tokio::test]
    async fn test_fetch_failure_caches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dead_mirror(), dir.path());

        let err = service.get_book("11").await.unwrap_err();
        assert!(matches!(err, BookError::Fetch(_)));

        // No partial state: the record was not created.
        assert!(!dir.path().join(ALICE_PATH).exists());
    }

    #[tokio::test]
    async fn test_fetch_writes_through_to_disk_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let service = make_service(&mirror, dir.path());

        let book = service.get_book("11").await.unwrap();
        assert_eq!(book.word_count, 3);

        // Tier 2 now holds the record.
        assert!(dir.path().join(ALICE_PATH).is_file());
        let on_disk = DiskStore::new(dir.path())
            .load(ALICE_PATH)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(on_disk, *book);
    }

    #[tokio::test]
    async fn test_repeat_request_is_served_from_process_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let service = make_service(&mirror, dir.path());

        let first = service.get_book("11").await.unwrap();

        // Corrupt the disk record; a process-cache hit must not notice.
        std::fs::write(dir.path().join(ALICE_PATH), b"garbage").unwrap();
        let second = service.get_book("11").await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_corrupt_disk_record_falls_through_to_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;

        std::fs::create_dir_all(dir.path().join("1/11")).unwrap();
        std::fs::write(dir.path().join(ALICE_PATH), b"not bincode").unwrap();

        let service = make_service(&mirror, dir.path());
        let book = service.get_book("11").await.unwrap();

        assert_eq!(book.pages, vec!["alpha beta", "gamma"]);
    }

    // ============================================================
    // PAGE RANGE AND SUMMARY
    // ============================================================

    #[tokio::test]
    async fn test_page_range_valid_windows() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let service = make_service(&mirror, dir.path());

        let pages = service.page_range("11", 0, 2).await.unwrap();
        assert_eq!(pages, vec!["alpha beta", "gamma"]);

        // Boundary window: last page alone
        let pages = service.page_range("11", 1, 1).await.unwrap();
        assert_eq!(pages, vec!["gamma"]);
    }

    #[tokio::test]
    async fn test_page_range_out_of_range_windows() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let service = make_service(&mirror, dir.path());

        // first_page == page_count
        let err = service.page_range("11", 2, 1).await.unwrap_err();
        assert!(matches!(err, BookError::OutOfRange { .. }));

        // window runs past the end
        let err = service.page_range("11", 1, 2).await.unwrap_err();
        assert!(matches!(err, BookError::OutOfRange { .. }));

        // far past the end
        let err = service.page_range("11", 100, 1).await.unwrap_err();
        assert!(matches!(err, BookError::OutOfRange { .. }));
    }

    #[tokio::test]
    async fn test_summary() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let service = make_service(&mirror, dir.path());

        let summary = service.summary("11").await.unwrap();
        assert_eq!(
            summary,
            BookSummary {
                content_type: "text/plain; charset=utf-8".to_string(),
                word_count: 3,
                page_count: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_summary_serializes_camel_case() {
        let summary = BookSummary {
            content_type: "text/plain".to_string(),
            word_count: 3,
            page_count: 2,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["contentType"], "text/plain");
        assert_eq!(json["wordCount"], 3);
        assert_eq!(json["pageCount"], 2);
    }

    // ============================================================
    // HTTP SERVING BOUNDARY
    // ============================================================

    /// Spawns the real router over the given service; returns its base URL.
    async fn spawn_server(service: Arc<BookService>) -> String {
        let app = Router::new()
            .route("/index", get(handle_index))
            .route("/book", get(handle_book))
            .route("/page", get(handle_page))
            .layer(Extension(service));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_page_endpoint_nul_separated_body() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let base = spawn_server(Arc::new(make_service(&mirror, dir.path()))).await;

        let response = reqwest::get(format!(
            "{}/page?bookId=11&firstPage=0&pageCount=2",
            base
        ))
        .await
        .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        assert_eq!(&response.bytes().await.unwrap()[..], b"alpha beta\0gamma");
    }

    #[tokio::test]
    async fn test_page_endpoint_rejects_negative_first_page() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let base = spawn_server(Arc::new(make_service(&mirror, dir.path()))).await;

        let response = reqwest::get(format!(
            "{}/page?bookId=11&firstPage=-1&pageCount=1",
            base
        ))
        .await
        .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_page_endpoint_out_of_range_window_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let base = spawn_server(Arc::new(make_service(&mirror, dir.path()))).await;

        let response = reqwest::get(format!(
            "{}/page?bookId=11&firstPage=1&pageCount=2",
            base
        ))
        .await
        .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_book_endpoint_returns_summary_json() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = spawn_mirror().await;
        let base = spawn_server(Arc::new(make_service(&mirror, dir.path()))).await;

        let response = reqwest::get(format!("{}/book?bookId=11", base))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let summary: BookSummary = response.json().await.unwrap();
        assert_eq!(summary.word_count, 3);
        assert_eq!(summary.page_count, 2);
    }

    #[tokio::test]
    async fn test_book_endpoint_unknown_id_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_server(Arc::new(make_service(&dead_mirror(), dir.path()))).await;

        let response = reqwest::get(format!("{}/book?bookId=nope", base))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_endpoint_lists_titles() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_server(Arc::new(make_service(&dead_mirror(), dir.path()))).await;

        let response = reqwest::get(format!("{}/index", base)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body = response.text().await.unwrap();
        assert!(body.contains("Alice's Adventures in Wonderland"));
        assert!(body.contains("/#11"));
    }
}
