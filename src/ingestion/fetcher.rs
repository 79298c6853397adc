/// Failure to retrieve a book from the mirror.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("mirror returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// HTTP client for the book mirror.
///
/// Paths come from the catalog and are joined onto the configured mirror
/// base URL. Any non-success status or transport error is a fetch failure;
/// no retries are attempted here.
pub struct RemoteFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteFetcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Downloads the raw bytes for the given mirror-relative path.
    pub async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::info!("Fetching {} from mirror", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { url, source })?;
        Ok(body.to_vec())
    }
}
