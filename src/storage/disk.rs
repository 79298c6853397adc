use crate::pagination::Book;
use std::path::{Path, PathBuf};

/// Failure while reading or writing a persisted book record.
///
/// The service treats both variants as a cache miss on the read path; on the
/// write path they are logged and the in-memory Book is still served.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("record is corrupt: {0}")]
    Decode(#[from] bincode::Error),
}

/// On-disk book store rooted at a cache directory.
///
/// Keys are mirror-relative remote paths; each maps to one record file under
/// the root, preserving the remote directory structure.
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, remote_path: &str) -> PathBuf {
        self.root.join(remote_path.trim_start_matches('/'))
    }

    /// Loads the record for `remote_path`, `Ok(None)` when absent.
    pub async fn load(&self, remote_path: &str) -> Result<Option<Book>, StoreError> {
        let path = self.record_path(remote_path);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let book: Book = bincode::deserialize(&raw)?;
        tracing::debug!("Read {} from disk cache", remote_path);
        Ok(Some(book))
    }

    /// Persists `book` under `remote_path`, creating parent directories as
    /// needed. The write is atomic: temp file in the target directory, then
    /// rename. Every write stages through its own uniquely named temp file,
    /// so racing writers (to the same record or to sibling records) never
    /// rename each other's partially written bytes into place.
    pub async fn store(&self, remote_path: &str, book: &Book) -> Result<(), StoreError> {
        let path = self.record_path(remote_path);
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        tokio::fs::create_dir_all(&dir).await?;

        let raw = bincode::serialize(book)?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("record");
        let tmp = path.with_file_name(format!("{}.{}.tmp", file_name, uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, &raw).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("Wrote {} ({} bytes) to disk cache", remote_path, raw.len());
        Ok(())
    }
}
