use crate::traits::{Storage, StorageError, StorageResult, StoredContent, StoredObject};
use async_trait::async_trait;
use futures::StreamExt;
use mediadrop_core::Category;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncRead;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `root` - Directory holding one subdirectory per category (e.g., "uploads")
    ///
    /// Directories are created by [`Storage::ensure_directories`], not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalStorage { root: root.into() }
    }

    /// Resolve a stored filename inside the category directory.
    ///
    /// Stored names are flat, so anything that could address another directory
    /// is rejected outright. Dots inside a name (`a..b.pdf`) are fine.
    fn file_path(&self, category: Category, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains('\0')
        {
            return Err(StorageError::InvalidKey(format!(
                "'{}' is not a valid stored file name",
                filename
            )));
        }
        Ok(self.category_dir(category).join(filename))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn ensure_directories(&self) -> StorageResult<()> {
        for category in Category::ALL {
            let dir = self.category_dir(category);
            fs::create_dir_all(&dir).await.map_err(|e| {
                StorageError::ConfigError(format!(
                    "Failed to create storage directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            tracing::debug!(category = %category, path = %dir.display(), "Storage directory ready");
        }
        Ok(())
    }

    async fn upload_stream(
        &self,
        category: Category,
        filename: &str,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<StoredObject> {
        let path = self.file_path(category, filename)?;
        let start = std::time::Instant::now();

        // create_new: a uniqueness-token collision fails instead of clobbering a stored file.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let bytes_copied = tokio::io::copy(reader, &mut file).await.map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Upload stream interrupted, partial file left on disk"
            );
            StorageError::UploadFailed(format!(
                "Failed to write stream to file {}: {}",
                path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            category = %category,
            path = %path.display(),
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage stream upload successful"
        );

        Ok(StoredObject {
            category,
            filename: filename.to_string(),
            path,
            size_bytes: bytes_copied,
        })
    }

    async fn list(&self, category: Category) -> StorageResult<Vec<String>> {
        let dir = self.category_dir(category);
        let list_err =
            |e: std::io::Error| StorageError::ListFailed(format!("{}: {}", dir.display(), e));

        let mut entries = fs::read_dir(&dir).await.map_err(list_err)?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        tracing::debug!(category = %category, count = names.len(), "Listed stored files");
        Ok(names)
    }

    async fn download_stream(
        &self,
        category: Category,
        filename: &str,
    ) -> StorageResult<StoredContent> {
        let path = self.file_path(category, filename)?;

        let meta = match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => meta,
            Ok(_) => return Err(StorageError::NotFound(filename.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(filename.to_string()))
            }
            Err(e) => {
                return Err(StorageError::DownloadFailed(format!(
                    "Failed to stat file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let file = fs::File::open(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to open file {}: {}", path.display(), e))
        })?;

        let path_display = path.display().to_string();
        let stream = tokio_util::io::ReaderStream::new(file).map(move |result| {
            result.map_err(|e| {
                tracing::error!(path = %path_display, error = %e, "Local storage stream download error");
                StorageError::DownloadFailed(format!("Failed to read chunk: {}", e))
            })
        });

        Ok(StoredContent {
            filename: filename.to_string(),
            size_bytes: meta.len(),
            stream: Box::pin(stream),
        })
    }

    async fn check_ready(&self) -> StorageResult<()> {
        for category in Category::ALL {
            let dir = self.category_dir(category);
            let meta = fs::metadata(&dir).await?;
            if !meta.is_dir() {
                return Err(StorageError::ConfigError(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn reader(data: &[u8]) -> std::io::Cursor<Vec<u8>> {
        std::io::Cursor::new(data.to_vec())
    }

    async fn ready_storage(dir: &Path) -> LocalStorage {
        let storage = LocalStorage::new(dir.join("uploads"));
        storage.ensure_directories().await.unwrap();
        storage
    }

    #[tokio::test]
    async fn test_ensure_directories_creates_nested_paths() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("a").join("b"));

        storage.ensure_directories().await.unwrap();

        assert!(dir.path().join("a/b/videos").is_dir());
        assert!(dir.path().join("a/b/docs").is_dir());
        storage.check_ready().await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_directories_is_idempotent() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;

        storage
            .upload_stream(Category::Video, "keep-1-2.mp4", &mut reader(b"frames"))
            .await
            .unwrap();

        storage.ensure_directories().await.unwrap();

        let names = storage.list(Category::Video).await.unwrap();
        assert_eq!(names, vec!["keep-1-2.mp4".to_string()]);
        let data = std::fs::read(storage.category_dir(Category::Video).join("keep-1-2.mp4")).unwrap();
        assert_eq!(data, b"frames");
    }

    #[tokio::test]
    async fn test_ensure_directories_fails_when_root_is_a_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("uploads");
        std::fs::write(&root, b"not a directory").unwrap();

        let storage = LocalStorage::new(&root);
        let result = storage.ensure_directories().await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_upload_and_download_stream() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;
        let data = b"%PDF-1.4 stream test".to_vec();

        let stored = storage
            .upload_stream(Category::Document, "cv-1-2.pdf", &mut reader(&data))
            .await
            .unwrap();
        assert_eq!(stored.size_bytes, data.len() as u64);
        assert_eq!(stored.path, storage.category_dir(Category::Document).join("cv-1-2.pdf"));

        let mut content = storage
            .download_stream(Category::Document, "cv-1-2.pdf")
            .await
            .unwrap();
        assert_eq!(content.size_bytes, data.len() as u64);

        let mut downloaded = Vec::new();
        while let Some(chunk) = content.stream.next().await {
            downloaded.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(downloaded, data);
    }

    #[tokio::test]
    async fn test_categories_are_isolated() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;

        storage
            .upload_stream(Category::Video, "clip-1-2.mp4", &mut reader(b"v"))
            .await
            .unwrap();

        assert_eq!(storage.list(Category::Video).await.unwrap(), vec!["clip-1-2.mp4"]);
        assert!(storage.list(Category::Document).await.unwrap().is_empty());

        let result = storage.download_stream(Category::Document, "clip-1-2.mp4").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upload_does_not_overwrite() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;

        storage
            .upload_stream(Category::Video, "dup-1-2.mp4", &mut reader(b"first"))
            .await
            .unwrap();
        let result = storage
            .upload_stream(Category::Video, "dup-1-2.mp4", &mut reader(b"second"))
            .await;
        assert!(matches!(result, Err(StorageError::UploadFailed(_))));

        let data = std::fs::read(storage.category_dir(Category::Video).join("dup-1-2.mp4")).unwrap();
        assert_eq!(data, b"first");
    }

    #[tokio::test]
    async fn test_list_returns_every_name_once() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;

        let names = ["a-1-1.mp4", "b-1-2.mp4", "c-1-3.mp4"];
        for name in names {
            storage
                .upload_stream(Category::Video, name, &mut reader(b"x"))
                .await
                .unwrap();
        }

        let mut listed = storage.list(Category::Video).await.unwrap();
        listed.sort();
        assert_eq!(listed, names.to_vec());
    }

    #[tokio::test]
    async fn test_list_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;
        std::fs::remove_dir(storage.category_dir(Category::Document)).unwrap();

        let result = storage.list(Category::Document).await;
        assert!(matches!(result, Err(StorageError::ListFailed(_))));
        assert!(storage.check_ready().await.is_err());
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;

        let result = storage.download_stream(Category::Video, "../docs/x.pdf").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.download_stream(Category::Video, "..").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.download_stream(Category::Video, ".").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage
            .upload_stream(Category::Document, "a\\b.pdf", &mut reader(b"x"))
            .await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.download_stream(Category::Video, "").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_download_missing_file() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;

        let result = storage
            .download_stream(Category::Video, "does-not-exist.mp4")
            .await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_download_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;
        std::fs::create_dir(storage.category_dir(Category::Video).join("nested")).unwrap();

        let result = storage.download_stream(Category::Video, "nested").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_interrupted_stream_leaves_partial_file() {
        use tokio_util::io::StreamReader;

        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;

        let chunks: Vec<Result<bytes::Bytes, std::io::Error>> = vec![
            Ok(bytes::Bytes::from_static(b"partial")),
            Err(std::io::Error::new(ErrorKind::ConnectionReset, "client went away")),
        ];
        let mut reader = StreamReader::new(futures::stream::iter(chunks));

        let result = storage
            .upload_stream(Category::Video, "cut-1-2.mp4", &mut reader)
            .await;
        assert!(matches!(result, Err(StorageError::UploadFailed(_))));

        let names = storage.list(Category::Video).await.unwrap();
        assert_eq!(names, vec!["cut-1-2.mp4".to_string()]);
    }

    #[tokio::test]
    async fn test_download_name_with_inner_dots() {
        let dir = tempdir().unwrap();
        let storage = ready_storage(dir.path()).await;
        std::fs::write(storage.category_dir(Category::Document).join("a..b.pdf"), b"%PDF").unwrap();

        let mut content = storage
            .download_stream(Category::Document, "a..b.pdf")
            .await
            .unwrap();
        assert_eq!(content.size_bytes, 4);
        let mut downloaded = Vec::new();
        while let Some(chunk) = content.stream.next().await {
            downloaded.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(downloaded, b"%PDF");
    }
}
