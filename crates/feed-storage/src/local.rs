//! Local filesystem implementation of FileStorage

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use feed_core::traits::{FileContext, FileStorage, RepoResult};

use crate::error::{StorageError, StorageResult};
use crate::jpeg::normalize_to_jpeg;

/// Name of the staging directory under the storage root
pub const TEMP_DIR_NAME: &str = "temp";

const JPEG_EXTENSION: &str = ".jpeg";

/// Local storage configuration
#[derive(Debug, Clone)]
pub struct LocalStorageConfig {
    /// Storage root; created if missing
    pub base_dir: PathBuf,
}

impl LocalStorageConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl From<&feed_common::StorageConfig> for LocalStorageConfig {
    fn from(config: &feed_common::StorageConfig) -> Self {
        Self::new(&config.base_dir)
    }
}

/// Stores files under a root directory with a `temp` staging area.
///
/// Every path handed out is absolute. Paths coming back in are resolved and
/// must stay inside the root (or inside staging, for confirms), so callers
/// cannot reach arbitrary files.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    temp_dir: PathBuf,
}

impl LocalFileStorage {
    /// Create the storage, making sure the staging directory exists
    pub async fn new(config: &LocalStorageConfig) -> StorageResult<Self> {
        fs::create_dir_all(config.base_dir.join(TEMP_DIR_NAME)).await?;
        let root = fs::canonicalize(&config.base_dir).await?;
        let temp_dir = root.join(TEMP_DIR_NAME);

        info!(root = %root.display(), "Local file storage ready");
        Ok(Self { root, temp_dir })
    }

    /// Absolute storage root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute staging directory
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Resolve a caller-supplied path to an existing regular file inside `dir`
    async fn resolve_within(&self, path: &str, dir: &Path) -> StorageResult<PathBuf> {
        let resolved = fs::canonicalize(path)
            .await
            .map_err(|_| StorageError::NotFound)?;
        if !resolved.starts_with(dir) {
            return Err(StorageError::NotFound);
        }
        let metadata = fs::metadata(&resolved)
            .await
            .map_err(|_| StorageError::NotFound)?;
        if !metadata.is_file() {
            return Err(StorageError::NotFound);
        }
        Ok(resolved)
    }

    /// Write `bytes` under a fresh name; never overwrites an existing file
    async fn write_unique(&self, dir: &Path, extension: &str, bytes: &[u8]) -> StorageResult<PathBuf> {
        loop {
            let path = dir.join(unique_filename(extension));
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    file.write_all(bytes).await?;
                    file.flush().await?;
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Move `src` into `dest_dir`, keeping its name unless that name is taken.
    ///
    /// The destination is claimed with a hard link, which fails instead of
    /// replacing an existing file; the source is removed afterwards.
    async fn move_with_unique_name(&self, src: &Path, dest_dir: &Path) -> StorageResult<PathBuf> {
        let file_name = src.file_name().ok_or(StorageError::NotFound)?;
        let extension = src
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        let mut dest = dest_dir.join(file_name);
        loop {
            match fs::hard_link(src, &dest).await {
                Ok(()) => break,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    dest = dest_dir.join(unique_filename(&extension));
                }
                Err(e) => return Err(e.into()),
            }
        }
        fs::remove_file(src).await?;

        Ok(dest)
    }
}

fn unique_filename(extension: &str) -> String {
    format!("{}{extension}", Uuid::new_v4().simple())
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn save_image_to_temp(&self, bytes: Vec<u8>) -> RepoResult<String> {
        let jpeg = tokio::task::spawn_blocking(move || normalize_to_jpeg(&bytes))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))??;

        let path = self
            .write_unique(&self.temp_dir, JPEG_EXTENSION, &jpeg)
            .await?;

        debug!(path = %path.display(), "Image staged");
        Ok(path_string(&path))
    }

    #[instrument(skip(self))]
    async fn confirm_file(&self, temp_path: &str, context: FileContext) -> RepoResult<String> {
        let src = self.resolve_within(temp_path, &self.temp_dir).await?;

        let target_dir = self.root.join(context.as_str());
        fs::create_dir_all(&target_dir)
            .await
            .map_err(StorageError::from)?;

        let dest = self.move_with_unique_name(&src, &target_dir).await?;
        info!(path = %dest.display(), "File confirmed");
        Ok(path_string(&dest))
    }

    #[instrument(skip(self))]
    async fn revert_to_temp(&self, path: &str) -> RepoResult<String> {
        let src = self.resolve_within(path, &self.root).await?;
        let dest = self.move_with_unique_name(&src, &self.temp_dir).await?;
        info!(path = %dest.display(), "File reverted to staging");
        Ok(path_string(&dest))
    }

    #[instrument(skip(self))]
    async fn clear_temp_directory(&self) -> RepoResult<usize> {
        let mut entries = fs::read_dir(&self.temp_dir)
            .await
            .map_err(StorageError::from)?;
        let mut removed = 0;

        while let Some(entry) = entries.next_entry().await.map_err(StorageError::from)? {
            let file_type = entry.file_type().await.map_err(StorageError::from)?;
            if file_type.is_file() {
                fs::remove_file(entry.path())
                    .await
                    .map_err(StorageError::from)?;
                removed += 1;
            }
        }

        info!(removed, "Staging directory cleared");
        Ok(removed)
    }

    async fn file_exists(&self, path: &str) -> RepoResult<bool> {
        match self.resolve_within(path, &self.root).await {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn read_file(&self, path: &str) -> RepoResult<Vec<u8>> {
        let resolved = self.resolve_within(path, &self.root).await?;
        let bytes = fs::read(&resolved).await.map_err(StorageError::from)?;
        Ok(bytes)
    }

    fn is_staged(&self, path: &str) -> bool {
        Path::new(path).starts_with(&self.temp_dir)
    }

    async fn health_check(&self) -> RepoResult<()> {
        let metadata = fs::metadata(&self.temp_dir)
            .await
            .map_err(StorageError::from)?;
        if metadata.is_dir() {
            Ok(())
        } else {
            Err(StorageError::NotFound.into())
        }
    }
}
