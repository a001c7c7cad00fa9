//! File service
//!
//! Thin layer over the storage port: staging uploads, promoting them into a
//! permanent context and moving them back when a later step fails.

use feed_core::traits::FileContext;
use feed_core::DomainError;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// File service
pub struct FileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FileService<'a> {
    /// Create a new FileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Normalize an uploaded image and stage it; returns the temp path
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(&self, bytes: Vec<u8>) -> ServiceResult<String> {
        if bytes.is_empty() {
            return Err(DomainError::FileUploadFailed.into());
        }

        let path = self.ctx.file_storage().save_image_to_temp(bytes).await?;
        info!(path = %path, "Image staged");
        Ok(path)
    }

    /// Promote a staged file into a permanent context
    #[instrument(skip(self))]
    pub async fn confirm(&self, temp_path: &str, context: FileContext) -> ServiceResult<String> {
        Ok(self
            .ctx
            .file_storage()
            .confirm_file(temp_path, context)
            .await?)
    }

    /// Move a stored file back into staging
    #[instrument(skip(self))]
    pub async fn revert_to_temp(&self, path: &str) -> ServiceResult<String> {
        Ok(self.ctx.file_storage().revert_to_temp(path).await?)
    }

    /// Put back every confirmed file after a failed write.
    ///
    /// Failures are logged and skipped so the original error reaches the caller.
    pub async fn revert_all(&self, paths: &[String]) {
        for path in paths {
            if let Err(e) = self.ctx.file_storage().revert_to_temp(path).await {
                warn!(path = %path, error = %e, "Failed to revert confirmed file");
            }
        }
    }

    /// Remove every staged file; returns how many were deleted
    #[instrument(skip(self))]
    pub async fn clear_temp_files(&self) -> ServiceResult<usize> {
        Ok(self.ctx.file_storage().clear_temp_directory().await?)
    }

    /// Fail with `FileNotFound` unless the path exists
    #[instrument(skip(self))]
    pub async fn ensure_exists(&self, path: &str) -> ServiceResult<()> {
        if self.ctx.file_storage().file_exists(path).await? {
            Ok(())
        } else {
            Err(DomainError::FileNotFound.into())
        }
    }

    /// Read a stored file
    #[instrument(skip(self))]
    pub async fn read(&self, path: &str) -> ServiceResult<Vec<u8>> {
        Ok(self.ctx.file_storage().read_file(path).await?)
    }
}
