//! File storage port

use std::fmt;

use async_trait::async_trait;

use super::RepoResult;

/// Permanent storage area a staged file is confirmed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileContext {
    Feed,
    Member,
}

impl FileContext {
    /// Directory name under the storage root
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for FileContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-phase file storage: uploads land in a staging area and are later
/// confirmed into a permanent context directory, or reverted back.
///
/// Paths are opaque strings produced by the storage itself.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Decode an uploaded image, normalise it to JPEG and stage it
    async fn save_image_to_temp(&self, bytes: Vec<u8>) -> RepoResult<String>;

    /// Move a staged file into the context directory, returning the final path
    async fn confirm_file(&self, temp_path: &str, context: FileContext) -> RepoResult<String>;

    /// Move a stored file back into the staging area
    async fn revert_to_temp(&self, path: &str) -> RepoResult<String>;

    /// Remove every file directly under the staging area
    async fn clear_temp_directory(&self) -> RepoResult<usize>;

    /// Check whether a stored file exists
    async fn file_exists(&self, path: &str) -> RepoResult<bool>;

    /// Read a stored file
    async fn read_file(&self, path: &str) -> RepoResult<Vec<u8>>;

    /// Whether the path points into the staging area
    fn is_staged(&self, path: &str) -> bool;

    /// Verify the storage root is usable
    async fn health_check(&self) -> RepoResult<()>;
}
