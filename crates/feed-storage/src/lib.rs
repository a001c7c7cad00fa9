//! # feed-storage
//!
//! Local filesystem storage for uploaded images.
//!
//! ## Layout
//!
//! - `<base_dir>/temp`: staged uploads, normalised to JPEG
//! - `<base_dir>/<context>`: confirmed files (`feed`, `member`)
//!
//! ## Example
//!
//! ```ignore
//! use feed_core::{FileContext, FileStorage};
//! use feed_storage::{LocalFileStorage, LocalStorageConfig};
//!
//! let storage = LocalFileStorage::new(&LocalStorageConfig::new("./uploads")).await?;
//! let staged = storage.save_image_to_temp(bytes).await?;
//! let stored = storage.confirm_file(&staged, FileContext::Feed).await?;
//! ```

mod error;
mod jpeg;
mod local;

pub use error::{StorageError, StorageResult};
pub use jpeg::{normalize_to_jpeg, JPEG_QUALITY};
pub use local::{LocalFileStorage, LocalStorageConfig, TEMP_DIR_NAME};
