//! Service context - dependency container for services
//!
//! Holds all repositories, the file store and the identity provider needed by
//! services.

use std::sync::Arc;

use feed_core::traits::{
    FeedLikeRepository, FeedRepository, FileStorage, IdentityProvider, MemberRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Member, feed and feed-like repositories
/// - File storage (temp staging plus permanent contexts)
/// - The external identity provider used for login
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    feed_repo: Arc<dyn FeedRepository>,
    feed_like_repo: Arc<dyn FeedLikeRepository>,

    // Files
    file_storage: Arc<dyn FileStorage>,

    // Identity
    identity_provider: Arc<dyn IdentityProvider>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        feed_repo: Arc<dyn FeedRepository>,
        feed_like_repo: Arc<dyn FeedLikeRepository>,
        file_storage: Arc<dyn FileStorage>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            member_repo,
            feed_repo,
            feed_like_repo,
            file_storage,
            identity_provider,
        }
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the feed repository
    pub fn feed_repo(&self) -> &dyn FeedRepository {
        self.feed_repo.as_ref()
    }

    /// Get the feed like repository
    pub fn feed_like_repo(&self) -> &dyn FeedLikeRepository {
        self.feed_like_repo.as_ref()
    }

    // === Files ===

    /// Get the file storage
    pub fn file_storage(&self) -> &dyn FileStorage {
        self.file_storage.as_ref()
    }

    // === Identity ===

    /// Get the OAuth identity provider
    pub fn identity_provider(&self) -> &dyn IdentityProvider {
        self.identity_provider.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("file_storage", &"FileStorage")
            .field("identity_provider", &"IdentityProvider")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    feed_repo: Option<Arc<dyn FeedRepository>>,
    feed_like_repo: Option<Arc<dyn FeedLikeRepository>>,
    file_storage: Option<Arc<dyn FileStorage>>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn feed_repo(mut self, repo: Arc<dyn FeedRepository>) -> Self {
        self.feed_repo = Some(repo);
        self
    }

    pub fn feed_like_repo(mut self, repo: Arc<dyn FeedLikeRepository>) -> Self {
        self.feed_like_repo = Some(repo);
        self
    }

    pub fn file_storage(mut self, storage: Arc<dyn FileStorage>) -> Self {
        self.file_storage = Some(storage);
        self
    }

    pub fn identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo.ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.feed_repo.ok_or_else(|| ServiceError::validation("feed_repo is required"))?,
            self.feed_like_repo.ok_or_else(|| ServiceError::validation("feed_like_repo is required"))?,
            self.file_storage.ok_or_else(|| ServiceError::validation("file_storage is required"))?,
            self.identity_provider
                .ok_or_else(|| ServiceError::validation("identity_provider is required"))?,
        ))
    }
}
