//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Feed, FeedLike, FeedWithAuthor, Member, NewFeed, NewMember};
use crate::error::DomainError;
use crate::value_objects::FeedType;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find an active member by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Find an active member by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;

    /// Find an active member by nickname
    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<Member>>;

    /// Check if an email is registered, including withdrawn members
    async fn exists_by_email(&self, email: &str) -> RepoResult<bool>;

    /// Insert a new member and return it with its assigned id
    async fn create(&self, member: &NewMember) -> RepoResult<Member>;

    /// Persist profile fields, role, and the displayed flag
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Verify the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Feed Repository
// ============================================================================

/// Filter and window for feed listings
#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub offset: i64,
    pub limit: i64,
    pub feed_type: Option<FeedType>,
    /// Restrict to feeds owned by this member
    pub member_id: Option<i64>,
}

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Find an active feed by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feed>>;

    /// Find an active feed together with its author
    async fn find_with_author(&self, id: i64) -> RepoResult<Option<FeedWithAuthor>>;

    /// Insert a new feed and return it with its assigned id
    async fn create(&self, feed: &NewFeed) -> RepoResult<Feed>;

    /// Persist subject, type, images, content, and the displayed flag
    async fn update(&self, feed: &Feed) -> RepoResult<()>;

    /// Atomically add one view, returning the new count
    async fn increment_views(&self, id: i64) -> RepoResult<i64>;

    /// Active feeds matching the query, newest first
    async fn find_page(&self, query: &FeedQuery) -> RepoResult<Vec<FeedWithAuthor>>;

    /// Number of active feeds matching the query's filters (window ignored)
    async fn count(&self, query: &FeedQuery) -> RepoResult<i64>;
}

// ============================================================================
// Feed Like Repository
// ============================================================================

#[async_trait]
pub trait FeedLikeRepository: Send + Sync {
    /// Check whether the member liked the feed
    async fn exists(&self, feed_id: i64, member_id: i64) -> RepoResult<bool>;

    /// Record a like and bump the feed's like counter in one transaction
    async fn create(&self, feed_id: i64, member_id: i64) -> RepoResult<FeedLike>;

    /// Remove a like and lower the feed's like counter in one transaction
    async fn delete(&self, feed_id: i64, member_id: i64) -> RepoResult<()>;

    /// Number of likes recorded for a feed
    async fn count_by_feed(&self, feed_id: i64) -> RepoResult<i64>;

    /// Subset of `feed_ids` the member has liked
    async fn find_liked_feed_ids(&self, member_id: i64, feed_ids: &[i64]) -> RepoResult<Vec<i64>>;
}
