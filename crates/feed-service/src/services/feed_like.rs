//! Feed like service
//!
//! One like per (feed, member) pair; the feed's like counter moves with it.

use feed_core::DomainError;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::feed::FeedService;
use super::member::MemberService;

/// Feed like service
pub struct FeedLikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedLikeService<'a> {
    /// Create a new FeedLikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a feed
    #[instrument(skip(self))]
    pub async fn like(&self, feed_id: i64, member_id: i64) -> ServiceResult<()> {
        MemberService::new(self.ctx).find_by_id(member_id).await?;
        FeedService::new(self.ctx).find_by_id(feed_id).await?;

        if self.ctx.feed_like_repo().exists(feed_id, member_id).await? {
            return Err(DomainError::FeedLikeAlreadyExists.into());
        }

        // a concurrent duplicate still fails on the unique constraint
        self.ctx.feed_like_repo().create(feed_id, member_id).await?;

        info!(feed_id, member_id, "Feed liked");
        Ok(())
    }

    /// Remove a like
    #[instrument(skip(self))]
    pub async fn unlike(&self, feed_id: i64, member_id: i64) -> ServiceResult<()> {
        self.ctx.feed_like_repo().delete(feed_id, member_id).await?;

        info!(feed_id, member_id, "Feed unliked");
        Ok(())
    }

    /// Whether the member has liked the feed
    pub async fn has_liked(&self, feed_id: i64, member_id: i64) -> ServiceResult<bool> {
        Ok(self.ctx.feed_like_repo().exists(feed_id, member_id).await?)
    }

    /// The subset of `feed_ids` the member has liked
    pub async fn liked_feed_ids(&self, member_id: i64, feed_ids: &[i64]) -> ServiceResult<Vec<i64>> {
        Ok(self
            .ctx
            .feed_like_repo()
            .find_liked_feed_ids(member_id, feed_ids)
            .await?)
    }

    /// Number of likes on a feed
    pub async fn count(&self, feed_id: i64) -> ServiceResult<i64> {
        Ok(self.ctx.feed_like_repo().count_by_feed(feed_id).await?)
    }
}
