//! In-memory FeedLikeRepository

use async_trait::async_trait;
use chrono::Utc;

use feed_core::entities::FeedLike;
use feed_core::error::DomainError;
use feed_core::traits::{FeedLikeRepository, RepoResult};

use super::MemoryStore;

#[derive(Debug, Clone)]
pub struct MemoryFeedLikeRepository {
    store: MemoryStore,
}

impl MemoryFeedLikeRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FeedLikeRepository for MemoryFeedLikeRepository {
    async fn exists(&self, feed_id: i64, member_id: i64) -> RepoResult<bool> {
        Ok(self.store.with(|t| {
            t.feed_likes
                .values()
                .any(|l| l.feed_id == feed_id && l.member_id == member_id)
        }))
    }

    async fn create(&self, feed_id: i64, member_id: i64) -> RepoResult<FeedLike> {
        self.store.with(|t| {
            if t
                .feed_likes
                .values()
                .any(|l| l.feed_id == feed_id && l.member_id == member_id)
            {
                return Err(DomainError::FeedLikeAlreadyExists);
            }
            let feed = t.feeds.get_mut(&feed_id).ok_or(DomainError::FeedNotFound)?;
            feed.likes += 1;

            let id = t.next_like_id();
            let like = FeedLike {
                id,
                feed_id,
                member_id,
                created_at: Utc::now(),
            };
            t.feed_likes.insert(id, like.clone());
            Ok(like)
        })
    }

    async fn delete(&self, feed_id: i64, member_id: i64) -> RepoResult<()> {
        self.store.with(|t| {
            let id = t
                .feed_likes
                .values()
                .find(|l| l.feed_id == feed_id && l.member_id == member_id)
                .map(|l| l.id)
                .ok_or(DomainError::FeedLikeNotFound)?;
            t.feed_likes.remove(&id);
            if let Some(feed) = t.feeds.get_mut(&feed_id) {
                feed.likes = (feed.likes - 1).max(0);
            }
            Ok(())
        })
    }

    async fn count_by_feed(&self, feed_id: i64) -> RepoResult<i64> {
        Ok(self
            .store
            .with(|t| t.feed_likes.values().filter(|l| l.feed_id == feed_id).count() as i64))
    }

    async fn find_liked_feed_ids(&self, member_id: i64, feed_ids: &[i64]) -> RepoResult<Vec<i64>> {
        Ok(self.store.with(|t| {
            t.feed_likes
                .values()
                .filter(|l| l.member_id == member_id && feed_ids.contains(&l.feed_id))
                .map(|l| l.feed_id)
                .collect()
        }))
    }
}
