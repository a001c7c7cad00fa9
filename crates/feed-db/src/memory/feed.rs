//! In-memory FeedRepository

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;

use feed_core::entities::{Feed, FeedWithAuthor, NewFeed};
use feed_core::error::DomainError;
use feed_core::traits::{FeedQuery, FeedRepository, RepoResult};

use super::{MemoryStore, Tables};

#[derive(Debug, Clone)]
pub struct MemoryFeedRepository {
    store: MemoryStore,
}

impl MemoryFeedRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

fn matches(feed: &Feed, query: &FeedQuery) -> bool {
    feed.displayed
        && query.feed_type.is_none_or(|ft| feed.feed_type == ft)
        && query.member_id.is_none_or(|id| feed.member_id == id)
}

fn with_author(tables: &Tables, feed: &Feed) -> Option<FeedWithAuthor> {
    tables.members.get(&feed.member_id).map(|m| FeedWithAuthor {
        feed: feed.clone(),
        author_nickname: m.nickname.clone(),
        author_profile_image: m.profile_image.clone(),
    })
}

#[async_trait]
impl FeedRepository for MemoryFeedRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feed>> {
        Ok(self
            .store
            .with(|t| t.feeds.get(&id).filter(|f| f.displayed).cloned()))
    }

    async fn find_with_author(&self, id: i64) -> RepoResult<Option<FeedWithAuthor>> {
        Ok(self.store.with(|t| {
            t.feeds
                .get(&id)
                .filter(|f| f.displayed)
                .and_then(|f| with_author(t, f))
        }))
    }

    async fn create(&self, feed: &NewFeed) -> RepoResult<Feed> {
        self.store.with(|t| {
            if !t.members.contains_key(&feed.member_id) {
                return Err(DomainError::MemberNotFound);
            }
            let id = t.next_feed_id();
            let saved = feed.clone().into_feed(id, Utc::now());
            t.feeds.insert(id, saved.clone());
            Ok(saved)
        })
    }

    async fn update(&self, feed: &Feed) -> RepoResult<()> {
        self.store.with(|t| {
            let stored = t.feeds.get_mut(&feed.id).ok_or(DomainError::FeedNotFound)?;
            stored.subject.clone_from(&feed.subject);
            stored.feed_type = feed.feed_type;
            stored.images.clone_from(&feed.images);
            stored.content.clone_from(&feed.content);
            stored.displayed = feed.displayed;
            stored.updated_at = feed.updated_at;
            Ok(())
        })
    }

    async fn increment_views(&self, id: i64) -> RepoResult<i64> {
        self.store.with(|t| {
            let feed = t
                .feeds
                .get_mut(&id)
                .filter(|f| f.displayed)
                .ok_or(DomainError::FeedNotFound)?;
            feed.views += 1;
            Ok(feed.views)
        })
    }

    async fn find_page(&self, query: &FeedQuery) -> RepoResult<Vec<FeedWithAuthor>> {
        Ok(self.store.with(|t| {
            let mut feeds: Vec<&Feed> = t.feeds.values().filter(|f| matches(f, query)).collect();
            feeds.sort_by_key(|f| Reverse((f.created_at, f.id)));
            feeds
                .into_iter()
                .skip(usize::try_from(query.offset.max(0)).unwrap_or(0))
                .take(usize::try_from(query.limit.clamp(1, 100)).unwrap_or(1))
                .filter_map(|f| with_author(t, f))
                .collect()
        }))
    }

    async fn count(&self, query: &FeedQuery) -> RepoResult<i64> {
        Ok(self
            .store
            .with(|t| t.feeds.values().filter(|f| matches(f, query)).count() as i64))
    }
}
