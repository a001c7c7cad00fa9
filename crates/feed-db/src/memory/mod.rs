//! In-memory repository implementations
//!
//! Backed by a single [`MemoryStore`] so that repositories sharing a store see
//! each other's writes, the way tables in one database do. The store lock is
//! never held across an `.await`.

mod feed;
mod feed_like;
mod member;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use feed_core::entities::{Feed, FeedLike, Member};

pub use feed::MemoryFeedRepository;
pub use feed_like::MemoryFeedLikeRepository;
pub use member::MemoryMemberRepository;

/// Rows of every table, keyed by id
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub members: BTreeMap<i64, Member>,
    pub feeds: BTreeMap<i64, Feed>,
    pub feed_likes: BTreeMap<i64, FeedLike>,
    next_member_id: i64,
    next_feed_id: i64,
    next_like_id: i64,
}

impl Tables {
    pub fn next_member_id(&mut self) -> i64 {
        self.next_member_id += 1;
        self.next_member_id
    }

    pub fn next_feed_id(&mut self) -> i64 {
        self.next_feed_id += 1;
        self.next_feed_id
    }

    pub fn next_like_id(&mut self) -> i64 {
        self.next_like_id += 1;
        self.next_like_id
    }
}

/// Shared in-memory database
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repository(&self) -> MemoryMemberRepository {
        MemoryMemberRepository::new(self.clone())
    }

    pub fn feed_repository(&self) -> MemoryFeedRepository {
        MemoryFeedRepository::new(self.clone())
    }

    pub fn feed_like_repository(&self) -> MemoryFeedLikeRepository {
        MemoryFeedLikeRepository::new(self.clone())
    }

    /// Overwrite a feed's creation time; listings order by it
    pub fn set_feed_created_at(&self, feed_id: i64, created_at: chrono::DateTime<Utc>) {
        if let Some(feed) = self.tables.lock().feeds.get_mut(&feed_id) {
            feed.created_at = created_at;
        }
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        f(&mut self.tables.lock())
    }
}
