//! Feed like - a member's like on a feed

use chrono::{DateTime, Utc};

/// Like record. At most one exists per (feed, member) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLike {
    pub id: i64,
    pub feed_id: i64,
    pub member_id: i64,
    pub created_at: DateTime<Utc>,
}
