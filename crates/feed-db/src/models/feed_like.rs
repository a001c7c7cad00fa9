//! Feed like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for feed_likes table
#[derive(Debug, Clone, FromRow)]
pub struct FeedLikeModel {
    pub id: i64,
    pub feed_id: i64,
    pub member_id: i64,
    pub created_at: DateTime<Utc>,
}
