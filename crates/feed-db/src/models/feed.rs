//! Feed database models

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for feeds table
#[derive(Debug, Clone, FromRow)]
pub struct FeedModel {
    pub id: i64,
    pub member_id: i64,
    pub feed_type: String,
    pub images: Json<Vec<String>>,
    pub subject: String,
    pub content: String,
    pub likes: i64,
    pub views: i64,
    pub displayed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Feed row joined with the author's nickname and avatar
#[derive(Debug, Clone, FromRow)]
pub struct FeedWithAuthorModel {
    #[sqlx(flatten)]
    pub feed: FeedModel,
    pub author_nickname: String,
    pub author_profile_image: Option<String>,
}
