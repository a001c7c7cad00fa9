//! FeedLike entity <-> model mapper

use feed_core::entities::FeedLike;

use crate::models::FeedLikeModel;

/// Convert FeedLikeModel to FeedLike entity
impl From<FeedLikeModel> for FeedLike {
    fn from(model: FeedLikeModel) -> Self {
        FeedLike {
            id: model.id,
            feed_id: model.feed_id,
            member_id: model.member_id,
            created_at: model.created_at,
        }
    }
}
