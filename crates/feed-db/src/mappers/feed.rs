//! Feed entity <-> model mapper

use feed_core::entities::{Feed, FeedWithAuthor};
use feed_core::error::DomainError;
use feed_core::value_objects::FeedType;

use crate::models::{FeedModel, FeedWithAuthorModel};

/// Convert FeedModel to Feed entity
impl TryFrom<FeedModel> for Feed {
    type Error = DomainError;

    fn try_from(model: FeedModel) -> Result<Self, Self::Error> {
        let feed_type = FeedType::from_value(&model.feed_type).map_err(|_| {
            DomainError::DatabaseError(format!(
                "feed {} has unknown type {}",
                model.id, model.feed_type
            ))
        })?;

        Ok(Feed {
            id: model.id,
            member_id: model.member_id,
            feed_type,
            images: model.images.0,
            subject: model.subject,
            content: model.content,
            likes: model.likes,
            views: model.views,
            displayed: model.displayed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<FeedWithAuthorModel> for FeedWithAuthor {
    type Error = DomainError;

    fn try_from(model: FeedWithAuthorModel) -> Result<Self, Self::Error> {
        Ok(FeedWithAuthor {
            feed: Feed::try_from(model.feed)?,
            author_nickname: model.author_nickname,
            author_profile_image: model.author_profile_image,
        })
    }
}
