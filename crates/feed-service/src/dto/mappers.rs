//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use feed_core::entities::{Feed, FeedWithAuthor, Member};

use super::responses::{FeedDetailResponse, FeedResponse, FeedSummaryResponse, MemberResponse};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.id,
            email: member.email.clone(),
            nickname: member.nickname.clone(),
            profile_image: member.profile_image.clone(),
            animal_name: member.animal_name.clone(),
            role: member.role.as_lowercase().to_string(),
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

// ============================================================================
// Feed Mappers
// ============================================================================

impl From<&Feed> for FeedResponse {
    fn from(feed: &Feed) -> Self {
        Self {
            feed_id: feed.id,
            member_id: feed.member_id,
            feed_type: feed.feed_type.as_lowercase().to_string(),
            subject: feed.subject.clone(),
            images: feed.images.clone(),
            content: feed.content.clone(),
            likes: feed.likes,
            views: feed.views,
            created_at: feed.created_at,
        }
    }
}

impl From<Feed> for FeedResponse {
    fn from(feed: Feed) -> Self {
        Self::from(&feed)
    }
}

/// Feed with author plus the viewer's like flag
#[derive(Debug, Clone)]
pub struct LikedFeed {
    pub feed: FeedWithAuthor,
    pub has_liked: bool,
}

impl From<LikedFeed> for FeedDetailResponse {
    fn from(liked: LikedFeed) -> Self {
        let LikedFeed { feed, has_liked } = liked;
        let FeedWithAuthor {
            feed,
            author_nickname,
            author_profile_image,
        } = feed;

        Self {
            has_liked,
            author_nickname,
            author_profile_image,
            feed_id: feed.id,
            feed_type: feed.feed_type.as_lowercase().to_string(),
            subject: feed.subject,
            images: feed.images,
            content: feed.content,
            likes: feed.likes,
            views: feed.views,
            created_at: feed.created_at,
        }
    }
}

impl From<LikedFeed> for FeedSummaryResponse {
    fn from(liked: LikedFeed) -> Self {
        let LikedFeed { feed, has_liked } = liked;
        let image = feed.feed.thumbnail().map(str::to_string);
        let FeedWithAuthor {
            feed,
            author_nickname,
            author_profile_image,
        } = feed;

        Self {
            has_liked,
            author_nickname,
            author_profile_image,
            feed_id: feed.id,
            feed_type: feed.feed_type.as_lowercase().to_string(),
            subject: feed.subject,
            image,
            content: feed.content,
            likes: feed.likes,
            views: feed.views,
            created_at: feed.created_at,
        }
    }
}
