//! Feed entity - a post with ordered images

use chrono::{DateTime, Utc};

use crate::value_objects::FeedType;

/// Feed post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub id: i64,
    pub member_id: i64,
    pub feed_type: FeedType,
    /// Stored image paths, in display order
    pub images: Vec<String>,
    pub subject: String,
    pub content: String,
    /// Cached like count, kept in step with the feed_likes table
    pub likes: i64,
    pub views: i64,
    pub displayed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feed {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.displayed
    }

    /// Representative image shown in list views
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Replace the editable fields
    pub fn revise(
        &mut self,
        subject: String,
        feed_type: FeedType,
        images: Vec<String>,
        content: String,
    ) {
        self.subject = subject;
        self.feed_type = feed_type;
        self.images = images;
        self.content = content;
        self.updated_at = Utc::now();
    }

    pub fn hide(&mut self) {
        self.displayed = false;
        self.updated_at = Utc::now();
    }
}

/// Data needed to create a feed; id and counters are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeed {
    pub member_id: i64,
    pub feed_type: FeedType,
    pub images: Vec<String>,
    pub subject: String,
    pub content: String,
}

impl NewFeed {
    pub fn into_feed(self, id: i64, now: DateTime<Utc>) -> Feed {
        Feed {
            id,
            member_id: self.member_id,
            feed_type: self.feed_type,
            images: self.images,
            subject: self.subject,
            content: self.content,
            likes: 0,
            views: 0,
            displayed: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Feed joined with its author's public profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedWithAuthor {
    pub feed: Feed,
    pub author_nickname: String,
    pub author_profile_image: Option<String>,
}
