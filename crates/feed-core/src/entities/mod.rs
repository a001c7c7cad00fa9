//! Domain entities - core business objects

mod feed;
mod feed_like;
mod member;

pub use feed::{Feed, FeedWithAuthor, NewFeed};
pub use feed_like::FeedLike;
pub use member::{Member, NewMember};
