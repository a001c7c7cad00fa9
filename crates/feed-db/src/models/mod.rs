//! Database models - SQLx-compatible structs for PostgreSQL tables

mod feed;
mod feed_like;
mod member;

pub use feed::{FeedModel, FeedWithAuthorModel};
pub use feed_like::FeedLikeModel;
pub use member::MemberModel;
