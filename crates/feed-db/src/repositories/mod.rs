//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in feed-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod feed;
mod feed_like;
mod member;

pub use feed::PgFeedRepository;
pub use feed_like::PgFeedLikeRepository;
pub use member::PgMemberRepository;
