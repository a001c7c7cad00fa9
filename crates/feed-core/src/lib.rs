//! # feed-core
//!
//! Domain layer containing entities, value objects, and the ports the
//! infrastructure crates implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Feed, FeedLike, FeedWithAuthor, Member, NewFeed, NewMember};
pub use error::DomainError;
pub use traits::{
    FeedLikeRepository, FeedQuery, FeedRepository, FileContext, FileStorage, IdentityProvider,
    MemberRepository, OAuthProfile, RepoResult,
};
pub use value_objects::{FeedType, UserAuthority};
