//! Ports - interfaces implemented by the infrastructure crates

mod identity;
mod repositories;
mod storage;

pub use identity::{IdentityProvider, OAuthProfile};
pub use repositories::{
    FeedLikeRepository, FeedQuery, FeedRepository, MemberRepository, RepoResult,
};
pub use storage::{FileContext, FileStorage};
