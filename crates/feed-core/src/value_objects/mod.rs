//! Value objects - immutable types that represent domain concepts

mod feed_type;
mod user_authority;

pub use feed_type::FeedType;
pub use user_authority::UserAuthority;
