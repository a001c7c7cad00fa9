//! Axum extractors for request handling
//!
//! Custom extractors for the session cookie, validation, and query/path parsing.

mod auth;
mod query;
mod validated;

pub use auth::{LoggedInMember, MEMBER_ID_COOKIE, ROLE_COOKIE};
pub use query::{ApiQuery, FeedPagination, IdPath};
pub use validated::ValidatedJson;
