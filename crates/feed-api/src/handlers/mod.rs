//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod feed_likes;
pub mod feeds;
pub mod files;
pub mod health;
pub mod members;
pub mod oauth;
