//! Entity to model mappers
//!
//! Conversions from database rows to domain entities (feed-core).
//! Columns holding enum names are parsed here, so a corrupted row surfaces
//! as a `DatabaseError` instead of a panic.

mod feed;
mod feed_like;
mod member;
