//! # feed-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, FeedLikeService, FeedService, FileService, MemberService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
