//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateFeedRequest, FeedListQuery, FileViewQuery, MemberIdQuery, OAuthCallbackQuery,
    SignupRequest, UpdateFeedRequest, UpdateMemberRequest, DEFAULT_FEED_LIMIT, MAX_FEED_LIMIT,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, FeedDetailResponse, FeedPageResponse, FeedResponse, FeedSummaryResponse,
    HealthChecks, HealthResponse, LoginResponse, MemberResponse, MessageResponse,
    ReadinessResponse, UploadResponse,
};

// Re-export mappers and helper structs
pub use mappers::LikedFeed;
