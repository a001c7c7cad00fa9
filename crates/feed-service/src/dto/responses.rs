//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Success bodies carry a human-readable `message` next to the payload.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Body that only reports the outcome
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome message with the payload fields inlined next to it
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member profile
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub member_id: i64,
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub animal_name: Option<String>,
    /// Lowercase authority name
    pub role: String,
}

// ============================================================================
// Feed Responses
// ============================================================================

/// Stored feed, as returned after create/update
#[derive(Debug, Clone, Serialize)]
pub struct FeedResponse {
    pub feed_id: i64,
    pub member_id: i64,
    pub feed_type: String,
    pub subject: String,
    pub images: Vec<String>,
    pub content: String,
    pub likes: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// Feed detail view
#[derive(Debug, Clone, Serialize)]
pub struct FeedDetailResponse {
    pub has_liked: bool,
    pub author_nickname: String,
    pub author_profile_image: Option<String>,
    pub feed_id: i64,
    /// Lowercase feed type
    pub feed_type: String,
    pub subject: String,
    pub images: Vec<String>,
    pub content: String,
    pub likes: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// Feed list item; carries only the first image
#[derive(Debug, Clone, Serialize)]
pub struct FeedSummaryResponse {
    pub has_liked: bool,
    pub author_nickname: String,
    pub author_profile_image: Option<String>,
    pub feed_id: i64,
    pub feed_type: String,
    pub subject: String,
    pub image: Option<String>,
    pub content: String,
    pub likes: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// One page of feeds plus the size of the whole filtered set
#[derive(Debug, Clone, Serialize)]
pub struct FeedPageResponse {
    pub total: i64,
    pub feeds: Vec<FeedSummaryResponse>,
}

// ============================================================================
// File Responses
// ============================================================================

/// Staged upload location
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub temp_path: String,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Identity established by a successful OAuth login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub member_id: i64,
    pub role: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub storage: String,
}

impl ReadinessResponse {
    pub fn new(database_ok: bool, storage_ok: bool) -> Self {
        let label = |ok: bool| if ok { "ok" } else { "error" }.to_string();
        Self {
            status: if database_ok && storage_ok {
                "ready".to_string()
            } else {
                "not_ready".to_string()
            },
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: label(database_ok),
                storage: label(storage_ok),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
