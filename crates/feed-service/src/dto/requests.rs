//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Default page size for feed listings
pub const DEFAULT_FEED_LIMIT: i64 = 4;

/// Largest page a caller may request
pub const MAX_FEED_LIMIT: i64 = 100;

// ============================================================================
// Member Requests
// ============================================================================

/// Member signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "올바른 이메일 형식이 아닙니다."))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "닉네임은 1~50자여야 합니다."))]
    pub nickname: String,

    /// Profile image path or URL
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Partial member update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    /// Blank values are rejected by the service after trimming
    #[validate(length(max = 50, message = "닉네임은 50자 이하여야 합니다."))]
    #[serde(default)]
    pub nickname: Option<String>,

    /// Staged temp path (confirmed on save) or an already-permanent path
    #[serde(default)]
    pub profile_image: Option<String>,

    #[validate(length(max = 50, message = "반려동물 이름은 50자 이하여야 합니다."))]
    #[serde(default)]
    pub animal_name: Option<String>,
}

// ============================================================================
// Feed Requests
// ============================================================================

/// Create feed request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedRequest {
    pub member_id: i64,

    #[validate(length(min = 1, max = 255, message = "제목은 1~255자여야 합니다."))]
    pub subject: String,

    #[validate(length(min = 1, message = "피드 타입은 필수입니다."))]
    pub feed_type: String,

    /// Staged temp paths, in display order
    #[serde(default)]
    pub images: Vec<String>,

    pub content: String,
}

/// Replace the editable fields of a feed
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFeedRequest {
    #[validate(length(min = 1, max = 255, message = "제목은 1~255자여야 합니다."))]
    pub subject: String,

    #[validate(length(min = 1, message = "피드 타입은 필수입니다."))]
    pub feed_type: String,

    #[serde(default)]
    pub images: Vec<String>,

    pub content: String,
}

/// Feed listing query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct FeedListQuery {
    #[serde(default)]
    pub offset: i64,

    #[serde(default = "default_feed_limit")]
    pub limit: i64,

    /// Case-insensitive feed type filter; blank means no filter
    #[serde(default)]
    pub feed_type: Option<String>,

    /// Owner filter, also used as the viewer for the like flag
    #[serde(default)]
    pub member_id: Option<i64>,
}

fn default_feed_limit() -> i64 {
    DEFAULT_FEED_LIMIT
}

impl Default for FeedListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_FEED_LIMIT,
            feed_type: None,
            member_id: None,
        }
    }
}

impl FeedListQuery {
    /// Offset clamped to be non-negative
    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }

    /// Limit clamped to 1..=100
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_FEED_LIMIT)
    }
}

/// Query carrying the acting member, as used by like/unlike and feed detail
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberIdQuery {
    #[serde(default)]
    pub member_id: Option<i64>,
}

// ============================================================================
// File Requests
// ============================================================================

/// `GET /file/view` query
#[derive(Debug, Clone, Deserialize)]
pub struct FileViewQuery {
    pub file_path: String,
}

impl FileViewQuery {
    /// Path with surrounding quotes removed
    pub fn path(&self) -> String {
        self.file_path.trim_matches('"').to_string()
    }
}

// ============================================================================
// OAuth Requests
// ============================================================================

/// Provider redirect back to the callback endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    pub code: Option<String>,
}
