//! Domain errors - error types for the domain layer
//!
//! Display strings are the user-facing messages returned in the
//! `{"error": ...}` envelope, so they are kept in Korean.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("회원을 찾을 수 없습니다.")]
    MemberNotFound,

    #[error("요청하신 피드를 찾을 수 없습니다.")]
    FeedNotFound,

    #[error("해당 피드에 좋아요를 누른 기록이 없습니다.")]
    FeedLikeNotFound,

    #[error("요청한 파일이 존재하지 않습니다.")]
    FileNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("닉네임은 비워둘 수 없습니다.")]
    InvalidNickname,

    #[error("유효하지 않은 피드 타입입니다.")]
    InvalidFeedType,

    #[error("유효하지 않은 이미지입니다.")]
    InvalidImage,

    #[error("파일 업로드에 실패했습니다.")]
    FileUploadFailed,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("이미 사용중인 이메일입니다.")]
    EmailAlreadyExists,

    #[error("이미 사용중인 닉네임입니다.")]
    NicknameAlreadyExists,

    #[error("이미 이 피드에 좋아요를 누르셨습니다.")]
    FeedLikeAlreadyExists,

    // =========================================================================
    // Authentication / Upstream Errors
    // =========================================================================
    #[error("로그인이 필요합니다.")]
    NotLoggedIn,

    #[error("구글 인증에 실패했습니다.")]
    OAuthFailed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl DomainError {
    /// Get an error code string for logs and API clients
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound => "MEMBER_NOT_FOUND",
            Self::FeedNotFound => "FEED_NOT_FOUND",
            Self::FeedLikeNotFound => "FEED_LIKE_NOT_FOUND",
            Self::FileNotFound => "FILE_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidNickname => "MEMBER_INVALID_NICKNAME",
            Self::InvalidFeedType => "FEED_TYPE_NOT_FOUND",
            Self::InvalidImage => "FILE_INVALID_IMAGE",
            Self::FileUploadFailed => "FILE_UPLOAD_FAILED",

            // Conflict
            Self::EmailAlreadyExists => "MEMBER_EMAIL_DUPLICATE",
            Self::NicknameAlreadyExists => "MEMBER_NICKNAME_DUPLICATE",
            Self::FeedLikeAlreadyExists => "FEED_LIKE_ALREADY_EXISTS",

            // Authentication / Upstream
            Self::NotLoggedIn => "AUTH_NOT_LOGGED_IN",
            Self::OAuthFailed => "GOOGLE_OAUTH_FAILED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound | Self::FeedNotFound | Self::FeedLikeNotFound | Self::FileNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidNickname
                | Self::InvalidFeedType
                | Self::InvalidImage
                | Self::FileUploadFailed
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::NicknameAlreadyExists | Self::FeedLikeAlreadyExists
        )
    }

    /// Check if the caller is not authenticated
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::NotLoggedIn)
    }

    /// Check if an external identity provider call failed
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::OAuthFailed)
    }

    /// Errors caused by the request itself rather than the server
    pub fn is_client_error(&self) -> bool {
        self.is_not_found() || self.is_validation() || self.is_conflict() || self.is_upstream()
    }
}
