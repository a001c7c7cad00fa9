//! Feed like handlers

use axum::{extract::State, Json};
use feed_service::dto::{MemberIdQuery, MessageResponse};
use feed_service::FeedLikeService;

use crate::extractors::{ApiQuery, IdPath};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn required_member(query: &MemberIdQuery) -> ApiResult<i64> {
    query
        .member_id
        .ok_or_else(|| ApiError::invalid_query("회원 ID(member_id)는 필수입니다."))
}

/// Like a feed
///
/// POST /feed/like/{feed_id}?member_id
pub async fn like_feed(
    State(state): State<AppState>,
    IdPath(feed_id): IdPath,
    ApiQuery(query): ApiQuery<MemberIdQuery>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let member_id = required_member(&query)?;

    let service = FeedLikeService::new(state.service_context());
    service.like(feed_id, member_id).await?;
    Ok(Created::new(Json(MessageResponse::new("좋아요 성공"))))
}

/// Remove a like
///
/// DELETE /feed/like/{feed_id}?member_id
pub async fn unlike_feed(
    State(state): State<AppState>,
    IdPath(feed_id): IdPath,
    ApiQuery(query): ApiQuery<MemberIdQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let member_id = required_member(&query)?;

    let service = FeedLikeService::new(state.service_context());
    service.unlike(feed_id, member_id).await?;
    Ok(Json(MessageResponse::new("좋아요 취소 성공")))
}
