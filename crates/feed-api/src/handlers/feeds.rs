//! Feed handlers
//!
//! Endpoints for posting, reading, editing and listing feeds.

use axum::{extract::State, Json};
use feed_service::dto::{
    ApiResponse, CreateFeedRequest, FeedDetailResponse, FeedPageResponse, MemberIdQuery,
    MessageResponse, UpdateFeedRequest,
};
use feed_service::FeedService;

use crate::extractors::{ApiQuery, FeedPagination, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List feeds, newest first
///
/// GET /feeds?offset&limit&feed_type&member_id
pub async fn list_feeds(
    State(state): State<AppState>,
    FeedPagination(query): FeedPagination,
) -> ApiResult<Json<ApiResponse<FeedPageResponse>>> {
    let service = FeedService::new(state.service_context());
    let page = service.list_feeds(query).await?;
    Ok(Json(ApiResponse::new("성공", page)))
}

/// Feed detail; counts a view
///
/// GET /feed/{feed_id}?member_id
pub async fn get_feed(
    State(state): State<AppState>,
    IdPath(feed_id): IdPath,
    ApiQuery(viewer): ApiQuery<MemberIdQuery>,
) -> ApiResult<Json<ApiResponse<FeedDetailResponse>>> {
    let service = FeedService::new(state.service_context());
    let feed = service.view_feed(feed_id, viewer.member_id).await?;
    Ok(Json(ApiResponse::new("피드 조회 성공", feed)))
}

/// Post a feed
///
/// POST /feed
pub async fn create_feed(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFeedRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = FeedService::new(state.service_context());
    let feed = service.create_feed(request).await?;

    Ok(Created::new(Json(MessageResponse::new("피드 등록 성공")))
        .at(format!("/feed/{}", feed.feed_id)))
}

/// Replace a feed's content
///
/// PUT /feed/{feed_id}
pub async fn update_feed(
    State(state): State<AppState>,
    IdPath(feed_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateFeedRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = FeedService::new(state.service_context());
    service.update_feed(feed_id, request).await?;
    Ok(Json(MessageResponse::new("피드 수정 성공")))
}

/// Hide a feed
///
/// DELETE /feed/{feed_id}
pub async fn delete_feed(
    State(state): State<AppState>,
    IdPath(feed_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = FeedService::new(state.service_context());
    service.delete_feed(feed_id).await?;
    Ok(Json(MessageResponse::new("피드 삭제 완료")))
}
