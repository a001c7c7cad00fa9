//! Member handlers
//!
//! Endpoints for signup, profile lookup, profile edits and withdrawal.

use axum::{extract::State, Json};
use feed_service::dto::{
    ApiResponse, MemberResponse, MessageResponse, SignupRequest, UpdateMemberRequest,
};
use feed_service::MemberService;

use crate::extractors::{IdPath, LoggedInMember, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Sign up
///
/// POST /member
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MemberService::new(state.service_context());
    let member = service.create(request).await?;

    Ok(Created::new(Json(MessageResponse::new("회원가입 성공")))
        .at(format!("/member/{}", member.member_id)))
}

/// Current member from the session cookie
///
/// GET /member/me
pub async fn get_current_member(
    State(state): State<AppState>,
    session: LoggedInMember,
) -> ApiResult<Json<ApiResponse<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let member = service.get_member(session.member_id).await?;
    Ok(Json(ApiResponse::new("로그인 상태 조회 성공", member)))
}

/// Get member by ID
///
/// GET /member/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    IdPath(member_id): IdPath,
) -> ApiResult<Json<ApiResponse<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let member = service.get_member(member_id).await?;
    Ok(Json(ApiResponse::new("회원 조회 성공", member)))
}

/// Update profile fields
///
/// PATCH /member/{member_id}
pub async fn update_member(
    State(state): State<AppState>,
    IdPath(member_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMemberRequest>,
) -> ApiResult<Json<ApiResponse<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let member = service.update_member(member_id, request).await?;
    Ok(Json(ApiResponse::new("회원 정보 수정 성공", member)))
}

/// Withdraw (soft delete)
///
/// DELETE /member/{member_id}
pub async fn delete_member(
    State(state): State<AppState>,
    IdPath(member_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = MemberService::new(state.service_context());
    service.withdraw(member_id).await?;
    Ok(Json(MessageResponse::new("회원 탈퇴(비활성화) 완료")))
}
