//! API Integration Tests
//!
//! Each test runs the full router in-process over in-memory repositories and
//! a temporary upload directory.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer, FRONTEND_URL, VALID_CODE,
};
use chrono::{Duration, Utc};
use reqwest::{header, StatusCode};

async fn signup(server: &TestServer, email: &str, nickname: &str) -> i64 {
    let response = server
        .post("/member", &SignupRequest::new(email, nickname))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    location.trim_start_matches("/member/").parse().unwrap()
}

async fn create_feed(server: &TestServer, request: &CreateFeedRequest) -> i64 {
    let response = server.post("/feed", request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    location.trim_start_matches("/feed/").parse().unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "ok");
    assert_eq!(body["checks"]["storage"], "ok");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/feeds").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_signup_and_get_member() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/member", &SignupRequest::new("dog@example.com", "멍멍이"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/member/1");
    let body: MessageBody = response.json().await.unwrap();
    assert_eq!(body.message, "회원가입 성공");

    let response = server.get("/member/1").await.unwrap();
    let member: MemberBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(member.message, "회원 조회 성공");
    assert_eq!(member.member_id, 1);
    assert_eq!(member.email, "dog@example.com");
    assert_eq!(member.nickname, "멍멍이");
    assert_eq!(member.role, "member");
    assert!(member.profile_image.is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = TestServer::start().await.unwrap();
    signup(&server, "dog@example.com", "멍멍이").await;

    let response = server
        .post("/member", &SignupRequest::new("dog@example.com", "다른이름"))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "이미 사용중인 이메일입니다.");
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/member", &SignupRequest::new("not-an-email", "멍멍이"))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "올바른 이메일 형식이 아닙니다.");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/member", &serde_json::json!({ "nickname": "이메일없음" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_unknown_member_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/member/42").await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "회원을 찾을 수 없습니다.");
}

#[tokio::test]
async fn test_non_numeric_member_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/member/abc").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_member() {
    let server = TestServer::start().await.unwrap();
    let id = signup(&server, "dog@example.com", "멍멍이").await;
    signup(&server, "cat@example.com", "야옹이").await;

    let response = server
        .patch(
            &format!("/member/{id}"),
            &serde_json::json!({ "nickname": "  새이름 ", "animal_name": "초코" }),
        )
        .await
        .unwrap();
    let member: MemberBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(member.message, "회원 정보 수정 성공");
    assert_eq!(member.nickname, "새이름");
    assert_eq!(member.animal_name.as_deref(), Some("초코"));

    let response = server
        .patch(&format!("/member/{id}"), &serde_json::json!({ "nickname": "야옹이" }))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "이미 사용중인 닉네임입니다.");

    let response = server
        .patch(&format!("/member/{id}"), &serde_json::json!({ "nickname": "   " }))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "닉네임은 비워둘 수 없습니다.");

    let response = server
        .patch(&format!("/member/{id}"), &serde_json::json!({ "nickname": "" }))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "닉네임은 비워둘 수 없습니다.");
}

#[tokio::test]
async fn test_update_member_confirms_staged_profile_image() {
    let server = TestServer::start().await.unwrap();
    let id = signup(&server, "dog@example.com", "멍멍이").await;

    let upload: UploadBody = assert_json(
        server.upload(png_bytes(), "me.png").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let response = server
        .patch(
            &format!("/member/{id}"),
            &serde_json::json!({ "profile_image": upload.temp_path }),
        )
        .await
        .unwrap();
    let member: MemberBody = assert_json(response, StatusCode::OK).await.unwrap();
    let stored = member.profile_image.unwrap();
    assert_ne!(stored, upload.temp_path);
    assert!(stored.contains("member"));
}

#[tokio::test]
async fn test_delete_member() {
    let server = TestServer::start().await.unwrap();
    let id = signup(&server, "dog@example.com", "멍멍이").await;

    let response = server.delete(&format!("/member/{id}")).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "회원 탈퇴(비활성화) 완료");

    let response = server.get(&format!("/member/{id}")).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_current_member_requires_cookie() {
    let server = TestServer::start().await.unwrap();
    let id = signup(&server, "dog@example.com", "멍멍이").await;

    let response = server.get("/member/me").await.unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "로그인이 필요합니다.");

    let response = server.get_as("/member/me", id).await.unwrap();
    let member: MemberBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(member.message, "로그인 상태 조회 성공");
    assert_eq!(member.member_id, id);
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_view_feed() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;

    let response = server
        .post("/feed", &CreateFeedRequest::new(author, "첫 산책"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/feed/1");
    let body: MessageBody = response.json().await.unwrap();
    assert_eq!(body.message, "피드 등록 성공");

    let response = server.get("/feed/1").await.unwrap();
    let feed: FeedDetailBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.message, "피드 조회 성공");
    assert_eq!(feed.feed_id, 1);
    assert_eq!(feed.subject, "첫 산책");
    assert_eq!(feed.feed_type, "care");
    assert_eq!(feed.author_nickname, "멍멍이");
    assert_eq!(feed.views, 1);
    assert!(!feed.has_liked);

    let feed: FeedDetailBody = assert_json(server.get("/feed/1").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(feed.views, 2);
}

#[tokio::test]
async fn test_create_feed_for_unknown_member() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/feed", &CreateFeedRequest::new(999, "주인 없음"))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "회원을 찾을 수 없습니다.");

    // an unknown member is reported even when the type is also invalid
    let mut request = CreateFeedRequest::new(999, "주인 없음");
    request.feed_type = "travel".to_string();
    let response = server.post("/feed", &request).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "회원을 찾을 수 없습니다.");
}

#[tokio::test]
async fn test_create_feed_invalid_type() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;

    let mut request = CreateFeedRequest::new(author, "장난감");
    request.feed_type = "toys".to_string();
    let response = server.post("/feed", &request).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "유효하지 않은 피드 타입입니다.");
}

#[tokio::test]
async fn test_update_and_delete_feed() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;
    let feed_id = create_feed(&server, &CreateFeedRequest::new(author, "원래 제목")).await;

    let response = server
        .put(
            &format!("/feed/{feed_id}"),
            &serde_json::json!({
                "subject": "바뀐 제목",
                "feed_type": "medical",
                "images": [],
                "content": "병원 다녀옴"
            }),
        )
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "피드 수정 성공");

    let feed: FeedDetailBody =
        assert_json(server.get(&format!("/feed/{feed_id}")).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(feed.subject, "바뀐 제목");
    assert_eq!(feed.feed_type, "medical");

    let response = server.delete(&format!("/feed/{feed_id}")).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "피드 삭제 완료");

    let response = server.get(&format!("/feed/{feed_id}")).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "요청하신 피드를 찾을 수 없습니다.");
}

#[tokio::test]
async fn test_feed_pagination() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;
    for n in 1..=6 {
        create_feed(&server, &CreateFeedRequest::new(author, &format!("피드 {n}"))).await;
    }

    let page: FeedPageBody = assert_json(server.get("/feeds").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(page.message, "성공");
    assert_eq!(page.total, 6);
    let ids: Vec<i64> = page.feeds.iter().map(|f| f.feed_id).collect();
    assert_eq!(ids, vec![6, 5, 4, 3]);

    let page: FeedPageBody = assert_json(
        server.get("/feeds?offset=4&limit=4").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(page.total, 6);
    let ids: Vec<i64> = page.feeds.iter().map(|f| f.feed_id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_feed_list_orders_by_creation_time() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;
    for n in 1..=3 {
        create_feed(&server, &CreateFeedRequest::new(author, &format!("피드 {n}"))).await;
    }
    server
        .store
        .set_feed_created_at(1, Utc::now() + Duration::hours(1));

    let page: FeedPageBody = assert_json(server.get("/feeds").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let ids: Vec<i64> = page.feeds.iter().map(|f| f.feed_id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[tokio::test]
async fn test_feed_list_type_filter() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;
    create_feed(&server, &CreateFeedRequest::new(author, "돌봄")).await;
    let mut food = CreateFeedRequest::new(author, "간식");
    food.feed_type = "food".to_string();
    create_feed(&server, &food).await;

    let page: FeedPageBody = assert_json(
        server.get("/feeds?feed_type=food").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.feeds[0].subject, "간식");

    let page: FeedPageBody = assert_json(
        server.get("/feeds?feed_type=").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(page.total, 2);

    let response = server.get("/feeds?feed_type=toys").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_cycle() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;
    let fan = signup(&server, "cat@example.com", "야옹이").await;
    let feed_id = create_feed(&server, &CreateFeedRequest::new(author, "좋아요 받을 피드")).await;
    let path = format!("/feed/like/{feed_id}?member_id={fan}");

    let response = server.post_empty(&path).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "좋아요 성공");

    let response = server.post_empty(&path).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "이미 이 피드에 좋아요를 누르셨습니다.");

    let feed: FeedDetailBody = assert_json(
        server
            .get(&format!("/feed/{feed_id}?member_id={fan}"))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(feed.has_liked);
    assert_eq!(feed.likes, 1);

    let response = server.delete(&path).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "좋아요 취소 성공");

    let response = server.delete(&path).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "해당 피드에 좋아요를 누른 기록이 없습니다.");

    let response = server.post_empty(&path).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_like_requires_member_id() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;
    let feed_id = create_feed(&server, &CreateFeedRequest::new(author, "피드")).await;

    let response = server
        .post_empty(&format!("/feed/like/{feed_id}"))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "회원 ID(member_id)는 필수입니다.");
}

#[tokio::test]
async fn test_like_unknown_feed() {
    let server = TestServer::start().await.unwrap();
    let fan = signup(&server, "cat@example.com", "야옹이").await;

    let response = server
        .post_empty(&format!("/feed/like/77?member_id={fan}"))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "요청하신 피드를 찾을 수 없습니다.");
}

#[tokio::test]
async fn test_list_marks_liked_feeds() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;
    let first = create_feed(&server, &CreateFeedRequest::new(author, "하나")).await;
    create_feed(&server, &CreateFeedRequest::new(author, "둘")).await;

    server
        .post_empty(&format!("/feed/like/{first}?member_id={author}"))
        .await
        .unwrap();

    let page: FeedPageBody = assert_json(
        server.get(&format!("/feeds?member_id={author}")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(page.total, 2);
    for feed in &page.feeds {
        assert_eq!(feed.has_liked, feed.feed_id == first);
    }
}

// ============================================================================
// File Tests
// ============================================================================

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .upload(b"definitely not an image".to_vec(), "notes.txt")
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "유효하지 않은 이미지입니다.");
}

#[tokio::test]
async fn test_upload_then_attach_to_feed() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;

    let upload: UploadBody = assert_json(
        server.upload(png_bytes(), "walk.png").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(upload.temp_path.ends_with(".jpeg"));

    let feed_id = create_feed(
        &server,
        &CreateFeedRequest::new(author, "사진 있는 피드").with_images(vec![upload.temp_path.clone()]),
    )
    .await;

    let feed: FeedDetailBody =
        assert_json(server.get(&format!("/feed/{feed_id}")).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(feed.images.len(), 1);
    let stored = &feed.images[0];
    assert_ne!(stored, &upload.temp_path);

    // the staged copy is gone once confirmed
    let response = server
        .client
        .get(format!("{}/file/view", server.base_url()))
        .query(&[("file_path", upload.temp_path.as_str())])
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .client
        .get(format!("{}/file/view", server.base_url()))
        .query(&[("file_path", format!("\"{stored}\""))])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    let bytes = response.bytes().await.unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[tokio::test]
async fn test_create_feed_with_unknown_image() {
    let server = TestServer::start().await.unwrap();
    let author = signup(&server, "dog@example.com", "멍멍이").await;

    let response = server
        .post(
            "/feed",
            &CreateFeedRequest::new(author, "없는 사진")
                .with_images(vec!["/nowhere/temp/missing.jpg".to_string()]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let page: FeedPageBody = assert_json(server.get("/feeds").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}

// ============================================================================
// OAuth Tests
// ============================================================================

#[tokio::test]
async fn test_google_login_redirects_to_consent_screen() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/oauth/google/login").await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.contains("response_type=code"));
}

#[tokio::test]
async fn test_google_callback_sets_session_cookies() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/oauth/google/callback?code={VALID_CODE}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], FRONTEND_URL);

    let cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("member_id=1")));
    assert!(cookies.iter().any(|c| c.starts_with("role=member")));
    assert!(cookies.iter().all(|c| c.contains("HttpOnly")));

    let member: MemberBody = assert_json(server.get_as("/member/me", 1).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(member.email, "google@example.com");
    assert_eq!(member.nickname, "구글유저");

    // second login reuses the member
    let response = server
        .get(&format!("/oauth/google/callback?code={VALID_CODE}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(server.get("/member/2").await.unwrap().status().is_client_error());
}

#[tokio::test]
async fn test_google_callback_rejects_bad_code() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get("/oauth/google/callback?code=forged")
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "구글 인증에 실패했습니다.");

    let response = server.get("/oauth/google/callback").await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "구글 인증에 실패했습니다.");
}
