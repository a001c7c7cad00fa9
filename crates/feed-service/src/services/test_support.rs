//! Shared fixtures for service tests

use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use feed_core::entities::{Feed, FeedWithAuthor, Member, NewFeed, NewMember};
use feed_core::traits::{
    FeedQuery, FeedRepository, IdentityProvider, MemberRepository, OAuthProfile, RepoResult,
};
use feed_core::DomainError;
use feed_db::{MemoryFeedRepository, MemoryMemberRepository, MemoryStore};
use feed_storage::{LocalFileStorage, LocalStorageConfig};
use image::{ImageBuffer, ImageFormat, Rgb};
use tempfile::TempDir;

use crate::dto::SignupRequest;

use super::context::{ServiceContext, ServiceContextBuilder};
use super::member::MemberService;

/// Accepts the code `valid` and answers with a fixed profile
pub struct FakeIdentityProvider {
    pub profile: OAuthProfile,
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    fn authorization_url(&self) -> String {
        "https://accounts.example.com/auth?response_type=code".to_string()
    }

    async fn fetch_profile(&self, code: &str) -> RepoResult<OAuthProfile> {
        if code == "valid" {
            Ok(self.profile.clone())
        } else {
            Err(DomainError::OAuthFailed)
        }
    }
}

/// Member store whose `update` always fails
pub struct FailingMemberUpdates(pub MemoryMemberRepository);

#[async_trait]
impl MemberRepository for FailingMemberUpdates {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        self.0.find_by_email(email).await
    }

    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<Member>> {
        self.0.find_by_nickname(nickname).await
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        self.0.exists_by_email(email).await
    }

    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        self.0.create(member).await
    }

    async fn update(&self, _member: &Member) -> RepoResult<()> {
        Err(DomainError::DatabaseError("member update rejected".to_string()))
    }

    async fn ping(&self) -> RepoResult<()> {
        self.0.ping().await
    }
}

/// Feed store whose `update` always fails
pub struct FailingFeedUpdates(pub MemoryFeedRepository);

#[async_trait]
impl FeedRepository for FailingFeedUpdates {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feed>> {
        self.0.find_by_id(id).await
    }

    async fn find_with_author(&self, id: i64) -> RepoResult<Option<FeedWithAuthor>> {
        self.0.find_with_author(id).await
    }

    async fn create(&self, feed: &NewFeed) -> RepoResult<Feed> {
        self.0.create(feed).await
    }

    async fn update(&self, _feed: &Feed) -> RepoResult<()> {
        Err(DomainError::DatabaseError("feed update rejected".to_string()))
    }

    async fn increment_views(&self, id: i64) -> RepoResult<i64> {
        self.0.increment_views(id).await
    }

    async fn find_page(&self, query: &FeedQuery) -> RepoResult<Vec<FeedWithAuthor>> {
        self.0.find_page(query).await
    }

    async fn count(&self, query: &FeedQuery) -> RepoResult<i64> {
        self.0.count(query).await
    }
}

pub struct TestContext {
    pub ctx: ServiceContext,
    pub store: MemoryStore,
    pub storage: Arc<LocalFileStorage>,
    _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_profile(OAuthProfile {
            email: "google@example.com".to_string(),
            name: Some("구글유저".to_string()),
            picture: Some("https://example.com/p.png".to_string()),
        })
        .await
    }

    pub async fn with_profile(profile: OAuthProfile) -> Self {
        Self::build(profile, false).await
    }

    /// Context whose member and feed updates fail at the store
    pub async fn with_failing_updates() -> Self {
        Self::build(
            OAuthProfile {
                email: "google@example.com".to_string(),
                name: None,
                picture: None,
            },
            true,
        )
        .await
    }

    async fn build(profile: OAuthProfile, failing_updates: bool) -> Self {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(
            LocalFileStorage::new(&LocalStorageConfig::new(dir.path()))
                .await
                .unwrap(),
        );
        let store = MemoryStore::new();

        let (member_repo, feed_repo): (Arc<dyn MemberRepository>, Arc<dyn FeedRepository>) =
            if failing_updates {
                (
                    Arc::new(FailingMemberUpdates(store.member_repository())),
                    Arc::new(FailingFeedUpdates(store.feed_repository())),
                )
            } else {
                (
                    Arc::new(store.member_repository()),
                    Arc::new(store.feed_repository()),
                )
            };

        let ctx = ServiceContextBuilder::new()
            .member_repo(member_repo)
            .feed_repo(feed_repo)
            .feed_like_repo(Arc::new(store.feed_like_repository()))
            .file_storage(storage.clone())
            .identity_provider(Arc::new(FakeIdentityProvider { profile }))
            .build()
            .unwrap();

        Self {
            ctx,
            store,
            storage,
            _dir: dir,
        }
    }

    pub async fn member(&self, email: &str, nickname: &str) -> Member {
        let request = SignupRequest {
            email: email.to_string(),
            nickname: nickname.to_string(),
            profile_image: None,
        };
        let created = MemberService::new(&self.ctx).create(request).await.unwrap();
        self.ctx
            .member_repo()
            .find_by_id(created.member_id)
            .await
            .unwrap()
            .unwrap()
    }

    /// Stage a small PNG and return its temp path
    pub async fn staged_image(&self) -> String {
        self.ctx.file_storage().save_image_to_temp(png()).await.unwrap()
    }
}

pub fn png() -> Vec<u8> {
    let img = ImageBuffer::from_fn(4, 4, |_, _| Rgb([255u8, 200u8, 0u8]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
