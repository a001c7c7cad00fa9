//! In-memory MemberRepository

use async_trait::async_trait;
use chrono::Utc;

use feed_core::entities::{Member, NewMember};
use feed_core::error::DomainError;
use feed_core::traits::{MemberRepository, RepoResult};

use super::MemoryStore;

#[derive(Debug, Clone)]
pub struct MemoryMemberRepository {
    store: MemoryStore,
}

impl MemoryMemberRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn find_active(&self, pred: impl Fn(&Member) -> bool) -> Option<Member> {
        self.store.with(|t| {
            t.members
                .values()
                .find(|m| m.displayed && pred(m))
                .cloned()
        })
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        Ok(self.find_active(|m| m.id == id))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        Ok(self.find_active(|m| m.email == email))
    }

    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<Member>> {
        Ok(self.find_active(|m| m.nickname == nickname))
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .store
            .with(|t| t.members.values().any(|m| m.email == email)))
    }

    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        self.store.with(|t| {
            if t.members.values().any(|m| m.email == member.email) {
                return Err(DomainError::EmailAlreadyExists);
            }
            let id = t.next_member_id();
            let saved = member.clone().into_member(id, Utc::now());
            t.members.insert(id, saved.clone());
            Ok(saved)
        })
    }

    async fn update(&self, member: &Member) -> RepoResult<()> {
        self.store.with(|t| {
            let stored = t
                .members
                .get_mut(&member.id)
                .ok_or(DomainError::MemberNotFound)?;
            stored.nickname.clone_from(&member.nickname);
            stored.profile_image.clone_from(&member.profile_image);
            stored.animal_name.clone_from(&member.animal_name);
            stored.role = member.role;
            stored.displayed = member.displayed;
            stored.updated_at = member.updated_at;
            Ok(())
        })
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
