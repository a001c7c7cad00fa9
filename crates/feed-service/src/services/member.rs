//! Member service
//!
//! Handles signup, profile lookups, profile edits and withdrawal.

use feed_core::entities::{Member, NewMember};
use feed_core::traits::FileContext;
use feed_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{MemberResponse, SignupRequest, UpdateMemberRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::file::FileService;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign up a new member
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(&self, request: SignupRequest) -> ServiceResult<MemberResponse> {
        let member = self
            .register(request.email, &request.nickname, request.profile_image)
            .await?;
        Ok(MemberResponse::from(&member))
    }

    /// Register a member with the regular authority.
    ///
    /// The email must be unused, including by withdrawn accounts.
    pub async fn register(
        &self,
        email: String,
        nickname: &str,
        profile_image: Option<String>,
    ) -> ServiceResult<Member> {
        if self.ctx.member_repo().exists_by_email(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let new_member = NewMember::new(email, nickname, profile_image)?;
        let member = self.ctx.member_repo().create(&new_member).await?;

        info!(member_id = member.id, "Member registered");
        Ok(member)
    }

    /// Get an active member's profile
    #[instrument(skip(self))]
    pub async fn get_member(&self, member_id: i64) -> ServiceResult<MemberResponse> {
        let member = self.find_by_id(member_id).await?;
        Ok(MemberResponse::from(&member))
    }

    /// Get active member entity by ID
    pub async fn find_by_id(&self, member_id: i64) -> ServiceResult<Member> {
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound.into())
    }

    /// Get active member entity by email
    pub async fn find_by_email(&self, email: &str) -> ServiceResult<Member> {
        self.ctx
            .member_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound.into())
    }

    /// Get active member entity by nickname
    pub async fn find_by_nickname(&self, nickname: &str) -> ServiceResult<Member> {
        self.ctx
            .member_repo()
            .find_by_nickname(nickname)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound.into())
    }

    /// Whether any account, active or withdrawn, uses this email
    pub async fn exists_by_email(&self, email: &str) -> ServiceResult<bool> {
        Ok(self.ctx.member_repo().exists_by_email(email).await?)
    }

    /// Apply a partial profile update.
    ///
    /// A new profile image that is still staged is confirmed into the member
    /// context; if the update then fails to persist, it goes back to staging.
    #[instrument(skip(self, request))]
    pub async fn update_member(
        &self,
        member_id: i64,
        request: UpdateMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        let mut member = self.find_by_id(member_id).await?;

        if let Some(nickname) = request.nickname.as_deref() {
            self.apply_nickname(&mut member, nickname).await?;
        }

        let mut confirmed = Vec::new();
        if let Some(image) = request.profile_image {
            if member.profile_image.as_deref() != Some(image.as_str()) {
                let stored = if self.ctx.file_storage().is_staged(&image) {
                    let path = FileService::new(self.ctx)
                        .confirm(&image, FileContext::Member)
                        .await?;
                    confirmed.push(path.clone());
                    path
                } else {
                    image
                };
                member.change_profile_image(Some(stored));
            }
        }

        if let Some(animal_name) = request.animal_name {
            member.change_animal_name(Some(animal_name));
        }

        member.touch();
        if let Err(e) = self.ctx.member_repo().update(&member).await {
            FileService::new(self.ctx).revert_all(&confirmed).await;
            return Err(e.into());
        }

        info!(member_id, "Member profile updated");
        Ok(MemberResponse::from(&member))
    }

    async fn apply_nickname(&self, member: &mut Member, nickname: &str) -> ServiceResult<()> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(DomainError::InvalidNickname.into());
        }
        if nickname == member.nickname {
            return Ok(());
        }

        if let Some(holder) = self.ctx.member_repo().find_by_nickname(nickname).await? {
            if holder.id != member.id {
                return Err(DomainError::NicknameAlreadyExists.into());
            }
        }

        member.change_nickname(nickname)?;
        Ok(())
    }

    /// Withdraw an account (soft delete)
    #[instrument(skip(self))]
    pub async fn withdraw(&self, member_id: i64) -> ServiceResult<()> {
        let mut member = self.find_by_id(member_id).await?;
        member.hide();
        self.ctx.member_repo().update(&member).await?;

        info!(member_id, "Member withdrawn");
        Ok(())
    }
}
