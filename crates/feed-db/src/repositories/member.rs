//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Member, NewMember};
use feed_core::error::DomainError;
use feed_core::traits::{MemberRepository, RepoResult};

use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation};

const MEMBER_COLUMNS: &str = "id, email, nickname, profile_image, animal_name, role, displayed, \
                              created_at, updated_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_active_by(&self, column: &str, value: &str) -> RepoResult<Option<Member>> {
        let sql = format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE {column} = $1 AND displayed = TRUE"
        );
        let result = sqlx::query_as::<_, MemberModel>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let sql = format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1 AND displayed = TRUE"
        );
        let result = sqlx::query_as::<_, MemberModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        self.find_active_by("email", email).await
    }

    #[instrument(skip(self))]
    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<Member>> {
        self.find_active_by("nickname", nickname).await
    }

    #[instrument(skip(self))]
    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM members WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, member), fields(email = %member.email))]
    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let sql = format!(
            "INSERT INTO members (email, nickname, profile_image, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {MEMBER_COLUMNS}"
        );
        let model = sqlx::query_as::<_, MemberModel>(&sql)
            .bind(&member.email)
            .bind(&member.nickname)
            .bind(&member.profile_image)
            .bind(member.role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Member::try_from(model)
    }

    #[instrument(skip(self, member), fields(member_id = member.id))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET nickname = $2, profile_image = $3, animal_name = $4,
                role = $5, displayed = $6, updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(member.id)
        .bind(&member.nickname)
        .bind(&member.profile_image)
        .bind(&member.animal_name)
        .bind(member.role.as_str())
        .bind(member.displayed)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MemberNotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
