//! PostgreSQL implementation of FeedLikeRepository
//!
//! Likes and the cached `feeds.likes` counter change in the same transaction.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::FeedLike;
use feed_core::error::DomainError;
use feed_core::traits::{FeedLikeRepository, RepoResult};

use crate::models::FeedLikeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FeedLikeRepository
#[derive(Clone)]
pub struct PgFeedLikeRepository {
    pool: PgPool,
}

impl PgFeedLikeRepository {
    /// Create a new PgFeedLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedLikeRepository for PgFeedLikeRepository {
    #[instrument(skip(self))]
    async fn exists(&self, feed_id: i64, member_id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM feed_likes WHERE feed_id = $1 AND member_id = $2)
            ",
        )
        .bind(feed_id)
        .bind(member_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create(&self, feed_id: i64, member_id: i64) -> RepoResult<FeedLike> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, FeedLikeModel>(
            r"
            INSERT INTO feed_likes (feed_id, member_id)
            VALUES ($1, $2)
            RETURNING id, feed_id, member_id, created_at
            ",
        )
        .bind(feed_id)
        .bind(member_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            let missing_parent = e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation());
            if missing_parent {
                DomainError::FeedNotFound
            } else {
                map_unique_violation(e, || DomainError::FeedLikeAlreadyExists)
            }
        })?;

        sqlx::query("UPDATE feeds SET likes = likes + 1 WHERE id = $1")
            .bind(feed_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(FeedLike::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, feed_id: i64, member_id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM feed_likes WHERE feed_id = $1 AND member_id = $2")
            .bind(feed_id)
            .bind(member_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FeedLikeNotFound);
        }

        sqlx::query("UPDATE feeds SET likes = GREATEST(likes - 1, 0) WHERE id = $1")
            .bind(feed_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_feed(&self, feed_id: i64) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM feed_likes WHERE feed_id = $1
            ",
        )
        .bind(feed_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, feed_ids), fields(feed_count = feed_ids.len()))]
    async fn find_liked_feed_ids(&self, member_id: i64, feed_ids: &[i64]) -> RepoResult<Vec<i64>> {
        if feed_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT feed_id FROM feed_likes
            WHERE member_id = $1 AND feed_id = ANY($2)
            ",
        )
        .bind(member_id)
        .bind(feed_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }
}
