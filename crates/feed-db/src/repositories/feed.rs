//! PostgreSQL implementation of FeedRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Feed, FeedWithAuthor, NewFeed};
use feed_core::error::DomainError;
use feed_core::traits::{FeedQuery, FeedRepository, RepoResult};

use crate::models::{FeedModel, FeedWithAuthorModel};

use super::error::{map_db_error, map_foreign_key_violation};

const FEED_COLUMNS: &str = "id, member_id, feed_type, images, subject, content, likes, views, \
                            displayed, created_at, updated_at";

/// Feed columns qualified with the `f` alias, plus the author columns
const FEED_WITH_AUTHOR_COLUMNS: &str = "f.id, f.member_id, f.feed_type, f.images, f.subject, \
    f.content, f.likes, f.views, f.displayed, f.created_at, f.updated_at, \
    m.nickname AS author_nickname, m.profile_image AS author_profile_image";

/// Shared filter for listings; `$1` is the type name, `$2` the owner id
const LISTING_FILTER: &str = "f.displayed = TRUE \
    AND ($1::TEXT IS NULL OR f.feed_type = $1) \
    AND ($2::BIGINT IS NULL OR f.member_id = $2)";

/// PostgreSQL implementation of FeedRepository
#[derive(Clone)]
pub struct PgFeedRepository {
    pool: PgPool,
}

impl PgFeedRepository {
    /// Create a new PgFeedRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedRepository for PgFeedRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feed>> {
        let sql = format!("SELECT {FEED_COLUMNS} FROM feeds WHERE id = $1 AND displayed = TRUE");
        let result = sqlx::query_as::<_, FeedModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Feed::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_with_author(&self, id: i64) -> RepoResult<Option<FeedWithAuthor>> {
        let sql = format!(
            "SELECT {FEED_WITH_AUTHOR_COLUMNS} \
             FROM feeds f JOIN members m ON m.id = f.member_id \
             WHERE f.id = $1 AND f.displayed = TRUE"
        );
        let result = sqlx::query_as::<_, FeedWithAuthorModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(FeedWithAuthor::try_from).transpose()
    }

    #[instrument(skip(self, feed), fields(member_id = feed.member_id))]
    async fn create(&self, feed: &NewFeed) -> RepoResult<Feed> {
        let sql = format!(
            "INSERT INTO feeds (member_id, feed_type, images, subject, content) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {FEED_COLUMNS}"
        );
        let model = sqlx::query_as::<_, FeedModel>(&sql)
            .bind(feed.member_id)
            .bind(feed.feed_type.as_str())
            .bind(Json(&feed.images))
            .bind(&feed.subject)
            .bind(&feed.content)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, || DomainError::MemberNotFound))?;

        Feed::try_from(model)
    }

    #[instrument(skip(self, feed), fields(feed_id = feed.id))]
    async fn update(&self, feed: &Feed) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE feeds
            SET subject = $2, feed_type = $3, images = $4, content = $5,
                displayed = $6, updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(feed.id)
        .bind(&feed.subject)
        .bind(feed.feed_type.as_str())
        .bind(Json(&feed.images))
        .bind(&feed.content)
        .bind(feed.displayed)
        .bind(feed.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FeedNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: i64) -> RepoResult<i64> {
        let views = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE feeds SET views = views + 1
            WHERE id = $1 AND displayed = TRUE
            RETURNING views
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        views.ok_or(DomainError::FeedNotFound)
    }

    #[instrument(skip(self))]
    async fn find_page(&self, query: &FeedQuery) -> RepoResult<Vec<FeedWithAuthor>> {
        let sql = format!(
            "SELECT {FEED_WITH_AUTHOR_COLUMNS} \
             FROM feeds f JOIN members m ON m.id = f.member_id \
             WHERE {LISTING_FILTER} \
             ORDER BY f.created_at DESC, f.id DESC \
             OFFSET $3 LIMIT $4"
        );
        let results = sqlx::query_as::<_, FeedWithAuthorModel>(&sql)
            .bind(query.feed_type.map(|ft| ft.as_str()))
            .bind(query.member_id)
            .bind(query.offset.max(0))
            .bind(query.limit.clamp(1, 100))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(FeedWithAuthor::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &FeedQuery) -> RepoResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM feeds f WHERE {LISTING_FILTER}");
        let total = sqlx::query_scalar::<_, i64>(&sql)
            .bind(query.feed_type.map(|ft| ft.as_str()))
            .bind(query.member_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(total)
    }
}
