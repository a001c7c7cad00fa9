//! Query string extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use feed_service::dto::FeedListQuery;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Query string extractor that rejects with an [`ApiError`]
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(inner) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(ApiQuery(inner))
    }
}

/// Feed listing parameters: `offset` (0), `limit` (4, clamped to 1..=100),
/// `feed_type` and `member_id`
#[derive(Debug, Clone)]
pub struct FeedPagination(pub FeedListQuery);

#[async_trait]
impl<S> FromRequestParts<S> for FeedPagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ApiQuery(mut query) = ApiQuery::<FeedListQuery>::from_request_parts(parts, state).await?;
        query.offset = query.offset();
        query.limit = query.limit();
        Ok(FeedPagination(query))
    }
}

/// Numeric id taken from the single path parameter
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.parse::<i64>()
            .map(IdPath)
            .map_err(|_| ApiError::invalid_path(format!("Invalid id: {raw}")))
    }
}
