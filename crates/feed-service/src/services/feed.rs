//! Feed service
//!
//! Handles feed posting, editing, detail views and paginated listings.

use std::collections::HashSet;

use feed_core::entities::{Feed, NewFeed};
use feed_core::traits::{FeedQuery, FileContext};
use feed_core::{DomainError, FeedType};
use tracing::{info, instrument};

use crate::dto::{
    CreateFeedRequest, FeedDetailResponse, FeedListQuery, FeedPageResponse, FeedResponse,
    FeedSummaryResponse, LikedFeed, UpdateFeedRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::file::FileService;
use super::member::MemberService;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a feed.
    ///
    /// Every image must be staged; they are confirmed into the feed context in
    /// order. When a confirm or the insert fails, the images confirmed so far
    /// are moved back to staging.
    #[instrument(skip(self, request), fields(member_id = request.member_id))]
    pub async fn create_feed(&self, request: CreateFeedRequest) -> ServiceResult<FeedResponse> {
        MemberService::new(self.ctx)
            .find_by_id(request.member_id)
            .await?;
        let feed_type = FeedType::from_value(&request.feed_type)?;

        let files = FileService::new(self.ctx);
        let mut confirmed = Vec::with_capacity(request.images.len());
        for image in &request.images {
            match files.confirm(image, FileContext::Feed).await {
                Ok(path) => confirmed.push(path),
                Err(e) => {
                    files.revert_all(&confirmed).await;
                    return Err(e);
                }
            }
        }

        let new_feed = NewFeed {
            member_id: request.member_id,
            feed_type,
            images: confirmed,
            subject: request.subject,
            content: request.content,
        };

        let feed = match self.ctx.feed_repo().create(&new_feed).await {
            Ok(feed) => feed,
            Err(e) => {
                files.revert_all(&new_feed.images).await;
                return Err(e.into());
            }
        };

        info!(feed_id = feed.id, images = feed.images.len(), "Feed created");
        Ok(FeedResponse::from(&feed))
    }

    /// Replace a feed's subject, type, images and content.
    ///
    /// Images still in staging are confirmed; permanent paths are kept as given.
    #[instrument(skip(self, request))]
    pub async fn update_feed(
        &self,
        feed_id: i64,
        request: UpdateFeedRequest,
    ) -> ServiceResult<FeedResponse> {
        let mut feed = self.find_by_id(feed_id).await?;
        let feed_type = FeedType::from_value(&request.feed_type)?;

        let files = FileService::new(self.ctx);
        let mut newly_confirmed = Vec::new();
        let mut images = Vec::with_capacity(request.images.len());
        for image in request.images {
            if !self.ctx.file_storage().is_staged(&image) {
                images.push(image);
                continue;
            }
            match files.confirm(&image, FileContext::Feed).await {
                Ok(path) => {
                    newly_confirmed.push(path.clone());
                    images.push(path);
                }
                Err(e) => {
                    files.revert_all(&newly_confirmed).await;
                    return Err(e);
                }
            }
        }

        feed.revise(request.subject, feed_type, images, request.content);
        if let Err(e) = self.ctx.feed_repo().update(&feed).await {
            files.revert_all(&newly_confirmed).await;
            return Err(e.into());
        }

        info!(feed_id, "Feed updated");
        Ok(FeedResponse::from(&feed))
    }

    /// Hide a feed (soft delete)
    #[instrument(skip(self))]
    pub async fn delete_feed(&self, feed_id: i64) -> ServiceResult<()> {
        let mut feed = self.find_by_id(feed_id).await?;
        feed.hide();
        self.ctx.feed_repo().update(&feed).await?;

        info!(feed_id, "Feed hidden");
        Ok(())
    }

    /// Get active feed entity by ID
    pub async fn find_by_id(&self, feed_id: i64) -> ServiceResult<Feed> {
        self.ctx
            .feed_repo()
            .find_by_id(feed_id)
            .await?
            .ok_or_else(|| DomainError::FeedNotFound.into())
    }

    /// Open a feed: counts the view and reports whether `viewer` liked it
    #[instrument(skip(self))]
    pub async fn view_feed(
        &self,
        feed_id: i64,
        viewer: Option<i64>,
    ) -> ServiceResult<FeedDetailResponse> {
        let mut feed = self
            .ctx
            .feed_repo()
            .find_with_author(feed_id)
            .await?
            .ok_or(DomainError::FeedNotFound)?;

        feed.feed.views = self.ctx.feed_repo().increment_views(feed_id).await?;

        let has_liked = match viewer {
            Some(member_id) => self.ctx.feed_like_repo().exists(feed_id, member_id).await?,
            None => false,
        };

        Ok(FeedDetailResponse::from(LikedFeed { feed, has_liked }))
    }

    /// One page of active feeds, newest first, plus the filtered total
    #[instrument(skip(self))]
    pub async fn list_feeds(&self, query: FeedListQuery) -> ServiceResult<FeedPageResponse> {
        let feed_type = match query.feed_type.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Some(FeedType::from_value(value)?),
            _ => None,
        };

        let feed_query = FeedQuery {
            offset: query.offset(),
            limit: query.limit(),
            feed_type,
            member_id: query.member_id,
        };

        let page = self.ctx.feed_repo().find_page(&feed_query).await?;
        let total = self.ctx.feed_repo().count(&feed_query).await?;

        let liked: HashSet<i64> = match query.member_id {
            Some(member_id) if !page.is_empty() => {
                let ids: Vec<i64> = page.iter().map(|f| f.feed.id).collect();
                self.ctx
                    .feed_like_repo()
                    .find_liked_feed_ids(member_id, &ids)
                    .await?
                    .into_iter()
                    .collect()
            }
            _ => HashSet::new(),
        };

        let feeds = page
            .into_iter()
            .map(|feed| {
                let has_liked = liked.contains(&feed.feed.id);
                FeedSummaryResponse::from(LikedFeed { feed, has_liked })
            })
            .collect();

        Ok(FeedPageResponse { total, feeds })
    }
}
