//! Test fixtures and data generators
//!
//! Provides reusable request bodies and images for integration tests.

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgb};
use serde::{Deserialize, Serialize};

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub nickname: String,
}

impl SignupRequest {
    pub fn new(email: &str, nickname: &str) -> Self {
        Self {
            email: email.to_string(),
            nickname: nickname.to_string(),
        }
    }
}

/// Create feed request
#[derive(Debug, Serialize)]
pub struct CreateFeedRequest {
    pub member_id: i64,
    pub subject: String,
    pub feed_type: String,
    pub images: Vec<String>,
    pub content: String,
}

impl CreateFeedRequest {
    pub fn new(member_id: i64, subject: &str) -> Self {
        Self {
            member_id,
            subject: subject.to_string(),
            feed_type: "care".to_string(),
            images: vec![],
            content: "오늘의 산책".to_string(),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }
}

/// Plain `{"message"}` body
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Member payload
#[derive(Debug, Deserialize)]
pub struct MemberBody {
    pub message: String,
    pub member_id: i64,
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub animal_name: Option<String>,
    pub role: String,
}

/// Feed list entry
#[derive(Debug, Deserialize)]
pub struct FeedSummaryBody {
    pub feed_id: i64,
    pub has_liked: bool,
    pub author_nickname: String,
    pub subject: String,
    pub image: Option<String>,
    pub likes: i64,
    pub views: i64,
}

/// Feed list page
#[derive(Debug, Deserialize)]
pub struct FeedPageBody {
    pub message: String,
    pub total: i64,
    pub feeds: Vec<FeedSummaryBody>,
}

/// Single feed view
#[derive(Debug, Deserialize)]
pub struct FeedDetailBody {
    pub message: String,
    pub feed_id: i64,
    pub has_liked: bool,
    pub author_nickname: String,
    pub feed_type: String,
    pub subject: String,
    pub images: Vec<String>,
    pub likes: i64,
    pub views: i64,
}

/// Upload result
#[derive(Debug, Deserialize)]
pub struct UploadBody {
    pub temp_path: String,
}

/// A small PNG image
pub fn png_bytes() -> Vec<u8> {
    let img = ImageBuffer::from_pixel(8, 8, Rgb([200u8, 120, 40]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encode test png");
    out.into_inner()
}
