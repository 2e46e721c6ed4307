//! Video testimonial records.

use lipoimports_core::VideoId;
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::error::StoreError;
use crate::storage::keys;

/// A customer video testimonial shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoTestimonial {
    pub id: VideoId,
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
    /// Display duration, e.g. `"0:49"`.
    pub duration: String,
    pub author: String,
}

impl Entity for VideoTestimonial {
    type Id = VideoId;
    const STORAGE_KEY: &'static str = keys::VIDEOS;

    fn id(&self) -> &VideoId {
        &self.id
    }
}

/// Draft for a new video testimonial.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub duration: String,
    pub author: String,
}

impl NewVideo {
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the title or video URL is
    /// empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation("video title is required".into()));
        }
        if self.video_url.trim().is_empty() {
            return Err(StoreError::Validation("video URL is required".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_record(self) -> VideoTestimonial {
        VideoTestimonial {
            id: VideoId::generate(),
            title: self.title,
            thumbnail_url: self.thumbnail_url,
            video_url: self.video_url,
            duration: self.duration,
            author: self.author,
        }
    }
}

/// Field-by-field patch for an existing video testimonial.
#[derive(Debug, Clone, Default)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub duration: Option<String>,
    pub author: Option<String>,
}

impl VideoPatch {
    pub fn apply(self, video: &mut VideoTestimonial) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(thumbnail_url) = self.thumbnail_url {
            video.thumbnail_url = thumbnail_url;
        }
        if let Some(video_url) = self.video_url {
            video.video_url = video_url;
        }
        if let Some(duration) = self.duration {
            video.duration = duration;
        }
        if let Some(author) = self.author {
            video.author = author;
        }
    }
}
