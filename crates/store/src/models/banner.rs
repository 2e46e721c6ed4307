//! Home-page banner records.

use lipoimports_core::BannerId;
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::error::StoreError;
use crate::storage::keys;

/// A promotional banner.
///
/// `order` is only used for relative sorting; values are reassigned wholesale
/// by the reorder operation and are not required to be contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    /// Data URL or remote URL.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_image: Option<String>,
    pub is_active: bool,
    pub order: i32,
}

impl Entity for Banner {
    type Id = BannerId;
    const STORAGE_KEY: &'static str = keys::BANNERS;

    fn id(&self) -> &BannerId {
        &self.id
    }
}

/// Draft for a new banner. The sort position is assigned on insert
/// (one past the current maximum).
#[derive(Debug, Clone)]
pub struct NewBanner {
    pub title: String,
    pub subtitle: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub image: String,
    pub mobile_image: Option<String>,
    pub is_active: bool,
}

impl NewBanner {
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the title is empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation("banner title is required".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_record(self, order: i32) -> Banner {
        Banner {
            id: BannerId::generate(),
            title: self.title,
            subtitle: self.subtitle,
            button_text: self.button_text,
            button_link: self.button_link,
            image: self.image,
            mobile_image: self.mobile_image,
            is_active: self.is_active,
            order,
        }
    }
}

/// Field-by-field patch for an existing banner. The sort position is patched
/// through the reorder operation, not here.
#[derive(Debug, Clone, Default)]
pub struct BannerPatch {
    pub title: Option<String>,
    /// `Some(None)` clears the subtitle.
    pub subtitle: Option<Option<String>>,
    pub button_text: Option<Option<String>>,
    pub button_link: Option<Option<String>>,
    pub image: Option<String>,
    pub mobile_image: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl BannerPatch {
    pub fn apply(self, banner: &mut Banner) {
        if let Some(title) = self.title {
            banner.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            banner.subtitle = subtitle;
        }
        if let Some(button_text) = self.button_text {
            banner.button_text = button_text;
        }
        if let Some(button_link) = self.button_link {
            banner.button_link = button_link;
        }
        if let Some(image) = self.image {
            banner.image = image;
        }
        if let Some(mobile_image) = self.mobile_image {
            banner.mobile_image = mobile_image;
        }
        if let Some(is_active) = self.is_active {
            banner.is_active = is_active;
        }
    }
}
