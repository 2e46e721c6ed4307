//! Category and subcategory records.

use lipoimports_core::{CategoryId, Slug, SubCategoryId};
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::error::StoreError;
use crate::storage::keys;

/// A top-level catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub image: String,
}

impl Entity for Category {
    type Id = CategoryId;
    const STORAGE_KEY: &'static str = keys::CATEGORIES;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

/// A second-level category.
///
/// `parent_category_id` is a back-reference into the category collection; it
/// is not enforced and survives the parent's deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: SubCategoryId,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub parent_category_id: CategoryId,
}

impl Entity for SubCategory {
    type Id = SubCategoryId;
    const STORAGE_KEY: &'static str = keys::SUBCATEGORIES;

    fn id(&self) -> &SubCategoryId {
        &self.id
    }
}

/// Draft for a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub image: String,
}

impl NewCategory {
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the name is empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation("category name is required".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_record(self) -> Category {
        Category {
            id: CategoryId::generate(),
            name: self.name,
            slug: self.slug,
            description: self.description,
            image: self.image,
        }
    }
}

/// Field-by-field patch for an existing category.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CategoryPatch {
    pub fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(slug) = self.slug {
            category.slug = slug;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(image) = self.image {
            category.image = image;
        }
    }
}

/// Draft for a new subcategory.
#[derive(Debug, Clone)]
pub struct NewSubCategory {
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub parent_category_id: CategoryId,
}

impl NewSubCategory {
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the name is empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "subcategory name is required".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_record(self) -> SubCategory {
        SubCategory {
            id: SubCategoryId::generate(),
            name: self.name,
            slug: self.slug,
            description: self.description,
            parent_category_id: self.parent_category_id,
        }
    }
}

/// Field-by-field patch for an existing subcategory.
#[derive(Debug, Clone, Default)]
pub struct SubCategoryPatch {
    pub name: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub parent_category_id: Option<CategoryId>,
}

impl SubCategoryPatch {
    pub fn apply(self, subcategory: &mut SubCategory) {
        if let Some(name) = self.name {
            subcategory.name = name;
        }
        if let Some(slug) = self.slug {
            subcategory.slug = slug;
        }
        if let Some(description) = self.description {
            subcategory.description = description;
        }
        if let Some(parent_category_id) = self.parent_category_id {
            subcategory.parent_category_id = parent_category_id;
        }
    }
}
