//! Product records.

use lipoimports_core::{ProductId, Slug};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::error::StoreError;
use crate::storage::keys;

/// A catalog product.
///
/// `category` is a slug reference into the category collection; it is not
/// enforced - deleting a category does not cascade to products referencing
/// it. `installment_price` is derived (`price / installments`, rounded to two
/// decimal places) and recomputed on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// URL-unique by convention, not enforced.
    pub slug: Slug,
    pub description: String,
    pub short_description: String,
    pub price: Decimal,
    /// Strike-through price shown next to `price`, when on promotion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub installments: u32,
    pub installment_price: Decimal,
    /// Ordered image references (paths or URLs).
    pub images: Vec<String>,
    /// Slug of the category this product belongs to.
    pub category: Slug,
    pub brand: String,
    pub in_stock: bool,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub tags: Vec<String>,
}

impl Product {
    /// Recompute the derived per-installment price.
    ///
    /// Leaves the field untouched when `installments` is zero, which
    /// validation prevents from being persisted in the first place.
    pub fn recompute_installment_price(&mut self) {
        if self.installments > 0 {
            self.installment_price = (self.price / Decimal::from(self.installments)).round_dp(2);
        }
    }
}

impl Entity for Product {
    type Id = ProductId;
    const STORAGE_KEY: &'static str = keys::PRODUCTS;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// Draft for a product about to be created. The id and the derived
/// installment price are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub short_description: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub installments: u32,
    pub images: Vec<String>,
    pub category: Slug,
    pub brand: String,
    pub in_stock: bool,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub tags: Vec<String>,
}

impl NewProduct {
    /// Check the draft before it touches the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the name is empty, the price
    /// is not positive, or the installment count is zero.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation("product name is required".into()));
        }
        if self.price <= Decimal::ZERO {
            return Err(StoreError::Validation(
                "product price must be positive".into(),
            ));
        }
        if self.installments == 0 {
            return Err(StoreError::Validation(
                "installments must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Turn the draft into a record with a freshly generated id.
    #[must_use]
    pub fn into_record(self) -> Product {
        let mut product = Product {
            id: ProductId::generate(),
            name: self.name,
            slug: self.slug,
            description: self.description,
            short_description: self.short_description,
            price: self.price,
            original_price: self.original_price,
            installments: self.installments,
            installment_price: Decimal::ZERO,
            images: self.images,
            category: self.category,
            brand: self.brand,
            in_stock: self.in_stock,
            is_featured: self.is_featured,
            is_best_seller: self.is_best_seller,
            tags: self.tags,
        };
        product.recompute_installment_price();
        product
    }
}

/// Field-by-field patch for an existing product.
///
/// `None` leaves a field untouched. For the nullable `original_price`, the
/// outer `Option` decides whether to touch the field and the inner one is the
/// new value (`Some(None)` clears the promotion).
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: Option<Decimal>,
    pub original_price: Option<Option<Decimal>>,
    pub installments: Option<u32>,
    pub images: Option<Vec<String>>,
    pub category: Option<Slug>,
    pub brand: Option<String>,
    pub in_stock: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl ProductPatch {
    /// Check the patch before it touches the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an empty name, a non-positive
    /// price, or a zero installment count.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(StoreError::Validation("product name is required".into()));
        }
        if self.price.is_some_and(|p| p <= Decimal::ZERO) {
            return Err(StoreError::Validation(
                "product price must be positive".into(),
            ));
        }
        if self.installments == Some(0) {
            return Err(StoreError::Validation(
                "installments must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Merge the patch into `product` and recompute the installment price.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(slug) = self.slug {
            product.slug = slug;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(short_description) = self.short_description {
            product.short_description = short_description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(installments) = self.installments {
            product.installments = installments;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(brand) = self.brand {
            product.brand = brand;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(is_featured) = self.is_featured {
            product.is_featured = is_featured;
        }
        if let Some(is_best_seller) = self.is_best_seller {
            product.is_best_seller = is_best_seller;
        }
        if let Some(tags) = self.tags {
            product.tags = tags;
        }
        product.recompute_installment_price();
    }
}
