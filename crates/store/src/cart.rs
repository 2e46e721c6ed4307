//! Cart and pricing engine.
//!
//! Holds an ordered list of line items plus at most one applied coupon, both
//! mirrored to the record store on every change. All derived values
//! (`subtotal`, `discount`, `total`) are recomputed on every read, never
//! cached.
//!
//! Coupon validation is best-effort and apply-time only: the active flag,
//! expiry, minimum purchase and usage cap are checked when the code is
//! applied, not re-verified as the cart changes afterwards. A cart that later
//! shrinks below a coupon's minimum purchase silently keeps the coupon.

use std::sync::Arc;

use chrono::Utc;
use lipoimports_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Coupon, Product};
use crate::storage::{RecordStore, RecordStoreExt, StorageError, keys};

/// A line item: a product snapshot and a quantity of at least one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// The cart state for one installation.
pub struct Cart {
    store: Arc<dyn RecordStore>,
    items: Vec<CartItem>,
    applied_coupon: Option<Coupon>,
}

impl Cart {
    /// Load the cart and any applied coupon from the record store.
    ///
    /// # Errors
    ///
    /// Returns a read error, or [`StorageError::Corrupt`] if a stored
    /// document does not match the expected shape.
    pub fn load(store: Arc<dyn RecordStore>) -> Result<Self, StorageError> {
        let items: Vec<CartItem> = store.get_json(keys::CART)?.unwrap_or_default();
        // The coupon document is `null` when nothing is applied.
        let applied_coupon = store
            .get_json::<Option<Coupon>>(keys::APPLIED_COUPON)?
            .flatten();
        Ok(Self {
            store,
            items,
            applied_coupon,
        })
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The coupon currently applied, if any.
    #[must_use]
    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.applied_coupon.as_ref()
    }

    /// Add `quantity` units of `product`, merging into an existing line for
    /// the same product. No stock-limit check is made against
    /// `product.in_stock`.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), StorageError> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem { product, quantity });
        }
        self.persist_items()
    }

    /// Set the quantity for a product's line. A quantity of zero removes the
    /// line entirely.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), StorageError> {
        if quantity == 0 {
            return self.remove(product_id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
        }
        self.persist_items()
    }

    /// Remove a product's line, if present.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), StorageError> {
        self.items.retain(|i| &i.product.id != product_id);
        self.persist_items()
    }

    /// Empty the cart and drop any applied coupon.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.applied_coupon = None;
        self.persist_items()?;
        self.persist_coupon()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// `Σ price × quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.product.price * Decimal::from(i.quantity))
            .sum()
    }

    /// Look up `code` in the coupon collection and apply it if eligible.
    ///
    /// Returns `Ok(false)` - leaving no coupon applied from this call - when
    /// the code is unknown or inactive, the coupon has expired, the current
    /// subtotal is below the coupon's minimum purchase, or its usage cap is
    /// reached. Applying a new coupon replaces a previously applied one.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the coupon collection cannot be read or the
    /// applied coupon cannot be persisted.
    pub fn apply_coupon(&mut self, code: &str) -> Result<bool, StorageError> {
        let coupons: Vec<Coupon> = self.store.get_json(keys::COUPONS)?.unwrap_or_default();
        let Some(coupon) = coupons
            .into_iter()
            .find(|c| c.matches_code(code) && c.is_active)
        else {
            return Ok(false);
        };

        if coupon.expires_at.is_some_and(|at| at < Utc::now()) {
            return Ok(false);
        }
        if coupon.min_purchase.is_some_and(|min| self.subtotal() < min) {
            return Ok(false);
        }
        if coupon
            .max_uses
            .is_some_and(|max| coupon.used_count >= max)
        {
            return Ok(false);
        }

        tracing::debug!(code = %coupon.code, "coupon applied");
        self.applied_coupon = Some(coupon);
        self.persist_coupon()?;
        Ok(true)
    }

    /// Drop the applied coupon, if any.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn remove_coupon(&mut self) -> Result<(), StorageError> {
        self.applied_coupon = None;
        self.persist_coupon()
    }

    /// The discount for the applied coupon: `subtotal × value / 100` for
    /// percentage coupons, the flat value for fixed ones. A fixed discount
    /// may exceed the subtotal; the total is floored at zero, not this.
    #[must_use]
    pub fn discount(&self) -> Decimal {
        self.applied_coupon.as_ref().map_or(Decimal::ZERO, |c| {
            match c.discount_type {
                lipoimports_core::DiscountType::Percentage => {
                    self.subtotal() * c.discount_value / Decimal::ONE_HUNDRED
                }
                lipoimports_core::DiscountType::Fixed => c.discount_value,
            }
        })
    }

    /// `max(0, subtotal − discount)`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        (self.subtotal() - self.discount()).max(Decimal::ZERO)
    }

    fn persist_items(&self) -> Result<(), StorageError> {
        self.store.set_json(keys::CART, &self.items)
    }

    fn persist_coupon(&self) -> Result<(), StorageError> {
        self.store.set_json(keys::APPLIED_COUPON, &self.applied_coupon)
    }
}
