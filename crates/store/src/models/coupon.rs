//! Coupon records.

use chrono::{DateTime, Utc};
use lipoimports_core::{CouponId, DiscountType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::error::StoreError;
use crate::storage::keys;

/// A discount coupon.
///
/// Codes are unique case-insensitively by convention; the store rejects
/// duplicates on create and update. `used_count` exists in the record shape
/// but is never incremented anywhere - checkout is a stub, and preserving
/// that gap is a deliberate product decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: CouponId,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    /// Minimum cart subtotal required at apply time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_purchase: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    pub used_count: u32,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Coupon {
    /// Whether `code` refers to this coupon (case-insensitive).
    #[must_use]
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}

impl Entity for Coupon {
    type Id = CouponId;
    const STORAGE_KEY: &'static str = keys::COUPONS;

    fn id(&self) -> &CouponId {
        &self.id
    }
}

/// Draft for a new coupon. `used_count` starts at zero.
#[derive(Debug, Clone)]
pub struct NewCoupon {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub min_purchase: Option<Decimal>,
    pub max_uses: Option<u32>,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewCoupon {
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the code is empty or the
    /// discount value is not positive.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.code.trim().is_empty() {
            return Err(StoreError::Validation("coupon code is required".into()));
        }
        if self.discount_value <= Decimal::ZERO {
            return Err(StoreError::Validation(
                "discount value must be positive".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_record(self) -> Coupon {
        Coupon {
            id: CouponId::generate(),
            code: self.code,
            discount_type: self.discount_type,
            discount_value: self.discount_value,
            min_purchase: self.min_purchase,
            max_uses: self.max_uses,
            used_count: 0,
            is_active: self.is_active,
            expires_at: self.expires_at,
        }
    }
}

/// Field-by-field patch for an existing coupon.
#[derive(Debug, Clone, Default)]
pub struct CouponPatch {
    pub code: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<Decimal>,
    /// `Some(None)` removes the minimum-purchase requirement.
    pub min_purchase: Option<Option<Decimal>>,
    /// `Some(None)` removes the usage cap.
    pub max_uses: Option<Option<u32>>,
    pub is_active: Option<bool>,
    /// `Some(None)` removes the expiry.
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

impl CouponPatch {
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an empty code or a non-positive
    /// discount value.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.code.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(StoreError::Validation("coupon code is required".into()));
        }
        if self.discount_value.is_some_and(|v| v <= Decimal::ZERO) {
            return Err(StoreError::Validation(
                "discount value must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn apply(self, coupon: &mut Coupon) {
        if let Some(code) = self.code {
            coupon.code = code;
        }
        if let Some(discount_type) = self.discount_type {
            coupon.discount_type = discount_type;
        }
        if let Some(discount_value) = self.discount_value {
            coupon.discount_value = discount_value;
        }
        if let Some(min_purchase) = self.min_purchase {
            coupon.min_purchase = min_purchase;
        }
        if let Some(max_uses) = self.max_uses {
            coupon.max_uses = max_uses;
        }
        if let Some(is_active) = self.is_active {
            coupon.is_active = is_active;
        }
        if let Some(expires_at) = self.expires_at {
            coupon.expires_at = expires_at;
        }
    }
}
