//! Order records.

use chrono::{DateTime, Utc};
use lipoimports_core::{Email, OrderId, OrderStatus, ProductId, random_id};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::error::StoreError;
use crate::storage::keys;

/// A line item snapshot inside an order.
///
/// Name and price are copied at order time, so later product edits do not
/// rewrite order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// A customer order.
///
/// The customer contact block is a denormalized snapshot, not a reference to
/// a user record. Orders are created and status-patched but never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_last_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    /// Brazilian postal code (CEP).
    pub customer_cep: String,
    pub customer_address: String,
    pub customer_neighborhood: String,
    pub customer_city: String,
    pub customer_state: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
}

impl Entity for Order {
    type Id = OrderId;
    const STORAGE_KEY: &'static str = keys::ORDERS;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

/// Draft for an order about to be placed. Id (`ord-` prefixed) and creation
/// timestamp are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_last_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub customer_cep: String,
    pub customer_address: String,
    pub customer_neighborhood: String,
    pub customer_city: String,
    pub customer_state: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub tracking_code: Option<String>,
}

impl NewOrder {
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the customer name is empty or
    /// the order has no items.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.customer_name.trim().is_empty() {
            return Err(StoreError::Validation("customer name is required".into()));
        }
        if self.items.is_empty() {
            return Err(StoreError::Validation(
                "an order needs at least one item".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_record(self) -> Order {
        Order {
            id: OrderId::new(format!("ord-{}", random_id())),
            customer_name: self.customer_name,
            customer_last_name: self.customer_last_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            customer_cep: self.customer_cep,
            customer_address: self.customer_address,
            customer_neighborhood: self.customer_neighborhood,
            customer_city: self.customer_city,
            customer_state: self.customer_state,
            items: self.items,
            total: self.total,
            status: self.status,
            created_at: Utc::now(),
            tracking_code: self.tracking_code,
        }
    }
}

/// Patch for an existing order.
///
/// Only the fulfillment-side fields are patchable; the customer snapshot and
/// item list are immutable once placed. Any status may be set at any time -
/// there is no enforced transition graph.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    /// `Some(None)` clears the tracking code.
    pub tracking_code: Option<Option<String>>,
}

impl OrderPatch {
    pub fn apply(self, order: &mut Order) {
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(tracking_code) = self.tracking_code {
            order.tracking_code = tracking_code;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> NewOrder {
        NewOrder {
            customer_name: "Maria".into(),
            customer_last_name: "Silva".into(),
            customer_email: Email::parse("maria@email.com").unwrap(),
            customer_phone: "(11) 99999-9999".into(),
            customer_cep: "01310-100".into(),
            customer_address: "Av. Paulista, 1000".into(),
            customer_neighborhood: "Bela Vista".into(),
            customer_city: "São Paulo".into(),
            customer_state: "SP".into(),
            items: vec![OrderItem {
                product_id: ProductId::new("1"),
                product_name: "MOUNJARO 15mg (Lilly)".into(),
                quantity: 1,
                price: Decimal::new(3300_00, 2),
            }],
            total: Decimal::new(3300_00, 2),
            status: OrderStatus::Pending,
            tracking_code: None,
        }
    }

    #[test]
    fn test_into_record_assigns_prefixed_id_and_timestamp() {
        let before = Utc::now();
        let order = draft().into_record();
        assert!(order.id.as_str().starts_with("ord-"));
        assert!(order.created_at >= before);
    }

    #[test]
    fn test_validate_rejects_empty_order() {
        let mut new = draft();
        new.items.clear();
        assert!(matches!(new.validate(), Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_patch_touches_only_fulfillment_fields() {
        let mut order = draft().into_record();
        OrderPatch {
            status: Some(OrderStatus::Shipped),
            tracking_code: Some(Some("BR123456789".into())),
        }
        .apply(&mut order);
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.tracking_code.as_deref(), Some("BR123456789"));
        assert_eq!(order.customer_name, "Maria");
    }
}
