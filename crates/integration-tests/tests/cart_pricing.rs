//! Integration tests for cart totals and coupon eligibility.
//!
//! The cart reads the coupon collection straight from the record store, so
//! these tests drive both the [`Store`] facade (to create coupons) and the
//! [`Cart`] over the same data directory.

#![allow(clippy::unwrap_used)]

use chrono::{Duration, Utc};
use lipoimports_core::DiscountType;
use lipoimports_integration_tests::TestContext;
use lipoimports_store::models::{NewCoupon, Product};
use lipoimports_store::Cart;
use rust_decimal::Decimal;

fn coupon(code: &str) -> NewCoupon {
    NewCoupon {
        code: code.into(),
        discount_type: DiscountType::Percentage,
        discount_value: Decimal::TEN,
        min_purchase: None,
        max_uses: None,
        is_active: true,
        expires_at: None,
    }
}

/// A product priced at exactly 100.00 keeps the arithmetic readable.
fn product_at_100(ctx: &TestContext) -> Product {
    let mut product = ctx.store.products().first().unwrap().clone();
    product.price = Decimal::new(100_00, 2);
    product
}

fn cart(ctx: &TestContext) -> Cart {
    Cart::load(ctx.record_store()).unwrap()
}

// ============================================================================
// Totals
// ============================================================================

#[test]
fn test_empty_cart_totals_are_zero() {
    let ctx = TestContext::new();
    let cart = cart(&ctx);
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.subtotal(), Decimal::ZERO);
    assert_eq!(cart.total(), Decimal::ZERO);
}

#[test]
fn test_add_merges_lines_for_same_product() {
    let ctx = TestContext::new();
    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product.clone(), 1).unwrap();
    cart.add(product, 2).unwrap();

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.subtotal(), Decimal::new(300_00, 2));
}

#[test]
fn test_quantity_zero_removes_line() {
    let ctx = TestContext::new();
    let product = product_at_100(&ctx);
    let id = product.id.clone();
    let mut cart = cart(&ctx);
    cart.add(product, 2).unwrap();
    cart.update_quantity(&id, 0).unwrap();
    assert!(cart.items().is_empty());
}

#[test]
fn test_cart_survives_reload() {
    let ctx = TestContext::new();
    let product = product_at_100(&ctx);
    {
        let mut cart = cart(&ctx);
        cart.add(product, 2).unwrap();
    }
    let cart = cart(&ctx);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.subtotal(), Decimal::new(200_00, 2));
}

// ============================================================================
// Coupon eligibility
// ============================================================================

#[test]
fn test_percentage_coupon_discounts_subtotal() {
    let mut ctx = TestContext::new();
    ctx.store.add_coupon(coupon("SAVE10")).unwrap();

    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product, 1).unwrap();

    assert!(cart.apply_coupon("SAVE10").unwrap());
    assert_eq!(cart.discount(), Decimal::new(10_00, 2));
    assert_eq!(cart.total(), Decimal::new(90_00, 2));
}

#[test]
fn test_coupon_code_is_case_insensitive() {
    let mut ctx = TestContext::new();
    ctx.store.add_coupon(coupon("SAVE10")).unwrap();

    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product, 1).unwrap();
    assert!(cart.apply_coupon("save10").unwrap());
}

#[test]
fn test_unknown_code_is_rejected() {
    let ctx = TestContext::new();
    let mut cart = cart(&ctx);
    assert!(!cart.apply_coupon("NADA").unwrap());
    assert!(cart.applied_coupon().is_none());
}

#[test]
fn test_inactive_coupon_is_rejected() {
    let mut ctx = TestContext::new();
    let mut draft = coupon("PAUSADO");
    draft.is_active = false;
    ctx.store.add_coupon(draft).unwrap();

    let mut cart = cart(&ctx);
    assert!(!cart.apply_coupon("PAUSADO").unwrap());
}

#[test]
fn test_expired_coupon_is_rejected() {
    let mut ctx = TestContext::new();
    let mut draft = coupon("VENCIDO");
    draft.expires_at = Some(Utc::now() - Duration::days(1));
    ctx.store.add_coupon(draft).unwrap();

    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product, 1).unwrap();
    assert!(!cart.apply_coupon("VENCIDO").unwrap());
}

#[test]
fn test_min_purchase_checked_against_subtotal_at_apply_time() {
    let mut ctx = TestContext::new();
    let mut draft = coupon("MIN200");
    draft.min_purchase = Some(Decimal::new(200_00, 2));
    ctx.store.add_coupon(draft).unwrap();

    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product.clone(), 1).unwrap();

    // 100.00 < 200.00 - rejected.
    assert!(!cart.apply_coupon("MIN200").unwrap());
    assert!(cart.applied_coupon().is_none());

    // 200.00 meets the minimum.
    cart.add(product, 1).unwrap();
    assert!(cart.apply_coupon("MIN200").unwrap());
}

#[test]
fn test_coupon_kept_when_cart_later_shrinks_below_minimum() {
    let mut ctx = TestContext::new();
    let mut draft = coupon("MIN200");
    draft.min_purchase = Some(Decimal::new(200_00, 2));
    ctx.store.add_coupon(draft).unwrap();

    let product = product_at_100(&ctx);
    let id = product.id.clone();
    let mut cart = cart(&ctx);
    cart.add(product, 2).unwrap();
    assert!(cart.apply_coupon("MIN200").unwrap());

    // Eligibility is apply-time only; shrinking keeps the coupon.
    cart.update_quantity(&id, 1).unwrap();
    assert!(cart.applied_coupon().is_some());
    assert_eq!(cart.total(), Decimal::new(90_00, 2));
}

#[test]
fn test_usage_cap_rejects_exhausted_coupon() {
    let mut ctx = TestContext::new();
    let mut draft = coupon("LIMITADO");
    draft.max_uses = Some(0);
    ctx.store.add_coupon(draft).unwrap();

    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product, 1).unwrap();
    assert!(!cart.apply_coupon("LIMITADO").unwrap());
}

// ============================================================================
// Discounts and floors
// ============================================================================

#[test]
fn test_fixed_discount_larger_than_subtotal_floors_total_at_zero() {
    let mut ctx = TestContext::new();
    let mut draft = coupon("MENOS500");
    draft.discount_type = DiscountType::Fixed;
    draft.discount_value = Decimal::new(500_00, 2);
    ctx.store.add_coupon(draft).unwrap();

    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product, 1).unwrap();
    assert!(cart.apply_coupon("MENOS500").unwrap());

    // The raw discount exceeds the subtotal; only the total is floored.
    assert_eq!(cart.discount(), Decimal::new(500_00, 2));
    assert_eq!(cart.total(), Decimal::ZERO);
}

#[test]
fn test_clear_drops_items_and_coupon() {
    let mut ctx = TestContext::new();
    ctx.store.add_coupon(coupon("SAVE10")).unwrap();

    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product, 1).unwrap();
    cart.apply_coupon("SAVE10").unwrap();
    cart.clear().unwrap();

    assert!(cart.items().is_empty());
    assert!(cart.applied_coupon().is_none());

    // Both documents were rewritten, not just the in-memory state.
    let reloaded = Cart::load(ctx.record_store()).unwrap();
    assert!(reloaded.items().is_empty());
    assert!(reloaded.applied_coupon().is_none());
}

#[test]
fn test_applying_second_coupon_replaces_first() {
    let mut ctx = TestContext::new();
    ctx.store.add_coupon(coupon("SAVE10")).unwrap();
    let mut bigger = coupon("SAVE20");
    bigger.discount_value = Decimal::new(20, 0);
    ctx.store.add_coupon(bigger).unwrap();

    let product = product_at_100(&ctx);
    let mut cart = cart(&ctx);
    cart.add(product, 1).unwrap();
    cart.apply_coupon("SAVE10").unwrap();
    cart.apply_coupon("SAVE20").unwrap();

    assert_eq!(cart.applied_coupon().unwrap().code, "SAVE20");
    assert_eq!(cart.total(), Decimal::new(80_00, 2));
}
