//! Integration tests for collection CRUD, seeding and persistence.
//!
//! Each test opens a store over its own temporary data directory; `reopen`
//! simulates a fresh process start over the same directory.

#![allow(clippy::unwrap_used)]

use lipoimports_core::{OrderStatus, Slug};
use lipoimports_integration_tests::TestContext;
use lipoimports_store::StoreError;
use lipoimports_store::models::{CategoryPatch, NewProduct, NewVideo, OrderPatch, ProductPatch};
use lipoimports_store::storage::{RecordStore, keys};
use rust_decimal::Decimal;

fn product_draft(name: &str, slug: &str) -> NewProduct {
    NewProduct {
        name: name.into(),
        slug: Slug::parse(slug).unwrap(),
        description: "desc".into(),
        short_description: "short".into(),
        price: Decimal::new(100_00, 2),
        original_price: None,
        installments: 10,
        images: vec![],
        category: Slug::parse("canetas-emagrecedoras").unwrap(),
        brand: "Marca".into(),
        in_stock: true,
        is_featured: false,
        is_best_seller: false,
        tags: vec![],
    }
}

// ============================================================================
// Seeding
// ============================================================================

#[test]
fn test_fresh_store_serves_seed_data() {
    let ctx = TestContext::new();
    assert_eq!(ctx.store.products().len(), 8);
    assert_eq!(ctx.store.categories().len(), 3);
    assert_eq!(ctx.store.videos().len(), 6);
    assert_eq!(ctx.store.orders().len(), 3);
    assert_eq!(ctx.store.payment_methods().len(), 2);
    assert_eq!(ctx.store.shipping_integrations().len(), 2);
    assert_eq!(ctx.store.banners().len(), 1);
    assert!(ctx.store.subcategories().is_empty());
    assert!(ctx.store.coupons().is_empty());
}

#[test]
fn test_seed_not_written_until_first_mutation() {
    let ctx = TestContext::new();
    let record_store = ctx.record_store();
    assert!(record_store.get(keys::PRODUCTS).unwrap().is_none());

    let mut store = ctx.reopen();
    store.add_product(product_draft("Novo", "novo")).unwrap();
    assert!(record_store.get(keys::PRODUCTS).unwrap().is_some());
    // Untouched collections stay unmaterialized.
    assert!(record_store.get(keys::CATEGORIES).unwrap().is_none());
}

// ============================================================================
// Products
// ============================================================================

#[test]
fn test_product_crud_roundtrip() {
    let mut ctx = TestContext::new();

    let snapshot = ctx.store.add_product(product_draft("Novo", "novo")).unwrap();
    assert_eq!(snapshot.len(), 9);
    let id = snapshot.last().unwrap().id.clone();

    ctx.store
        .update_product(
            &id,
            ProductPatch {
                price: Some(Decimal::new(120_00, 2)),
                ..ProductPatch::default()
            },
        )
        .unwrap();
    let product = ctx.store.product(&id).unwrap();
    assert_eq!(product.price, Decimal::new(120_00, 2));
    assert_eq!(product.installment_price, Decimal::new(12_00, 2));

    ctx.store.delete_product(&id).unwrap();
    assert!(ctx.store.product(&id).is_none());
}

#[test]
fn test_product_changes_survive_reopen() {
    let ctx = TestContext::new();
    {
        let mut store = ctx.reopen();
        store.add_product(product_draft("Persistido", "persistido")).unwrap();
    }
    let store = ctx.reopen();
    assert_eq!(store.products().len(), 9);
    assert!(store
        .product_by_slug(&Slug::parse("persistido").unwrap())
        .is_some());
}

#[test]
fn test_product_validation_rejects_bad_drafts() {
    let mut ctx = TestContext::new();
    let mut draft = product_draft("Inválido", "invalido");
    draft.price = Decimal::ZERO;
    let err = ctx.store.add_product(draft).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(ctx.store.products().len(), 8);
}

#[test]
fn test_delete_product_is_idempotent() {
    let mut ctx = TestContext::new();
    let id = ctx.store.products().first().unwrap().id.clone();
    ctx.store.delete_product(&id).unwrap();
    let snapshot = ctx.store.delete_product(&id).unwrap();
    assert_eq!(snapshot.len(), 7);
}

// ============================================================================
// Categories
// ============================================================================

#[test]
fn test_category_delete_leaves_products_untouched() {
    let mut ctx = TestContext::new();
    let id = ctx
        .store
        .categories()
        .iter()
        .find(|c| c.slug.as_str() == "canetas-emagrecedoras")
        .unwrap()
        .id
        .clone();
    ctx.store.delete_category(&id).unwrap();

    // Products still reference the now-dangling slug.
    assert_eq!(ctx.store.categories().len(), 2);
    assert!(ctx
        .store
        .products()
        .iter()
        .all(|p| p.category.as_str() == "canetas-emagrecedoras"));
}

#[test]
fn test_category_patch_touches_only_named_fields() {
    let mut ctx = TestContext::new();
    let id = ctx.store.categories().first().unwrap().id.clone();
    ctx.store
        .update_category(
            &id,
            CategoryPatch {
                name: Some("Renomeada".into()),
                ..CategoryPatch::default()
            },
        )
        .unwrap();
    let category = ctx.store.categories().first().unwrap();
    assert_eq!(category.name, "Renomeada");
    assert_eq!(category.slug.as_str(), "canetas-emagrecedoras");
}

// ============================================================================
// Videos
// ============================================================================

#[test]
fn test_video_requires_url() {
    let mut ctx = TestContext::new();
    let err = ctx
        .store
        .add_video(NewVideo {
            title: "Sem vídeo".into(),
            thumbnail_url: String::new(),
            video_url: "  ".into(),
            duration: "0:30".into(),
            author: "@autor".into(),
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

// ============================================================================
// Orders
// ============================================================================

#[test]
fn test_order_status_patch_persists() {
    let ctx = TestContext::new();
    let id = {
        let mut store = ctx.reopen();
        let id = store.orders().first().unwrap().id.clone();
        store
            .update_order(
                &id,
                OrderPatch {
                    status: Some(OrderStatus::Shipped),
                    tracking_code: Some(Some("BR987654321".into())),
                },
            )
            .unwrap();
        id
    };
    let store = ctx.reopen();
    let order = store.order(&id).unwrap();
    assert_eq!(order.status, OrderStatus::Shipped);
    assert_eq!(order.tracking_code.as_deref(), Some("BR987654321"));
}

#[test]
fn test_update_absent_order_is_noop_but_materializes_collection() {
    let ctx = TestContext::new();
    let record_store = ctx.record_store();
    let mut store = ctx.reopen();
    store
        .update_order(
            &lipoimports_core::OrderId::new("ord-ghost"),
            OrderPatch {
                status: Some(OrderStatus::Cancelled),
                tracking_code: None,
            },
        )
        .unwrap();
    // No record changed, but the whole document was still written out.
    assert!(record_store.get(keys::ORDERS).unwrap().is_some());
    assert!(store.orders().iter().all(|o| o.status != OrderStatus::Cancelled));
}

// ============================================================================
// Corrupt documents
// ============================================================================

#[test]
fn test_corrupt_collection_document_fails_open() {
    let ctx = TestContext::new();
    ctx.record_store().set(keys::PRODUCTS, "{broken").unwrap();

    let reopened = lipoimports_store::Store::with_record_store(ctx.record_store());
    assert!(reopened.is_err());
}

#[test]
fn test_category_subcategory_references_are_unenforced() {
    let mut ctx = TestContext::new();
    let parent = ctx.store.categories().first().unwrap().id.clone();
    ctx.store
        .add_subcategory(lipoimports_store::models::NewSubCategory {
            name: "Órfã em potencial".into(),
            slug: Slug::parse("orfa").unwrap(),
            description: String::new(),
            parent_category_id: parent.clone(),
        })
        .unwrap();
    ctx.store.delete_category(&parent).unwrap();
    // The subcategory keeps its dangling parent reference.
    assert_eq!(
        ctx.store.subcategories().first().unwrap().parent_category_id,
        parent
    );
}

#[test]
fn test_add_order_assigns_prefixed_id() {
    let mut ctx = TestContext::new();
    let snapshot = ctx
        .store
        .add_order(lipoimports_store::models::NewOrder {
            customer_name: "Carlos".into(),
            customer_last_name: "Lima".into(),
            customer_email: lipoimports_core::Email::parse("carlos@email.com").unwrap(),
            customer_phone: "(11) 90000-0000".into(),
            customer_cep: "01000-000".into(),
            customer_address: "Rua A, 1".into(),
            customer_neighborhood: "Centro".into(),
            customer_city: "São Paulo".into(),
            customer_state: "SP".into(),
            items: vec![lipoimports_store::models::OrderItem {
                product_id: ctx.store.products().first().unwrap().id.clone(),
                product_name: ctx.store.products().first().unwrap().name.clone(),
                quantity: 1,
                price: ctx.store.products().first().unwrap().price,
            }],
            total: ctx.store.products().first().unwrap().price,
            status: OrderStatus::Pending,
            tracking_code: None,
        })
        .unwrap();
    assert!(snapshot.last().unwrap().id.as_str().starts_with("ord-"));
}
