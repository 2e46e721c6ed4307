//! The [`Store`] facade: one typed collection per entity.
//!
//! Hydrates every collection once at open time (seeding absent keys in
//! memory) and funnels all mutations through draft validation, patch
//! application and whole-document persistence. Mutations hand back the new
//! collection snapshot.

use std::sync::Arc;

use lipoimports_core::{
    BannerId, CategoryId, CouponId, OrderId, PaymentMethodId, ProductId, ShippingIntegrationId,
    Slug, SubCategoryId, VideoId,
};

use crate::collection::Collection;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::{
    Banner, BannerPatch, Category, CategoryPatch, Coupon, CouponPatch, NewBanner, NewCategory,
    NewCoupon, NewOrder, NewProduct, NewSubCategory, NewVideo, Order, OrderPatch, PaymentMethod,
    PaymentMethodPatch, Product, ProductPatch, ShippingIntegration, ShippingIntegrationPatch,
    SubCategory, SubCategoryPatch, VideoPatch, VideoTestimonial,
};
use crate::seed;
use crate::storage::{FileStore, RecordStore};

/// All domain collections behind one handle.
pub struct Store {
    record_store: Arc<dyn RecordStore>,
    products: Collection<Product>,
    categories: Collection<Category>,
    subcategories: Collection<SubCategory>,
    videos: Collection<VideoTestimonial>,
    orders: Collection<Order>,
    coupons: Collection<Coupon>,
    payment_methods: Collection<PaymentMethod>,
    shipping_integrations: Collection<ShippingIntegration>,
    banners: Collection<Banner>,
}

impl Store {
    /// Open a file-backed store under the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created or any
    /// stored collection document is unreadable or corrupt.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let file_store = FileStore::open(config.data_dir.clone())?;
        tracing::info!(data_dir = %file_store.root().display(), "opening store");
        Self::with_record_store(Arc::new(file_store))
    }

    /// Open the store over an arbitrary record store.
    ///
    /// # Errors
    ///
    /// Returns a storage error if any stored collection document is
    /// unreadable or corrupt.
    pub fn with_record_store(record_store: Arc<dyn RecordStore>) -> Result<Self> {
        Ok(Self {
            products: Collection::hydrate(record_store.clone(), seed::products)?,
            categories: Collection::hydrate(record_store.clone(), seed::categories)?,
            subcategories: Collection::hydrate(record_store.clone(), seed::subcategories)?,
            videos: Collection::hydrate(record_store.clone(), seed::videos)?,
            orders: Collection::hydrate(record_store.clone(), seed::orders)?,
            coupons: Collection::hydrate(record_store.clone(), seed::coupons)?,
            payment_methods: Collection::hydrate(record_store.clone(), seed::payment_methods)?,
            shipping_integrations: Collection::hydrate(
                record_store.clone(),
                seed::shipping_integrations,
            )?,
            banners: Collection::hydrate(record_store.clone(), seed::banners)?,
            record_store,
        })
    }

    /// The underlying record store, shared with the cart, session and
    /// settings services.
    #[must_use]
    pub fn record_store(&self) -> Arc<dyn RecordStore> {
        self.record_store.clone()
    }

    // --- Products ---

    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.products.list()
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.find(id)
    }

    /// Look up a product by its URL slug.
    #[must_use]
    pub fn product_by_slug(&self, slug: &Slug) -> Option<&Product> {
        self.products.list().iter().find(|p| &p.slug == slug)
    }

    /// Validate and insert a new product; the installment price is derived on
    /// insert.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid draft, or a storage
    /// error.
    pub fn add_product(&mut self, new: NewProduct) -> Result<&[Product]> {
        new.validate()?;
        let product = new.into_record();
        tracing::info!(id = %product.id, name = %product.name, "product created");
        Ok(self.products.insert(product)?)
    }

    /// Patch a product and recompute its installment price. An absent id is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid patch, or a storage
    /// error.
    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) -> Result<&[Product]> {
        patch.validate()?;
        Ok(self.products.update_with(id, |p| patch.apply(p))?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<&[Product]> {
        tracing::info!(%id, "product deleted");
        Ok(self.products.remove(id)?)
    }

    // --- Categories ---

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.categories.list()
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid draft, or a storage
    /// error.
    pub fn add_category(&mut self, new: NewCategory) -> Result<&[Category]> {
        new.validate()?;
        Ok(self.categories.insert(new.into_record())?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn update_category(&mut self, id: &CategoryId, patch: CategoryPatch) -> Result<&[Category]> {
        Ok(self.categories.update_with(id, |c| patch.apply(c))?)
    }

    /// Delete a category. Products referencing its slug and subcategories
    /// referencing its id are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn delete_category(&mut self, id: &CategoryId) -> Result<&[Category]> {
        Ok(self.categories.remove(id)?)
    }

    // --- Subcategories ---

    #[must_use]
    pub fn subcategories(&self) -> &[SubCategory] {
        self.subcategories.list()
    }

    /// Insert a subcategory. The parent category reference is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid draft, or a storage
    /// error.
    pub fn add_subcategory(&mut self, new: NewSubCategory) -> Result<&[SubCategory]> {
        new.validate()?;
        Ok(self.subcategories.insert(new.into_record())?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn update_subcategory(
        &mut self,
        id: &SubCategoryId,
        patch: SubCategoryPatch,
    ) -> Result<&[SubCategory]> {
        Ok(self.subcategories.update_with(id, |s| patch.apply(s))?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn delete_subcategory(&mut self, id: &SubCategoryId) -> Result<&[SubCategory]> {
        Ok(self.subcategories.remove(id)?)
    }

    // --- Video testimonials ---

    #[must_use]
    pub fn videos(&self) -> &[VideoTestimonial] {
        self.videos.list()
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid draft, or a storage
    /// error.
    pub fn add_video(&mut self, new: NewVideo) -> Result<&[VideoTestimonial]> {
        new.validate()?;
        Ok(self.videos.insert(new.into_record())?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn update_video(&mut self, id: &VideoId, patch: VideoPatch) -> Result<&[VideoTestimonial]> {
        Ok(self.videos.update_with(id, |v| patch.apply(v))?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn delete_video(&mut self, id: &VideoId) -> Result<&[VideoTestimonial]> {
        Ok(self.videos.remove(id)?)
    }

    // --- Orders ---

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        self.orders.list()
    }

    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.find(id)
    }

    /// Place an order. The id (`ord-` prefixed) and creation timestamp are
    /// assigned here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid draft, or a storage
    /// error.
    pub fn add_order(&mut self, new: NewOrder) -> Result<&[Order]> {
        new.validate()?;
        let order = new.into_record();
        tracing::info!(id = %order.id, total = %order.total, "order placed");
        Ok(self.orders.insert(order)?)
    }

    /// Patch an order's fulfillment fields. Orders are never deleted.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn update_order(&mut self, id: &OrderId, patch: OrderPatch) -> Result<&[Order]> {
        Ok(self.orders.update_with(id, |o| patch.apply(o))?)
    }

    // --- Coupons ---

    #[must_use]
    pub fn coupons(&self) -> &[Coupon] {
        self.coupons.list()
    }

    /// Validate and insert a new coupon. Codes are unique case-insensitively
    /// across the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid draft or a duplicate
    /// code, or a storage error.
    pub fn add_coupon(&mut self, new: NewCoupon) -> Result<&[Coupon]> {
        new.validate()?;
        if self
            .coupons
            .list()
            .iter()
            .any(|c| c.matches_code(&new.code))
        {
            return Err(StoreError::Validation(format!(
                "coupon code {:?} already exists",
                new.code
            )));
        }
        Ok(self.coupons.insert(new.into_record())?)
    }

    /// Patch a coupon. A code change is checked for collisions against every
    /// other coupon.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid patch or a duplicate
    /// code, or a storage error.
    pub fn update_coupon(&mut self, id: &CouponId, patch: CouponPatch) -> Result<&[Coupon]> {
        patch.validate()?;
        if let Some(code) = patch.code.as_deref()
            && self
                .coupons
                .list()
                .iter()
                .any(|c| &c.id != id && c.matches_code(code))
        {
            return Err(StoreError::Validation(format!(
                "coupon code {code:?} already exists"
            )));
        }
        Ok(self.coupons.update_with(id, |c| patch.apply(c))?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn delete_coupon(&mut self, id: &CouponId) -> Result<&[Coupon]> {
        Ok(self.coupons.remove(id)?)
    }

    // --- Payment methods ---

    #[must_use]
    pub fn payment_methods(&self) -> &[PaymentMethod] {
        self.payment_methods.list()
    }

    /// Patch a payment method. The collection is fixed; methods are toggled
    /// and reconfigured but never added or removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn update_payment_method(
        &mut self,
        id: &PaymentMethodId,
        patch: PaymentMethodPatch,
    ) -> Result<&[PaymentMethod]> {
        Ok(self.payment_methods.update_with(id, |m| patch.apply(m))?)
    }

    // --- Shipping integrations ---

    #[must_use]
    pub fn shipping_integrations(&self) -> &[ShippingIntegration] {
        self.shipping_integrations.list()
    }

    /// Patch a shipping integration. Fixed collection, same as payment
    /// methods.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn update_shipping_integration(
        &mut self,
        id: &ShippingIntegrationId,
        patch: ShippingIntegrationPatch,
    ) -> Result<&[ShippingIntegration]> {
        Ok(self
            .shipping_integrations
            .update_with(id, |s| patch.apply(s))?)
    }

    // --- Banners ---

    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        self.banners.list()
    }

    /// Insert a banner at the end of the sort order (one past the current
    /// maximum, or 1 for an empty collection).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an invalid draft, or a storage
    /// error.
    pub fn add_banner(&mut self, new: NewBanner) -> Result<&[Banner]> {
        new.validate()?;
        let order = self
            .banners
            .list()
            .iter()
            .map(|b| b.order)
            .max()
            .map_or(1, |max| max + 1);
        Ok(self.banners.insert(new.into_record(order))?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn update_banner(&mut self, id: &BannerId, patch: BannerPatch) -> Result<&[Banner]> {
        Ok(self.banners.update_with(id, |b| patch.apply(b))?)
    }

    /// # Errors
    ///
    /// Returns a storage error.
    pub fn delete_banner(&mut self, id: &BannerId) -> Result<&[Banner]> {
        Ok(self.banners.remove(id)?)
    }

    /// Reassign every banner's sort position from its index in `ids`, then
    /// sort the collection. A banner whose id is missing from `ids` gets
    /// order `-1` and therefore sorts first.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn reorder_banners(&mut self, ids: &[BannerId]) -> Result<&[Banner]> {
        let mut reordered: Vec<Banner> = self
            .banners
            .list()
            .iter()
            .cloned()
            .map(|mut banner| {
                // Banner counts stay far below i32::MAX.
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let order = ids
                    .iter()
                    .position(|id| id == &banner.id)
                    .map_or(-1, |pos| pos as i32);
                banner.order = order;
                banner
            })
            .collect();
        reordered.sort_by_key(|b| b.order);
        Ok(self.banners.replace_all(reordered)?)
    }
}
