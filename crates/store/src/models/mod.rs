//! Domain record types, one module per entity.
//!
//! Every record is a flat struct that serializes to the camelCase JSON shape
//! persisted in the record store. Mutations go through explicit `New*` drafts
//! (validated, id assigned on insert) and `*Patch` structs (every patchable
//! field enumerated - no structural "merge anything" semantics).

pub mod banner;
pub mod category;
pub mod coupon;
pub mod order;
pub mod payment;
pub mod product;
pub mod shipping;
pub mod user;
pub mod video;

pub use banner::{Banner, BannerPatch, NewBanner};
pub use category::{Category, CategoryPatch, NewCategory, NewSubCategory, SubCategory, SubCategoryPatch};
pub use coupon::{Coupon, CouponPatch, NewCoupon};
pub use order::{NewOrder, Order, OrderItem, OrderPatch};
pub use payment::{PaymentMethod, PaymentMethodPatch};
pub use product::{NewProduct, Product, ProductPatch};
pub use shipping::{ShippingIntegration, ShippingIntegrationPatch};
pub use user::User;
pub use video::{NewVideo, VideoPatch, VideoTestimonial};
