//! Print a collection as pretty JSON.

use clap::ValueEnum;

use lipoimports_store::{Store, StoreConfig};

/// Collections the `show` command can print.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Target {
    Products,
    Categories,
    Subcategories,
    Videos,
    Orders,
    Coupons,
    PaymentMethods,
    ShippingIntegrations,
    Banners,
}

/// Open the store and print the chosen collection.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the collection cannot be
/// serialized.
#[allow(clippy::print_stdout)] // printing is this command's output
pub fn run(config: &StoreConfig, target: Target) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open(config)?;

    let json = match target {
        Target::Products => serde_json::to_string_pretty(store.products())?,
        Target::Categories => serde_json::to_string_pretty(store.categories())?,
        Target::Subcategories => serde_json::to_string_pretty(store.subcategories())?,
        Target::Videos => serde_json::to_string_pretty(store.videos())?,
        Target::Orders => serde_json::to_string_pretty(store.orders())?,
        Target::Coupons => serde_json::to_string_pretty(store.coupons())?,
        Target::PaymentMethods => serde_json::to_string_pretty(store.payment_methods())?,
        Target::ShippingIntegrations => {
            serde_json::to_string_pretty(store.shipping_integrations())?
        }
        Target::Banners => serde_json::to_string_pretty(store.banners())?,
    };

    println!("{json}");
    Ok(())
}
