//! Seams between the mapper and the systems that own stock, URLs and money.

use chrono::NaiveDate;
use merchant_core::{BoxError, CompanyId, LocationId};

use crate::channel::Website;
use crate::product::{Image, Product, ProductId};

/// Computes on-hand quantity of a product.
pub trait InventoryLookup {
    fn quantity(
        &self,
        product: ProductId,
        location: LocationId,
        as_of: NaiveDate,
    ) -> Result<f64, BoxError>;
}

/// Storefront page or file a URL is generated for
#[derive(Debug, Clone, Copy)]
pub enum Route<'a> {
    Product(&'a Product),
    Image(&'a Image),
}

/// Builds fully-qualified storefront URLs.
pub trait StorefrontRouter {
    fn url_for(&self, website: &Website, route: Route<'_>) -> Result<String, BoxError>;
}

/// Resolves the currency a company sells in.
pub trait CurrencyLookup {
    fn currency_code(&self, company: CompanyId) -> Result<String, BoxError>;
}
