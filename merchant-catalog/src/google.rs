//! Product resources for the Google Content API.
//!
//! [`CatalogMapper::map_product`] turns a catalog product listed through a
//! channel into the JSON body the `products.insert` call expects. Stock, URLs
//! and currency come from injected collaborators; nothing here does I/O.

use merchant_core::{FeedError, FeedResult, MapContext};
use serde::Serialize;

use crate::channel::{Channel, ListingChannel};
use crate::collaborators::{CurrencyLookup, InventoryLookup, Route, StorefrontRouter};
use crate::pricing::{Price, ShippingRate};
use crate::product::{AttributeValue, GoogleType, Product, ProductId};

pub const PRODUCT_KIND: &str = "content#product";
pub const TARGET_COUNTRY: &str = "US";
pub const CONDITION_NEW: &str = "new";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Availability {
    #[serde(rename = "in stock")]
    InStock,
    #[serde(rename = "out of stock")]
    OutOfStock,
}

impl Availability {
    pub fn from_quantity(quantity: f64) -> Self {
        if quantity > 0.0 {
            Availability::InStock
        } else {
            Availability::OutOfStock
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: GoogleType,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShippingWeight {
    pub value: Option<f64>,
    pub unit: Option<String>,
}

/// A product resource ready to be sent to Merchant Center
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalCatalogEntry {
    pub kind: String,
    pub id: ProductId,
    pub mpn: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub offer_id: String,
    pub channel: ListingChannel,
    pub content_language: String,
    pub custom_attributes: Vec<CustomAttribute>,
    pub target_country: String,
    pub condition: String,
    pub price: Price,
    pub shipping: Vec<ShippingRate>,
    pub shipping_weight: ShippingWeight,
    pub link: String,
    pub image_link: Option<String>,
    pub additional_image_links: Vec<String>,
    pub availability: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_product_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<AttributeValue>,
}

/// Top-level fields fed from well-known attribute names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromotedField {
    Brand,
    Color,
    Material,
    Pattern,
}

impl PromotedField {
    fn for_attribute(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "brand" => Some(PromotedField::Brand),
            "color" | "colour" => Some(PromotedField::Color),
            "material" => Some(PromotedField::Material),
            "pattern" => Some(PromotedField::Pattern),
            _ => None,
        }
    }
}

pub fn offer_id(channel: &Channel, product: &Product) -> String {
    format!("{}:{}", channel.id, product.id)
}

/// Maps catalog products to Content API resources
pub struct CatalogMapper<'a> {
    inventory: &'a dyn InventoryLookup,
    router: &'a dyn StorefrontRouter,
    currencies: &'a dyn CurrencyLookup,
}

impl<'a> CatalogMapper<'a> {
    pub fn new(
        inventory: &'a dyn InventoryLookup,
        router: &'a dyn StorefrontRouter,
        currencies: &'a dyn CurrencyLookup,
    ) -> Self {
        Self {
            inventory,
            router,
            currencies,
        }
    }

    pub fn map_product(
        &self,
        product: &Product,
        channel: &Channel,
        ctx: &MapContext,
    ) -> FeedResult<ExternalCatalogEntry> {
        let content_language = ctx.require_locale()?.to_string();
        let company = ctx.require_company()?;
        let website = channel
            .website
            .as_ref()
            .ok_or(FeedError::MissingContext("website"))?;
        let location = ctx
            .location
            .unwrap_or(channel.warehouse.storage_location);

        let quantity = self
            .inventory
            .quantity(product.id, location, ctx.as_of)
            .map_err(FeedError::Inventory)?;

        let currency = self
            .currencies
            .currency_code(company)
            .map_err(FeedError::Currency)?;

        let link = self
            .router
            .url_for(website, Route::Product(product))
            .map_err(FeedError::Routing)?;
        let image_link = product
            .default_image
            .as_ref()
            .map(|image| self.router.url_for(website, Route::Image(image)))
            .transpose()
            .map_err(FeedError::Routing)?;
        let additional_image_links = product
            .additional_images()
            .map(|image| self.router.url_for(website, Route::Image(image)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(FeedError::Routing)?;

        let mut entry = ExternalCatalogEntry {
            kind: PRODUCT_KIND.to_string(),
            id: product.id,
            mpn: product.code.clone(),
            title: product.name.clone(),
            description: product.description.clone(),
            offer_id: offer_id(channel, product),
            channel: channel.listing_channel(),
            content_language,
            custom_attributes: Vec::new(),
            target_country: TARGET_COUNTRY.to_string(),
            condition: CONDITION_NEW.to_string(),
            price: Price::new(product.list_price, currency),
            shipping: vec![ShippingRate::standard_us()],
            shipping_weight: ShippingWeight {
                value: product.weight,
                unit: product.weight_uom.as_ref().map(|uom| uom.name.clone()),
            },
            link,
            image_link,
            additional_image_links,
            availability: Availability::from_quantity(quantity),
            google_product_category: product
                .google_product_category
                .as_ref()
                .map(|category| category.name.clone()),
            product_type: None,
            brand: None,
            color: None,
            material: None,
            pattern: None,
        };

        if !product.google_product_types.is_empty() {
            let names: Vec<&str> = product
                .google_product_types
                .iter()
                .map(|taxonomy| taxonomy.name.as_str())
                .collect();
            entry.product_type = Some(names.join(","));
        }

        for pair in product.attribute_values() {
            let name = pair.attribute.rec_name();
            entry.custom_attributes.push(CustomAttribute {
                name: name.to_string(),
                type_: pair.attribute.type_.google_type(),
                value: pair.value.clone(),
            });

            let slot = match PromotedField::for_attribute(name) {
                Some(PromotedField::Brand) => &mut entry.brand,
                Some(PromotedField::Color) => &mut entry.color,
                Some(PromotedField::Material) => &mut entry.material,
                Some(PromotedField::Pattern) => &mut entry.pattern,
                None => continue,
            };
            *slot = Some(pair.value.clone());
        }

        tracing::debug!(
            offer_id = %entry.offer_id,
            quantity,
            attributes = entry.custom_attributes.len(),
            "Mapped product for Merchant Center"
        );

        Ok(entry)
    }
}
