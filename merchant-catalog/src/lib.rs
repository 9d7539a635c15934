pub mod channel;
pub mod collaborators;
pub mod google;
pub mod inventory;
pub mod pricing;
pub mod product;
pub mod routing;
pub mod taxonomy;

pub use channel::{Channel, ListingChannel, Warehouse, Website};
pub use collaborators::{CurrencyLookup, InventoryLookup, Route, StorefrontRouter};
pub use google::{CatalogMapper, ExternalCatalogEntry};
pub use inventory::InventoryManager;
pub use pricing::CompanyCurrencies;
pub use product::{Attribute, AttributeType, AttributeValue, Product, ProductAttribute};
pub use routing::WebsiteRouter;
pub use taxonomy::{import_taxonomy, GoogleTaxonomy, InMemoryTaxonomyRepository, TaxonomyRepository};
