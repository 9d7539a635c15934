use merchant_core::BoxError;

use crate::channel::Website;
use crate::collaborators::{Route, StorefrontRouter};

/// Router for storefronts served from the website's base URL.
///
/// Product pages live under `/product/<uri>`, images under
/// `/static-file/<path>`.
#[derive(Debug, Clone, Default)]
pub struct WebsiteRouter;

impl WebsiteRouter {
    pub fn new() -> Self {
        Self
    }
}

impl StorefrontRouter for WebsiteRouter {
    fn url_for(&self, website: &Website, route: Route<'_>) -> Result<String, BoxError> {
        let base = website.base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(RoutingError::RelativeBaseUrl(website.base_url.clone()).into());
        }

        let url = match route {
            Route::Product(product) => {
                if product.uri.is_empty() {
                    return Err(RoutingError::MissingUri(product.id).into());
                }
                format!("{}/product/{}", base, product.uri)
            }
            Route::Image(image) => {
                format!("{}/static-file/{}", base, image.path.trim_start_matches('/'))
            }
        };

        Ok(url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("Website base URL is not absolute: {0:?}")]
    RelativeBaseUrl(String),
    #[error("Product {0} has no URI")]
    MissingUri(i64),
}
