use merchant_catalog::taxonomy::{import_taxonomy, GoogleTaxonomy, TaxonomyRepository};
use merchant_catalog::{CatalogMapper, Channel, ExternalCatalogEntry, Product};
use merchant_core::{MapContext, ProductSubmitter, TaxonomySource};
use tracing::{info, warn};

use crate::error::{RefreshError, UploadError};

/// Map every product listed through `channel`, in order.
pub fn export_channel(
    mapper: &CatalogMapper<'_>,
    channel: &Channel,
    products: &[Product],
    ctx: &MapContext,
) -> Result<Vec<ExternalCatalogEntry>, UploadError> {
    products
        .iter()
        .map(|product| {
            mapper
                .map_product(product, channel, ctx)
                .map_err(|source| UploadError::Mapping {
                    product_id: product.id,
                    source,
                })
        })
        .collect()
}

/// Submit entries one after another, stopping at the first failure.
///
/// Returns the offer ids that were accepted.
pub async fn submit_entries<S>(
    submitter: &S,
    entries: &[ExternalCatalogEntry],
) -> Result<Vec<String>, UploadError>
where
    S: ProductSubmitter + ?Sized,
{
    let mut submitted = Vec::with_capacity(entries.len());

    for entry in entries {
        let payload = serde_json::to_value(entry).map_err(|source| UploadError::Serialize {
            offer_id: entry.offer_id.clone(),
            source,
        })?;

        if let Err(source) = submitter.submit_product(&payload).await {
            warn!(
                "Upload stopped at {} after {} products",
                entry.offer_id,
                submitted.len()
            );
            return Err(UploadError::Submission {
                offer_id: entry.offer_id.clone(),
                source,
            });
        }
        submitted.push(entry.offer_id.clone());
    }

    info!("Uploaded {} products to Merchant Center", submitted.len());
    Ok(submitted)
}

/// Map and upload all products of a channel.
///
/// Every product is mapped before the first request goes out, so a product
/// that cannot be mapped aborts the run without touching Merchant Center.
pub async fn upload_channel_products<S>(
    mapper: &CatalogMapper<'_>,
    submitter: &S,
    channel: &Channel,
    products: &[Product],
    ctx: &MapContext,
) -> Result<Vec<String>, UploadError>
where
    S: ProductSubmitter + ?Sized,
{
    let entries = export_channel(mapper, channel, products, ctx)?;
    submit_entries(submitter, &entries).await
}

/// Fetch the taxonomy feed and store the entries not yet known.
pub async fn refresh_taxonomy<S, R>(
    source: &S,
    repo: &mut R,
) -> Result<Vec<GoogleTaxonomy>, RefreshError>
where
    S: TaxonomySource + ?Sized,
    R: TaxonomyRepository + ?Sized,
{
    let text = source.fetch_taxonomy().await.map_err(RefreshError::Fetch)?;
    Ok(import_taxonomy(&text, repo)?)
}
