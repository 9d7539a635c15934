pub mod client;
pub mod error;
pub mod snapshot;
pub mod uploader;

pub use client::{ContentApiClient, HttpTaxonomySource};
pub use error::{ClientError, RefreshError, UploadError};
pub use snapshot::CatalogSnapshot;
pub use uploader::{export_channel, refresh_taxonomy, submit_entries, upload_channel_products};
