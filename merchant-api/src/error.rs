use merchant_core::{BoxError, FeedError};

/// Failures talking to Google over HTTP
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Google API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not decode Google API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No access token configured for the Content API")]
    MissingToken,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Could not map product {product_id}: {source}")]
    Mapping {
        product_id: i64,
        #[source]
        source: FeedError,
    },
    #[error("Submitting {offer_id} failed: {source}")]
    Submission {
        offer_id: String,
        #[source]
        source: BoxError,
    },
    #[error("Could not serialize {offer_id}: {source}")]
    Serialize {
        offer_id: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Fetching the taxonomy failed: {0}")]
    Fetch(#[source] BoxError),
    #[error(transparent)]
    Import(#[from] FeedError),
}
