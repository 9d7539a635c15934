pub mod context;
pub mod transport;

pub use context::MapContext;
pub use transport::{ProductSubmitter, TaxonomySource};

/// Error type of collaborators the catalog logic calls into.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type CompanyId = i64;
pub type LocationId = i64;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Missing required context: {0}")]
    MissingContext(&'static str),
    #[error("Malformed taxonomy identifier: {0}")]
    MalformedIdentifier(String),
    #[error("Inventory lookup failed: {0}")]
    Inventory(#[source] BoxError),
    #[error("URL generation failed: {0}")]
    Routing(#[source] BoxError),
    #[error("Currency lookup failed: {0}")]
    Currency(#[source] BoxError),
    #[error("Taxonomy storage failed: {0}")]
    Storage(#[source] BoxError),
}

pub type FeedResult<T> = Result<T, FeedError>;
