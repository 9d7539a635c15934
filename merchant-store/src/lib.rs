pub mod app_config;
pub mod taxonomy_repo;

pub use app_config::Config;
pub use taxonomy_repo::JsonTaxonomyRepository;
