use merchant_catalog::taxonomy::DEFAULT_TAXONOMY_URL;
use merchant_core::CompanyId;
use merchant_shared::Masked;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub google: GoogleConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GoogleConfig {
    pub merchant_id: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub access_token: Masked<String>,
    #[serde(default = "default_taxonomy_url")]
    pub taxonomy_url: String,
}

fn default_api_base_url() -> String {
    "https://www.googleapis.com/content/v2".to_string()
}

fn default_taxonomy_url() -> String {
    DEFAULT_TAXONOMY_URL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub taxonomy_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            taxonomy_path: PathBuf::from("data/google_taxonomy.json"),
        }
    }
}

/// Ambient values product mapping runs under
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExportConfig {
    pub language: Option<String>,
    pub company: Option<CompanyId>,
}

impl GoogleConfig {
    /// Content API endpoint for inserting products of this merchant
    pub fn products_url(&self) -> String {
        format!(
            "{}/{}/products",
            self.api_base_url.trim_end_matches('/'),
            self.merchant_id
        )
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in; holds the access token on developer machines
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `MERCHANT__GOOGLE__ACCESS_TOKEN=...`
            .add_source(config::Environment::with_prefix("MERCHANT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
