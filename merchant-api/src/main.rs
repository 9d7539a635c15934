use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use merchant_api::{
    export_channel, refresh_taxonomy, upload_channel_products, CatalogSnapshot, ContentApiClient,
    HttpTaxonomySource,
};
use merchant_catalog::{CatalogMapper, WebsiteRouter};
use merchant_core::MapContext;
use merchant_store::{Config, JsonTaxonomyRepository};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str =
    "merchant_feed=info,merchant_api=info,merchant_catalog=info,merchant_store=info";

#[derive(Parser)]
#[command(name = "merchant-feed", about = "Google Merchant Center feed tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the Google product taxonomy and store new entries
    Taxonomy {
        /// Override the configured feed URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the Content API resources of a catalog snapshot as JSON
    Export {
        snapshot: PathBuf,
        /// Stock date, defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Map a catalog snapshot and insert every product into Merchant Center
    Upload {
        snapshot: PathBuf,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

fn map_context(config: &Config, as_of: Option<NaiveDate>) -> MapContext {
    let as_of = as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
    MapContext {
        locale: config.export.language.clone(),
        company: config.export.company,
        as_of,
        location: None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;

    match cli.command {
        Command::Taxonomy { url } => {
            let url = url.unwrap_or_else(|| config.google.taxonomy_url.clone());
            let source = HttpTaxonomySource::new(url);
            let mut repo = JsonTaxonomyRepository::open(&config.storage.taxonomy_path)?;

            let created = refresh_taxonomy(&source, &mut repo).await?;
            tracing::info!(
                "Created {} taxonomy rows, {} stored in {}",
                created.len(),
                repo.rows().len(),
                repo.path().display()
            );
        }
        Command::Export { snapshot, as_of } => {
            let snapshot = CatalogSnapshot::load(&snapshot)?;
            let ctx = map_context(&config, as_of);
            let inventory = snapshot.inventory();
            let currencies = snapshot.currencies();
            let router = WebsiteRouter::new();
            let mapper = CatalogMapper::new(&inventory, &router, &currencies);

            let entries = export_channel(&mapper, &snapshot.channel, &snapshot.products, &ctx)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Upload { snapshot, as_of } => {
            let snapshot = CatalogSnapshot::load(&snapshot)?;
            let ctx = map_context(&config, as_of);
            let inventory = snapshot.inventory();
            let currencies = snapshot.currencies();
            let router = WebsiteRouter::new();
            let mapper = CatalogMapper::new(&inventory, &router, &currencies);
            let client = ContentApiClient::new(&config.google);

            tracing::info!(
                "Uploading {} products of channel {} to {}",
                snapshot.products.len(),
                snapshot.channel.name,
                client.products_url()
            );
            let offers = upload_channel_products(
                &mapper,
                &client,
                &snapshot.channel,
                &snapshot.products,
                &ctx,
            )
            .await?;
            for offer_id in offers {
                println!("{}", offer_id);
            }
        }
    }

    Ok(())
}
