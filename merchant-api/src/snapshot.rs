use merchant_catalog::inventory::StockMove;
use merchant_catalog::{Channel, CompanyCurrencies, InventoryManager, Product};
use merchant_core::CompanyId;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCurrency {
    pub company: CompanyId,
    pub currency: String,
}

/// Catalog state exported from the ERP for one channel.
///
/// Stands in for the live product store when running the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub channel: Channel,
    #[serde(default)]
    pub companies: Vec<CompanyCurrency>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub stock: Vec<StockMove>,
}

impl CatalogSnapshot {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read snapshot {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid snapshot {}", path.display()))
    }

    pub fn inventory(&self) -> InventoryManager {
        let mut inventory: InventoryManager = self.stock.iter().cloned().collect();
        inventory.add_location(self.channel.warehouse.storage_location);
        inventory
    }

    pub fn currencies(&self) -> CompanyCurrencies {
        self.companies
            .iter()
            .map(|c| (c.company, c.currency.clone()))
            .collect()
    }
}
