use chrono::NaiveDate;
use merchant_core::{BoxError, LocationId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::collaborators::InventoryLookup;
use crate::product::ProductId;

/// A dated quantity change of a product at a storage location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockMove {
    pub product_id: ProductId,
    pub location: LocationId,
    pub effective_date: NaiveDate,
    /// Positive for receipts, negative for shipments.
    pub quantity: f64,
}

/// In-memory stock ledger
pub struct InventoryManager {
    locations: HashSet<LocationId>,
    moves: HashMap<(ProductId, LocationId), Vec<(NaiveDate, f64)>>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self {
            locations: HashSet::new(),
            moves: HashMap::new(),
        }
    }

    /// Register a storage location; lookups at unknown locations fail.
    pub fn add_location(&mut self, location: LocationId) {
        self.locations.insert(location);
    }

    /// Record a stock move, registering its location
    pub fn record(&mut self, stock_move: StockMove) {
        self.locations.insert(stock_move.location);
        self.moves
            .entry((stock_move.product_id, stock_move.location))
            .or_default()
            .push((stock_move.effective_date, stock_move.quantity));
    }

    /// Quantity on hand at the end of `as_of`
    pub fn quantity_on(
        &self,
        product_id: ProductId,
        location: LocationId,
        as_of: NaiveDate,
    ) -> Result<f64, InventoryError> {
        if !self.locations.contains(&location) {
            return Err(InventoryError::UnknownLocation(location));
        }

        let quantity = self
            .moves
            .get(&(product_id, location))
            .map(|moves| {
                moves
                    .iter()
                    .filter(|(date, _)| *date <= as_of)
                    .map(|(_, qty)| qty)
                    .sum::<f64>()
            })
            .unwrap_or(0.0);

        Ok(quantity)
    }
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<StockMove> for InventoryManager {
    fn from_iter<I: IntoIterator<Item = StockMove>>(iter: I) -> Self {
        let mut manager = InventoryManager::new();
        for stock_move in iter {
            manager.record(stock_move);
        }
        manager
    }
}

impl InventoryLookup for InventoryManager {
    fn quantity(
        &self,
        product: ProductId,
        location: LocationId,
        as_of: NaiveDate,
    ) -> Result<f64, BoxError> {
        Ok(self.quantity_on(product, location, as_of)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Unknown storage location: {0}")]
    UnknownLocation(LocationId),
}
