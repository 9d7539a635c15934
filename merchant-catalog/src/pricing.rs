use merchant_core::{BoxError, CompanyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::collaborators::CurrencyLookup;

/// Monetary amount in the Content API's `{value, currency}` shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    /// Decimal string, e.g. `"19.90"`
    pub value: String,
    pub currency: String,
}

impl Price {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value: amount.to_string(),
            currency: currency.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingRate {
    pub country: String,
    pub service: String,
    pub price: Price,
}

impl ShippingRate {
    /// Flat rate attached to every listing.
    pub fn standard_us() -> Self {
        Self {
            country: "US".to_string(),
            service: "Standard shipping".to_string(),
            price: Price {
                value: "0.99".to_string(),
                currency: "USD".to_string(),
            },
        }
    }
}

/// Currency table of the companies owning catalogs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyCurrencies {
    currencies: HashMap<CompanyId, String>,
}

impl CompanyCurrencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, company: CompanyId, code: impl Into<String>) {
        self.currencies.insert(company, code.into().to_uppercase());
    }
}

impl FromIterator<(CompanyId, String)> for CompanyCurrencies {
    fn from_iter<I: IntoIterator<Item = (CompanyId, String)>>(iter: I) -> Self {
        let mut table = CompanyCurrencies::new();
        for (company, code) in iter {
            table.insert(company, code);
        }
        table
    }
}

impl CurrencyLookup for CompanyCurrencies {
    fn currency_code(&self, company: CompanyId) -> Result<String, BoxError> {
        self.currencies
            .get(&company)
            .cloned()
            .ok_or_else(|| PricingError::UnknownCompany(company).into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("No currency configured for company {0}")]
    UnknownCompany(CompanyId),
}
