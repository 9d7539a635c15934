use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CompanyId, FeedError, FeedResult, LocationId};

/// Ambient state a product mapping runs under.
///
/// Everything the mapper would otherwise pull from a request or transaction
/// (active language, owning company, stock date) travels in this value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapContext {
    /// Content language of the listing, e.g. `en`.
    pub locale: Option<String>,

    /// Company that owns the catalog; its currency prices the entry.
    pub company: Option<CompanyId>,

    /// Date stock is computed for.
    pub as_of: NaiveDate,

    /// Overrides the channel warehouse's storage location when set.
    pub location: Option<LocationId>,
}

impl MapContext {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            locale: None,
            company: None,
            as_of,
            location: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_company(mut self, company: CompanyId) -> Self {
        self.company = Some(company);
        self
    }

    pub fn with_location(mut self, location: LocationId) -> Self {
        self.location = Some(location);
        self
    }

    pub fn require_locale(&self) -> FeedResult<&str> {
        self.locale
            .as_deref()
            .filter(|l| !l.is_empty())
            .ok_or(FeedError::MissingContext("locale"))
    }

    pub fn require_company(&self) -> FeedResult<CompanyId> {
        self.company.ok_or(FeedError::MissingContext("company"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_missing_locale_and_company() {
        let ctx = MapContext::new(today());
        assert!(matches!(ctx.require_locale(), Err(FeedError::MissingContext("locale"))));
        assert!(matches!(ctx.require_company(), Err(FeedError::MissingContext("company"))));
    }

    #[test]
    fn test_empty_locale_counts_as_missing() {
        let ctx = MapContext::new(today()).with_locale("");
        assert!(ctx.require_locale().is_err());
    }

    #[test]
    fn test_builder_sets_fields() {
        let ctx = MapContext::new(today())
            .with_locale("en")
            .with_company(7)
            .with_location(3);
        assert_eq!(ctx.require_locale().unwrap(), "en");
        assert_eq!(ctx.require_company().unwrap(), 7);
        assert_eq!(ctx.location, Some(3));
    }
}
