use merchant_core::LocationId;
use serde::{Deserialize, Serialize};

pub type ChannelId = i64;

/// `source` value of channels backed by the storefront
pub const WEBSHOP_SOURCE: &str = "webshop";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Website {
    pub id: i64,
    pub name: String,
    /// Absolute base URL, e.g. `https://shop.example.com`
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub storage_location: LocationId,
}

/// A sales outlet products are listed through
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub website: Option<Website>,
    pub warehouse: Warehouse,
}

/// Value of the `channel` field on a Content API product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingChannel {
    Online,
    Local,
}

impl Channel {
    pub fn is_webshop(&self) -> bool {
        self.source == WEBSHOP_SOURCE
    }

    pub fn listing_channel(&self) -> ListingChannel {
        if self.is_webshop() {
            ListingChannel::Online
        } else {
            ListingChannel::Local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(source: &str) -> Channel {
        Channel {
            id: 1,
            name: "Main".to_string(),
            source: source.to_string(),
            website: None,
            warehouse: Warehouse {
                id: 1,
                name: "WH".to_string(),
                storage_location: 4,
            },
        }
    }

    #[test]
    fn test_listing_channel() {
        assert_eq!(channel("webshop").listing_channel(), ListingChannel::Online);
        assert_eq!(channel("pos").listing_channel(), ListingChannel::Local);
        assert_eq!(channel("Webshop").listing_channel(), ListingChannel::Local);
        assert_eq!(channel("").listing_channel(), ListingChannel::Local);
    }
}
