//! Machine readable form of the price report.

use crate::currency::{Rial, Toman};
use crate::torob::{
    dto::{PriceEntry, PriceRange, PriceSpread},
    listings::{NOTES, PRODUCT_NAME, SEARCH_QUERY, SOURCE},
    search::search_url,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct EntrySnapshot {
    pub variant: String,
    pub price_toman: Toman,
    pub price_rial: Rial,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ReportSnapshot {
    pub product: String,
    pub source: String,
    pub entries: Vec<EntrySnapshot>,
    pub range: Option<PriceRange>,
    pub spread: Option<PriceSpread>,
    pub notes: Vec<String>,
    pub search_query: String,
    pub search_url: String,
}

impl ReportSnapshot {
    pub fn from_listings(entries: &[PriceEntry]) -> Self {
        let range = PriceRange::of(entries);
        Self {
            product: PRODUCT_NAME.to_string(),
            source: SOURCE.to_string(),
            entries: entries
                .iter()
                .map(|e| EntrySnapshot {
                    variant: e.variant.to_string(),
                    price_toman: e.price_toman,
                    price_rial: e.price_rial(),
                })
                .collect(),
            range,
            spread: range.map(|r| r.spread()),
            notes: NOTES.iter().map(|n| n.to_string()).collect(),
            search_query: SEARCH_QUERY.to_string(),
            search_url: search_url(SEARCH_QUERY),
        }
    }
}
