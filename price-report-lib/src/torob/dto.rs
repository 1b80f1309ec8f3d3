use crate::currency::{Rial, Toman};
use serde::{Deserialize, Serialize};

/// Cheapest price seen for one storage/RAM variant.
#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
pub struct PriceEntry {
    pub variant: &'static str,
    pub price_toman: Toman,
    pub source: &'static str,
}

impl PriceEntry {
    pub const fn new(variant: &'static str, price_toman: u64, source: &'static str) -> Self {
        Self {
            variant,
            price_toman: Toman(price_toman),
            source,
        }
    }

    pub const fn price_rial(&self) -> Rial {
        self.price_toman.to_rial()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct PriceRange {
    pub min: Toman,
    pub max: Toman,
}

impl PriceRange {
    pub fn of(entries: &[PriceEntry]) -> Option<Self> {
        let prices = entries.iter().map(|e| e.price_toman);
        Some(Self {
            min: prices.clone().min()?,
            max: prices.max()?,
        })
    }

    pub fn spread(&self) -> PriceSpread {
        let amount = self.max.0 - self.min.0;
        let percentage = if self.max.0 > 0 {
            (amount as f64 / self.max.0 as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };
        PriceSpread {
            amount: Toman(amount),
            percentage,
        }
    }
}

/// How much cheaper the lowest listing is than the highest one.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct PriceSpread {
    pub amount: Toman,
    /// Relative to the highest price, rounded to one decimal.
    pub percentage: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_range_of_unsorted_entries() {
        let entries = [
            PriceEntry::new("b", 200, "x"),
            PriceEntry::new("a", 100, "x"),
            PriceEntry::new("c", 150, "x"),
        ];
        let range = PriceRange::of(&entries).unwrap();

        assert_eq!(range.min, Toman(100));
        assert_eq!(range.max, Toman(200));
    }

    #[test]
    fn test_range_of_nothing() {
        assert_eq!(PriceRange::of(&[]), None);
    }

    #[test]
    fn test_spread() {
        let range = PriceRange {
            min: Toman(32_750_000),
            max: Toman(36_230_000),
        };
        let spread = range.spread();

        assert_eq!(spread.amount, Toman(3_480_000));
        assert_eq!(spread.percentage, 9.6);
    }

    #[test]
    fn test_spread_of_free_items() {
        let range = PriceRange {
            min: Toman(0),
            max: Toman(0),
        };

        assert_eq!(range.spread().percentage, 0.0);
    }
}
