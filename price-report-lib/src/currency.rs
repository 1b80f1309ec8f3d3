//! Iranian currency amounts and the display formatting used by the report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One toman is ten rials.
pub const TOMAN_TO_RIAL: u64 = 10;

/// Amount in toman, the unit shops and price sites quote in.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Toman(pub u64);

/// Amount in rial, the official unit.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Rial(pub u64);

impl Toman {
    pub const fn to_rial(self) -> Rial {
        Rial(self.0.saturating_mul(TOMAN_TO_RIAL))
    }

    pub fn grouped(&self) -> String {
        group_thousands(self.0)
    }

    /// Grouped amount written with Persian digits, e.g. `۳۲,۷۵۰,۰۰۰`.
    pub fn grouped_persian(&self) -> String {
        to_persian_digits(&self.grouped())
    }
}

impl Rial {
    pub fn grouped(&self) -> String {
        group_thousands(self.0)
    }
}

impl From<Toman> for Rial {
    fn from(toman: Toman) -> Self {
        toman.to_rial()
    }
}

impl fmt::Display for Toman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grouped().fmt(f)
    }
}

impl fmt::Display for Rial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grouped().fmt(f)
    }
}

/// Inserts a comma between every group of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Replaces ASCII digits with their Persian (U+06F0..U+06F9) counterparts.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32('\u{06F0}' as u32 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(32_750_000), "32,750,000");
        assert_eq!(group_thousands(362_300_000), "362,300,000");
    }

    #[test]
    fn test_toman_to_rial() {
        assert_eq!(Toman(32_750_000).to_rial(), Rial(327_500_000));
        assert_eq!(Rial::from(Toman(36_230_000)), Rial(362_300_000));
        assert_eq!(Toman(u64::MAX).to_rial(), Rial(u64::MAX));
    }

    #[test]
    fn test_persian_digits() {
        assert_eq!(Toman(32_750_000).grouped_persian(), "۳۲,۷۵۰,۰۰۰");
        assert_eq!(Toman(36_230_000).grouped_persian(), "۳۶,۲۳۰,۰۰۰");
        assert_eq!(to_persian_digits("A56 5G"), "A۵۶ ۵G");
    }

    #[test]
    fn test_display_is_grouped() {
        assert_eq!(Rial(327_500_000).to_string(), "327,500,000");
        assert_eq!(format!("{}", Toman(1_234)), "1,234");
    }
}
