//! Price filter used to narrow the product catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::Price;

/// Upper bound (exclusive) of the low bucket.
const LOW_CEILING: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Upper bound (exclusive) of the mid bucket.
const MID_CEILING: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Price bucket selected in the catalog filter.
///
/// Buckets are mutually exclusive: low is below 100, mid covers
/// 100 up to (not including) 150, high is 150 and above. `All` applies no
/// price constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceFilter {
    #[default]
    All,
    Low,
    Mid,
    High,
}

impl PriceFilter {
    /// Whether `price` falls in this bucket.
    ///
    /// Only the amount is compared; the catalog is single-currency.
    #[must_use]
    pub fn matches(&self, price: &Price) -> bool {
        let amount = price.amount();
        match self {
            Self::All => true,
            Self::Low => amount < LOW_CEILING,
            Self::Mid => amount >= LOW_CEILING && amount < MID_CEILING,
            Self::High => amount >= MID_CEILING,
        }
    }
}

impl std::fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Low => write!(f, "low"),
            Self::Mid => write!(f, "mid"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for PriceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "high" => Ok(Self::High),
            _ => Err(format!("invalid price filter: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CurrencyCode;

    fn eur(minor: i64) -> Price {
        Price::from_minor_units(minor, CurrencyCode::EUR)
    }

    #[test]
    fn test_bucket_boundaries() {
        assert!(PriceFilter::Low.matches(&eur(9_999)));
        assert!(!PriceFilter::Low.matches(&eur(10_000)));

        assert!(PriceFilter::Mid.matches(&eur(10_000)));
        assert!(PriceFilter::Mid.matches(&eur(14_999)));
        assert!(!PriceFilter::Mid.matches(&eur(15_000)));

        assert!(PriceFilter::High.matches(&eur(15_000)));
        assert!(!PriceFilter::High.matches(&eur(14_999)));
    }

    #[test]
    fn test_all_matches_everything() {
        for minor in [0, 4_900, 14_900, 1_000_000] {
            assert!(PriceFilter::All.matches(&eur(minor)));
        }
    }

    #[test]
    fn test_buckets_are_exclusive() {
        let buckets = [PriceFilter::Low, PriceFilter::Mid, PriceFilter::High];
        for minor in [0, 9_900, 10_000, 14_900, 15_000, 19_900] {
            let hits = buckets.iter().filter(|b| b.matches(&eur(minor))).count();
            assert_eq!(hits, 1, "price {minor} should land in exactly one bucket");
        }
    }

    #[test]
    fn test_string_round_trip() {
        for filter in [
            PriceFilter::All,
            PriceFilter::Low,
            PriceFilter::Mid,
            PriceFilter::High,
        ] {
            assert_eq!(filter.to_string().parse::<PriceFilter>().unwrap(), filter);
        }
        assert!("cheap".parse::<PriceFilter>().is_err());
    }
}
