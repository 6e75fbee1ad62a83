use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use calc::Unit;

use crate::ledger::LedgerEntry;

/// One confirmed unit-price calculation.
///
/// Created only by a successful confirm, immutable afterwards, destroyed
/// only by ledger eviction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuoteRecord {
    pub volume: f64,
    pub raw_price: f64,
    pub unit: Unit,
    /// Full-precision normalized price; rounding is display-only.
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
}

impl PriceQuoteRecord {
    /// One-line rendering for history lists, e.g.
    /// `250g ¥398 → ¥159.20 per 100g`.
    pub fn summary(&self) -> String {
        format!(
            "{}{} ¥{} → ¥{:.2} per {}",
            self.volume,
            self.unit.volume_suffix(),
            self.raw_price,
            self.unit_price,
            self.unit
        )
    }
}

impl LedgerEntry for PriceQuoteRecord {
    fn same_inputs(&self, other: &Self) -> bool {
        self.raw_price == other.raw_price
            && self.volume == other.volume
            && self.unit == other.unit
    }
}

/// One confirmed discount calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRecord {
    pub original_price: f64,
    pub rate_percent: f64,
    pub discounted_price: f64,
    pub created_at: DateTime<Utc>,
}

impl DiscountRecord {
    /// One-line rendering, e.g. `¥1000 at 20% off → ¥800`.
    pub fn summary(&self) -> String {
        format!(
            "¥{} at {}% off → ¥{:.0}",
            self.original_price, self.rate_percent, self.discounted_price
        )
    }
}

impl LedgerEntry for DiscountRecord {
    fn same_inputs(&self, other: &Self) -> bool {
        self.original_price == other.original_price && self.rate_percent == other.rate_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(price: f64, volume: f64, unit: Unit) -> PriceQuoteRecord {
        PriceQuoteRecord {
            volume,
            raw_price: price,
            unit,
            unit_price: price / volume * unit.factor(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn quote_equality_ignores_timestamp_and_derived_price() {
        let mut a = quote(398.0, 250.0, Unit::Per100G);
        let b = quote(398.0, 250.0, Unit::Per100G);
        a.created_at = a.created_at - chrono::Duration::seconds(60);
        a.unit_price = 0.0;
        assert!(a.same_inputs(&b));
    }

    #[test]
    fn quote_equality_is_exact_on_domain_fields() {
        let a = quote(398.0, 250.0, Unit::Per100G);
        assert!(!a.same_inputs(&quote(398.0, 250.0, Unit::Per1Kg)));
        assert!(!a.same_inputs(&quote(398.01, 250.0, Unit::Per100G)));
        assert!(!a.same_inputs(&quote(398.0, 250.5, Unit::Per100G)));
    }

    #[test]
    fn summary_formats_volume_with_unit_suffix() {
        let r = quote(398.0, 250.0, Unit::Per100G);
        assert_eq!(r.summary(), "250g ¥398 → ¥159.20 per 100g");
    }

    #[test]
    fn discount_summary_rounds_to_whole_yen() {
        let r = DiscountRecord {
            original_price: 1000.0,
            rate_percent: 20.0,
            discounted_price: 800.0,
            created_at: Utc::now(),
        };
        assert_eq!(r.summary(), "¥1000 at 20% off → ¥800");
    }
}
