//! Discounted-price computation.

use crate::types::Preview;

/// Compute the price after applying a percentage discount.
///
/// Undefined when the price is non-positive or the rate is outside
/// `[0, 100]` (a NaN rate is outside both bounds). A rate of 0 leaves the
/// price unchanged; a rate of 100 yields 0.
pub fn discount_preview(raw_price: f64, rate_percent: f64) -> Preview {
    if !(raw_price > 0.0) || !(0.0..=100.0).contains(&rate_percent) {
        return Preview::Undefined;
    }

    Preview::Value(raw_price * (100.0 - rate_percent) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_percent_off() {
        assert_eq!(discount_preview(1000.0, 20.0), Preview::Value(800.0));
    }

    #[test]
    fn zero_rate_keeps_the_price() {
        assert_eq!(discount_preview(1000.0, 0.0), Preview::Value(1000.0));
    }

    #[test]
    fn full_discount_reaches_zero() {
        assert_eq!(discount_preview(500.0, 100.0), Preview::Value(0.0));
    }

    #[test]
    fn out_of_range_rate_is_undefined() {
        assert_eq!(discount_preview(1000.0, 150.0), Preview::Undefined);
        assert_eq!(discount_preview(1000.0, -1.0), Preview::Undefined);
        assert_eq!(discount_preview(1000.0, f64::NAN), Preview::Undefined);
    }

    #[test]
    fn non_positive_price_is_undefined() {
        assert_eq!(discount_preview(0.0, 20.0), Preview::Undefined);
        assert_eq!(discount_preview(-100.0, 20.0), Preview::Undefined);
        assert_eq!(discount_preview(f64::NAN, 20.0), Preview::Undefined);
    }

    #[test]
    fn display_rounds_to_whole_yen() {
        assert_eq!(discount_preview(199.0, 15.0).display(0), "¥169");
    }
}
