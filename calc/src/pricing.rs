//! Unit-price normalization.
//!
//! Given a raw shelf price, the package volume and a reference unit, the
//! preview answers "what does this cost per 100g / 1kg / ...". The
//! computation is pure and deterministic; anything display- or
//! history-related lives outside this module.

use crate::types::Preview;
use crate::unit::Unit;

/// Compute the normalized unit price for display.
///
/// Returns `Preview::Undefined` when either input is missing, zero,
/// negative or NaN (NaN fails the `> 0.0` comparison and falls into the
/// guard). Otherwise:
///
/// ```text
/// unit_price = raw_price / raw_volume * unit.factor()
/// ```
///
/// The result is strictly positive whenever it is defined.
pub fn unit_price_preview(raw_price: f64, raw_volume: f64, unit: Unit) -> Preview {
    if !(raw_price > 0.0) || !(raw_volume > 0.0) {
        return Preview::Undefined;
    }

    Preview::Value(raw_price / raw_volume * unit.factor())
}
