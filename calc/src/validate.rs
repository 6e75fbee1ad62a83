//! Confirm-time input validation.
//
//  Previews silently show a dash for bad inputs; a confirm must instead
//  tell the caller *what* was wrong, so these checks return a typed error
//  using exactly the same rules the previews apply.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("price and volume must be positive")]
    NonPositiveAmount,

    #[error("discount rate must be between 0 and 100, got {rate}")]
    RateOutOfRange { rate: f64 },
}

/// Preconditions for confirming a unit-price calculation.
pub fn validate_pricing(raw_price: f64, raw_volume: f64) -> Result<(), ValidationError> {
    if !(raw_price > 0.0) || !(raw_volume > 0.0) {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

/// Preconditions for confirming a discount calculation. The price check
/// runs first so an empty form reports the missing price, not the rate.
pub fn validate_discount(raw_price: f64, rate_percent: f64) -> Result<(), ValidationError> {
    if !(raw_price > 0.0) {
        return Err(ValidationError::NonPositiveAmount);
    }
    if !(0.0..=100.0).contains(&rate_percent) {
        return Err(ValidationError::RateOutOfRange { rate: rate_percent });
    }
    Ok(())
}
