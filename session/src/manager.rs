//! The calculation session.
//!
//! One `CalcSession` owns everything the two calculators share: the current
//! raw inputs, the selected reference unit, the active tab and the two
//! independent history ledgers. There is no ambient singleton; callers hold
//! the value and pass it by reference.
//!
//! All operations are synchronous and infallible except `confirm_*`, which
//! re-validate, reject duplicates and otherwise leave every piece of prior
//! state untouched on failure.

use chrono::Utc;
use thiserror::Error;

use calc::{
    CalcMode, Preview, Unit, ValidationError, discount_preview, unit_price_preview,
    validate_discount, validate_pricing,
};

use crate::ledger::{DuplicateEntry, HistoryLedger};
use crate::model::{DiscountRecord, PriceQuoteRecord};

/// Raw field state of the unit-price calculator. `None` means the field is
/// empty; previews and validation treat it as 0, which keeps "empty" and
/// "explicitly zero" distinct in the model but identical in behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingInputs {
    pub price: Option<f64>,
    pub volume: Option<f64>,
    pub unit: Unit,
}

impl PricingInputs {
    fn raw_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    fn raw_volume(&self) -> f64 {
        self.volume.unwrap_or(0.0)
    }
}

/// Raw field state of the discount calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountInputs {
    pub price: Option<f64>,
    pub rate: Option<f64>,
}

impl DiscountInputs {
    fn raw_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    fn raw_rate(&self) -> f64 {
        self.rate.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfirmError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("an identical calculation is already in the history")]
    Duplicate,
}

impl From<DuplicateEntry> for ConfirmError {
    fn from(_: DuplicateEntry) -> Self {
        ConfirmError::Duplicate
    }
}

pub struct CalcSession {
    tab: CalcMode,
    pricing: PricingInputs,
    discount: DiscountInputs,
    pricing_history: HistoryLedger<PriceQuoteRecord>,
    discount_history: HistoryLedger<DiscountRecord>,
}

impl CalcSession {
    pub fn new() -> Self {
        Self {
            tab: CalcMode::UnitPrice,
            pricing: PricingInputs::default(),
            discount: DiscountInputs::default(),
            pricing_history: HistoryLedger::new(),
            discount_history: HistoryLedger::new(),
        }
    }

    pub fn tab(&self) -> CalcMode {
        self.tab
    }

    pub fn switch_tab(&mut self, mode: CalcMode) {
        self.tab = mode;
    }

    pub fn pricing_inputs(&self) -> PricingInputs {
        self.pricing
    }

    pub fn discount_inputs(&self) -> DiscountInputs {
        self.discount
    }

    // ---- value-changed events -------------------------------------------
    //
    // Each setter stores the raw value and hands back the recomputed
    // preview, so the caller can re-render without a second call.

    pub fn set_price(&mut self, price: Option<f64>) -> Preview {
        self.pricing.price = price;
        self.pricing_preview()
    }

    pub fn set_volume(&mut self, volume: Option<f64>) -> Preview {
        self.pricing.volume = volume;
        self.pricing_preview()
    }

    pub fn select_unit(&mut self, unit: Unit) -> Preview {
        self.pricing.unit = unit;
        self.pricing_preview()
    }

    pub fn set_discount_price(&mut self, price: Option<f64>) -> Preview {
        self.discount.price = price;
        self.discount_preview()
    }

    pub fn set_discount_rate(&mut self, rate: Option<f64>) -> Preview {
        self.discount.rate = rate;
        self.discount_preview()
    }

    // ---- previews -------------------------------------------------------

    pub fn pricing_preview(&self) -> Preview {
        unit_price_preview(
            self.pricing.raw_price(),
            self.pricing.raw_volume(),
            self.pricing.unit,
        )
    }

    pub fn discount_preview(&self) -> Preview {
        discount_preview(self.discount.raw_price(), self.discount.raw_rate())
    }

    pub fn preview(&self, mode: CalcMode) -> Preview {
        match mode {
            CalcMode::UnitPrice => self.pricing_preview(),
            CalcMode::Discount => self.discount_preview(),
        }
    }

    // ---- confirm --------------------------------------------------------

    /// Confirm the current unit-price inputs into the pricing ledger.
    ///
    /// Re-validates with the preview rules, rejects duplicates against the
    /// current window, then prepends a timestamped record and truncates the
    /// ledger to capacity. On any error the ledger and inputs are unchanged.
    pub fn confirm_pricing(&mut self) -> Result<PriceQuoteRecord, ConfirmError> {
        let price = self.pricing.raw_price();
        let volume = self.pricing.raw_volume();
        validate_pricing(price, volume)?;

        let unit_price = match unit_price_preview(price, volume, self.pricing.unit) {
            Preview::Value(v) => v,
            // Unreachable after validation; kept as an error rather than a
            // panic so a formula change cannot take the process down.
            Preview::Undefined => return Err(ValidationError::NonPositiveAmount.into()),
        };

        let record = PriceQuoteRecord {
            volume,
            raw_price: price,
            unit: self.pricing.unit,
            unit_price,
            created_at: Utc::now(),
        };

        self.pricing_history.insert(record.clone())?;
        Ok(record)
    }

    /// Confirm the current discount inputs into the discount ledger.
    pub fn confirm_discount(&mut self) -> Result<DiscountRecord, ConfirmError> {
        let price = self.discount.raw_price();
        let rate = self.discount.raw_rate();
        validate_discount(price, rate)?;

        let discounted = match discount_preview(price, rate) {
            Preview::Value(v) => v,
            Preview::Undefined => return Err(ValidationError::NonPositiveAmount.into()),
        };

        let record = DiscountRecord {
            original_price: price,
            rate_percent: rate,
            discounted_price: discounted,
            created_at: Utc::now(),
        };

        self.discount_history.insert(record.clone())?;
        Ok(record)
    }

    // ---- clear & history ------------------------------------------------

    /// Reset the raw inputs of one calculator. The unit selection and both
    /// history ledgers survive.
    pub fn clear(&mut self, mode: CalcMode) {
        match mode {
            CalcMode::UnitPrice => {
                self.pricing.price = None;
                self.pricing.volume = None;
            }
            CalcMode::Discount => {
                self.discount.price = None;
                self.discount.rate = None;
            }
        }
    }

    /// Pricing history, newest first, length ≤ 3.
    pub fn pricing_history(&self) -> Vec<PriceQuoteRecord> {
        self.pricing_history.snapshot()
    }

    /// Discount history, newest first, length ≤ 3.
    pub fn discount_history(&self) -> Vec<DiscountRecord> {
        self.discount_history.snapshot()
    }
}

impl Default for CalcSession {
    fn default() -> Self {
        Self::new()
    }
}
