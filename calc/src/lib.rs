pub mod discount;
pub mod pricing;
pub mod types;
pub mod unit;
pub mod validate;

pub use discount::discount_preview;
pub use pricing::unit_price_preview;
pub use types::{CalcMode, Preview};
pub use unit::Unit;
pub use validate::{ValidationError, validate_discount, validate_pricing};
