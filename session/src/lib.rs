pub mod ledger;
pub mod manager;
pub mod model;

pub use ledger::{HISTORY_CAPACITY, HistoryLedger, LedgerEntry};
pub use manager::{CalcSession, ConfirmError};
pub use model::{DiscountRecord, PriceQuoteRecord};
