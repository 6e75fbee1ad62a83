use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which calculator a value, an error or a status notice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcMode {
    UnitPrice,
    Discount,
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CalcMode::UnitPrice => "unitprice",
            CalcMode::Discount => "discount",
        };
        f.write_str(s)
    }
}

impl FromStr for CalcMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unitprice" => Ok(CalcMode::UnitPrice),
            "discount" => Ok(CalcMode::Discount),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown calculator mode: {0}")]
pub struct UnknownMode(pub String);

/// Outcome of a non-committing preview computation.
///
/// `Undefined` means the inputs were incomplete or out of range; it is
/// rendered as a placeholder dash, never stored, and never a confirm
/// success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    Undefined,
    Value(f64),
}

impl Preview {
    pub fn is_defined(&self) -> bool {
        matches!(self, Preview::Value(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Preview::Undefined => None,
            Preview::Value(v) => Some(*v),
        }
    }

    /// Render for display. Rounding happens here only; stored records keep
    /// full precision.
    pub fn display(&self, decimals: usize) -> String {
        match self {
            Preview::Undefined => "-".to_string(),
            Preview::Value(v) => format!("¥{v:.decimals$}"),
        }
    }
}
