use std::fmt;
use std::str::FromStr;

use calc::CalcMode;

/// The input field a voice capture is aimed at.
///
/// Closed set so routing is an exhaustive match; an unknown target name is
/// a parse error at the command boundary, never a runtime dispatch miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTarget {
    Price,
    Volume,
    DiscountPrice,
    DiscountRate,
}

impl InputTarget {
    /// The calculator mode that owns this field; errors from a capture are
    /// scoped to it.
    pub fn mode(&self) -> CalcMode {
        match self {
            InputTarget::Price | InputTarget::Volume => CalcMode::UnitPrice,
            InputTarget::DiscountPrice | InputTarget::DiscountRate => CalcMode::Discount,
        }
    }
}

impl fmt::Display for InputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputTarget::Price => "price",
            InputTarget::Volume => "volume",
            InputTarget::DiscountPrice => "discount-price",
            InputTarget::DiscountRate => "discount-rate",
        };
        f.write_str(s)
    }
}

impl FromStr for InputTarget {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(InputTarget::Price),
            "volume" => Ok(InputTarget::Volume),
            "discount-price" => Ok(InputTarget::DiscountPrice),
            "discount-rate" => Ok(InputTarget::DiscountRate),
            other => Err(UnknownTarget(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown input target: {0}")]
pub struct UnknownTarget(pub String);
