use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reference quantity a unit price is normalized to.
///
/// Closed set: every label used anywhere in the system resolves to exactly
/// one variant, and an unrecognized label is a parse error at the input
/// boundary rather than a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Per100G,
    Per1Kg,
    Per100Ml,
    Per1L,
    Per100Pc,
    Per1Pc,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Per100G,
        Unit::Per1Kg,
        Unit::Per100Ml,
        Unit::Per1L,
        Unit::Per100Pc,
        Unit::Per1Pc,
    ];

    /// Multiplier applied to a per-single-unit price to reach the reference
    /// quantity: `unit_price = raw_price / volume * factor`.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Per100G => 100.0,
            Unit::Per1Kg => 1000.0,
            Unit::Per100Ml => 100.0,
            Unit::Per1L => 1000.0,
            Unit::Per100Pc => 100.0,
            Unit::Per1Pc => 1.0,
        }
    }

    /// Suffix for the *entered* volume. Weight-based units are entered in
    /// grams even when the price is normalized per kilogram; likewise ml
    /// for per-liter.
    pub fn volume_suffix(&self) -> &'static str {
        match self {
            Unit::Per100G | Unit::Per1Kg => "g",
            Unit::Per100Ml | Unit::Per1L => "ml",
            Unit::Per100Pc | Unit::Per1Pc => "pc",
        }
    }

    /// Label shown on the unit selector and in history lines.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Per100G => "100g",
            Unit::Per1Kg => "1kg",
            Unit::Per100Ml => "100ml",
            Unit::Per1L => "1L",
            Unit::Per100Pc => "100pc",
            Unit::Per1Pc => "1pc",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Per100G
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "100g" => Ok(Unit::Per100G),
            "1kg" => Ok(Unit::Per1Kg),
            "100ml" => Ok(Unit::Per100Ml),
            "1L" => Ok(Unit::Per1L),
            "100pc" => Ok(Unit::Per100Pc),
            "1pc" => Ok(Unit::Per1Pc),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown unit label: {0}")]
pub struct UnknownUnit(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_round_trips() {
        for unit in Unit::ALL {
            let parsed: Unit = unit.label().parse().unwrap();
            assert_eq!(parsed, unit);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("500g".parse::<Unit>().is_err());
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn factors_match_reference_quantities() {
        assert_eq!(Unit::Per100G.factor(), 100.0);
        assert_eq!(Unit::Per1Kg.factor(), 1000.0);
        assert_eq!(Unit::Per100Ml.factor(), 100.0);
        assert_eq!(Unit::Per1L.factor(), 1000.0);
        assert_eq!(Unit::Per100Pc.factor(), 100.0);
        assert_eq!(Unit::Per1Pc.factor(), 1.0);
    }

    #[test]
    fn weight_units_share_the_gram_suffix() {
        assert_eq!(Unit::Per100G.volume_suffix(), "g");
        assert_eq!(Unit::Per1Kg.volume_suffix(), "g");
        assert_eq!(Unit::Per1L.volume_suffix(), "ml");
        assert_eq!(Unit::Per1Pc.volume_suffix(), "pc");
    }
}
