//! Money, quantities and the kinds of things a player can own.

use std::fmt;

/// Whole currency units ("гробли").  Signed so that monthly profit and
/// commodity benefit can go negative; cash itself never does.
pub type Money = i64;

/// Commodity quantities (barrels of oil, acres of land).
pub type Units = u64;

/// The two freely traded commodities on the exchange.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Commodity {
    Oil,
    Land,
}

impl Commodity {
    pub const ALL: [Commodity; 2] = [Commodity::Oil, Commodity::Land];
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Commodity::Oil  => "oil",
            Commodity::Land => "land",
        })
    }
}

/// Market product categories.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Vehicle,
    Dwelling,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Vehicle  => "vehicle",
            Category::Dwelling => "dwelling",
        })
    }
}
