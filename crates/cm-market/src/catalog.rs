//! The fixed goods catalog.

use cm_core::{Money, PriceRange, SimRng};

/// Standard vehicle listings: name, `[low, high)` price range.
pub const VEHICLES: [(&str, PriceRange); 7] = [
    ("Луаз-969",     PriceRange::new(6_500, 12_000)),
    ("Москвич-412",  PriceRange::new(10_000, 20_000)),
    ("Москвич-2141", PriceRange::new(18_000, 27_000)),
    ("ВАЗ-2106",     PriceRange::new(24_000, 37_000)),
    ("ВАЗ-2109",     PriceRange::new(33_000, 50_000)),
    ("ГАЗ-24",       PriceRange::new(45_000, 65_000)),
    ("ГАЗ-3102",     PriceRange::new(60_000, 75_000)),
];

/// Standard dwelling listings, by number of rooms.
pub const DWELLINGS: [(&str, PriceRange); 7] = [
    ("1-комн", PriceRange::new(6_500, 12_000)),
    ("2-комн", PriceRange::new(9_000, 17_000)),
    ("3-комн", PriceRange::new(16_000, 30_000)),
    ("4-комн", PriceRange::new(20_000, 35_000)),
    ("5-комн", PriceRange::new(27_000, 50_000)),
    ("6-комн", PriceRange::new(35_000, 65_000)),
    ("7-комн", PriceRange::new(40_000, 75_000)),
];

/// One item on sale and its current price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub name:  String,
    pub price: Money,
    pub range: PriceRange,
}

impl Listing {
    /// A listing priced by an initial draw from `range`.
    pub fn rolled(name: impl Into<String>, range: PriceRange, rng: &mut SimRng) -> Self {
        Self {
            name: name.into(),
            price: range.sample(rng),
            range,
        }
    }

    pub fn reroll(&mut self, rng: &mut SimRng) {
        self.price = self.range.sample(rng);
    }

    /// Display width in characters (not bytes; names are Cyrillic).
    #[inline]
    pub fn name_width(&self) -> usize {
        self.name.chars().count()
    }
}
